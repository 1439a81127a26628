use crate::http::{get_json, join_url};
use async_trait::async_trait;
use medref_application::ports::PhenotypeSource;
use medref_domain::config::ProvidersConfig;
use medref_domain::DomainError;
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_ID: &str = "hpo";

#[derive(Debug, Deserialize)]
struct AnnotationNetwork {
    #[serde(default)]
    phenotypes: Vec<Phenotype>,
}

#[derive(Debug, Deserialize)]
struct Phenotype {
    name: Option<String>,
}

/// Human Phenotype Ontology annotations for a disease id.
pub struct HpoAnnotationClient {
    base_url: String,
    timeout: Duration,
}

impl HpoAnnotationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(config.phenotype_url.clone(), config.timeout())
    }
}

#[async_trait]
impl PhenotypeSource for HpoAnnotationClient {
    async fn phenotypes_for(&self, disease_id: &str) -> Result<Vec<String>, DomainError> {
        let network: AnnotationNetwork = get_json(
            PROVIDER_ID,
            &join_url(&self.base_url, disease_id),
            &[],
            self.timeout,
        )
        .await?;

        Ok(phenotype_names(network))
    }
}

fn phenotype_names(network: AnnotationNetwork) -> Vec<String> {
    network
        .phenotypes
        .into_iter()
        .filter_map(|p| p.name)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
