use crate::http::{get_json, join_url};
use async_trait::async_trait;
use medref_application::ports::ListProvider;
use medref_domain::config::ProvidersConfig;
use medref_domain::{DomainError, ListCategory};
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_ID: &str = "rxnav";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisplayNames {
    display_terms_list: Option<DisplayTerms>,
}

#[derive(Debug, Deserialize)]
struct DisplayTerms {
    #[serde(default)]
    term: Vec<String>,
}

/// Drug names from the NLM RxNav display-name index.
pub struct RxNavDrugClient {
    base_url: String,
    timeout: Duration,
}

impl RxNavDrugClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(config.drug_reference_url.clone(), config.timeout())
    }
}

#[async_trait]
impl ListProvider for RxNavDrugClient {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    async fn fetch_list(
        &self,
        category: ListCategory,
        limit: usize,
    ) -> Result<Vec<String>, DomainError> {
        if category != ListCategory::Drugs {
            return Err(DomainError::InvalidCategory(format!(
                "{} only serves drugs, not {}",
                PROVIDER_ID, category
            )));
        }

        let names: DisplayNames = get_json(
            PROVIDER_ID,
            &join_url(&self.base_url, "displaynames.json"),
            &[],
            self.timeout,
        )
        .await?;

        Ok(drug_names(names, limit))
    }
}

fn drug_names(names: DisplayNames, limit: usize) -> Vec<String> {
    names
        .display_terms_list
        .map(|list| list.term)
        .unwrap_or_default()
        .into_iter()
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
        .take(limit)
        .collect()
}
