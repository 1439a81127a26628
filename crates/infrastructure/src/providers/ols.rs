use crate::http::{get_json, join_url};
use async_trait::async_trait;
use medref_application::ports::ListProvider;
use medref_domain::config::ProvidersConfig;
use medref_domain::{DomainError, ListCategory};
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_ID: &str = "ols";
const ONTOLOGY: &str = "mondo";
/// Largest page OLS serves in one request.
const MAX_PAGE_SIZE: usize = 500;

#[derive(Debug, Deserialize)]
struct TermsPage {
    #[serde(rename = "_embedded", default)]
    embedded: Option<EmbeddedTerms>,
}

#[derive(Debug, Deserialize)]
struct EmbeddedTerms {
    #[serde(default)]
    terms: Vec<OlsTerm>,
}

#[derive(Debug, Deserialize)]
struct OlsTerm {
    label: Option<String>,
    #[serde(default)]
    is_obsolete: bool,
}

/// Disease names from the EBI Ontology Lookup Service (MONDO ontology).
pub struct OlsDiseaseOntologyClient {
    base_url: String,
    timeout: Duration,
}

impl OlsDiseaseOntologyClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(config.disease_ontology_url.clone(), config.timeout())
    }

    fn terms_url(&self) -> String {
        join_url(&self.base_url, &format!("ontologies/{}/terms", ONTOLOGY))
    }
}

#[async_trait]
impl ListProvider for OlsDiseaseOntologyClient {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    async fn fetch_list(
        &self,
        category: ListCategory,
        limit: usize,
    ) -> Result<Vec<String>, DomainError> {
        if category != ListCategory::Diseases {
            return Err(DomainError::InvalidCategory(format!(
                "{} only serves diseases, not {}",
                PROVIDER_ID, category
            )));
        }

        let size = limit.clamp(1, MAX_PAGE_SIZE);
        let page: TermsPage = get_json(
            PROVIDER_ID,
            &self.terms_url(),
            &[("size", size.to_string()), ("page", "0".to_string())],
            self.timeout,
        )
        .await?;

        Ok(disease_names(page, limit))
    }
}

fn disease_names(page: TermsPage, limit: usize) -> Vec<String> {
    page.embedded
        .map(|e| e.terms)
        .unwrap_or_default()
        .into_iter()
        .filter(|t| !t.is_obsolete)
        .filter_map(|t| t.label)
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::parse_json;

    #[test]
    fn test_parses_labels_and_skips_obsolete_terms() {
        let body = r#"{
            "_embedded": {"terms": [
                {"label": "type 2 diabetes mellitus", "obo_id": "MONDO:0005148",
                 "is_obsolete": false},
                {"label": "obsolete gout", "obo_id": "MONDO:0000001", "is_obsolete": true},
                {"label": " asthma ", "obo_id": "MONDO:0004979"},
                {"obo_id": "MONDO:0000002"}
            ]},
            "page": {"size": 20, "totalElements": 3, "number": 0}
        }"#;
        let page: TermsPage = parse_json(PROVIDER_ID, body).unwrap();
        assert_eq!(
            disease_names(page, 10),
            vec!["type 2 diabetes mellitus".to_string(), "asthma".to_string()]
        );
    }

    #[test]
    fn test_missing_embedded_block_is_empty() {
        let page: TermsPage = parse_json(PROVIDER_ID, r#"{"page": {}}"#).unwrap();
        assert!(disease_names(page, 10).is_empty());
    }
}
