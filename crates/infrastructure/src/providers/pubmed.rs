use crate::http::{get_json, join_url};
use async_trait::async_trait;
use medref_application::ports::LiteratureSource;
use medref_domain::config::ProvidersConfig;
use medref_domain::{DomainError, LiteratureArticle};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const PROVIDER_ID: &str = "pubmed";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    esearchresult: Option<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    result: Option<Value>,
}

/// PubMed via NCBI E-utilities: `esearch` for ids, then `esummary`.
pub struct PubMedClient {
    base_url: String,
    timeout: Duration,
}

impl PubMedClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(config.pubmed_url.clone(), config.timeout())
    }
}

#[async_trait]
impl LiteratureSource for PubMedClient {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LiteratureArticle>, DomainError> {
        let search: SearchResponse = get_json(
            PROVIDER_ID,
            &join_url(&self.base_url, "esearch.fcgi"),
            &[
                ("db", "pubmed".to_string()),
                ("term", query.to_string()),
                ("retmax", limit.max(1).to_string()),
                ("retmode", "json".to_string()),
            ],
            self.timeout,
        )
        .await?;

        let ids = search.esearchresult.map(|r| r.idlist).unwrap_or_default();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let summary: SummaryResponse = get_json(
            PROVIDER_ID,
            &join_url(&self.base_url, "esummary.fcgi"),
            &[
                ("db", "pubmed".to_string()),
                ("id", ids.join(",")),
                ("retmode", "json".to_string()),
            ],
            self.timeout,
        )
        .await?;

        Ok(articles_from_summary(&ids, summary))
    }
}

/// Articles in `esearch` rank order; ids missing from the summary are skipped.
fn articles_from_summary(ids: &[String], summary: SummaryResponse) -> Vec<LiteratureArticle> {
    let Some(result) = summary.result else {
        return Vec::new();
    };

    ids.iter()
        .filter_map(|id| {
            let doc = result.get(id)?;
            let title = doc.get("title")?.as_str()?.trim();
            if title.is_empty() {
                return None;
            }
            Some(LiteratureArticle {
                id: format!("PMID:{}", id),
                title: title.to_string(),
                journal: text_field(doc, "fulljournalname").or_else(|| text_field(doc, "source")),
                published: text_field(doc, "pubdate"),
            })
        })
        .collect()
}

fn text_field(doc: &Value, field: &str) -> Option<String> {
    doc.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
