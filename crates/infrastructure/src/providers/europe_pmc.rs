use crate::http::{get_json, join_url};
use async_trait::async_trait;
use medref_application::ports::LiteratureSource;
use medref_domain::config::ProvidersConfig;
use medref_domain::{DomainError, LiteratureArticle};
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_ID: &str = "europe-pmc";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    result_list: Option<ResultList>,
}

#[derive(Debug, Deserialize)]
struct ResultList {
    #[serde(default)]
    result: Vec<EuropePmcResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EuropePmcResult {
    id: Option<String>,
    source: Option<String>,
    title: Option<String>,
    journal_title: Option<String>,
    first_publication_date: Option<String>,
    pub_year: Option<String>,
}

/// Europe PMC REST search, the secondary literature index.
pub struct EuropePmcClient {
    base_url: String,
    timeout: Duration,
}

impl EuropePmcClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(config.europe_pmc_url.clone(), config.timeout())
    }
}

#[async_trait]
impl LiteratureSource for EuropePmcClient {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LiteratureArticle>, DomainError> {
        let response: SearchResponse = get_json(
            PROVIDER_ID,
            &join_url(&self.base_url, "search"),
            &[
                ("query", query.to_string()),
                ("format", "json".to_string()),
                ("pageSize", limit.max(1).to_string()),
            ],
            self.timeout,
        )
        .await?;

        Ok(articles(response, limit))
    }
}

fn articles(response: SearchResponse, limit: usize) -> Vec<LiteratureArticle> {
    response
        .result_list
        .map(|list| list.result)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|r| {
            let id = r.id?;
            let title = r.title?.trim().trim_end_matches('.').to_string();
            if title.is_empty() {
                return None;
            }
            let id = match r.source {
                Some(source) => format!("{}:{}", source, id),
                None => id,
            };
            Some(LiteratureArticle {
                id,
                title,
                journal: r.journal_title,
                published: r.first_publication_date.or(r.pub_year),
            })
        })
        .take(limit)
        .collect()
}
