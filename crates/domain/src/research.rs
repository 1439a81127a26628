use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteratureArticle {
    /// PubMed id when known, otherwise the provider's own identifier
    pub id: String,
    pub title: String,
    pub journal: Option<String>,
    pub published: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalTrial {
    pub nct_id: String,
    pub title: String,
    pub status: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    Fresh,
    /// Served past its TTL because no provider could refresh it.
    Stale,
    Unavailable,
}

/// Read-path answer for query-shaped categories. Failure is represented as
/// `freshness = Unavailable` with no items, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnswer<T> {
    pub items: Vec<T>,
    pub provider_id: Option<String>,
    pub freshness: Freshness,
}

impl<T> QueryAnswer<T> {
    pub fn unavailable() -> Self {
        Self {
            items: Vec::new(),
            provider_id: None,
            freshness: Freshness::Unavailable,
        }
    }
}
