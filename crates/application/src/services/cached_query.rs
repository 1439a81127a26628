use super::cache_store::CacheStore;
use super::fallback_chain::SourceFallbackChain;
use medref_domain::{CacheCategory, ChainResolution, Freshness, QueryAnswer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
struct CachedAnswer<T> {
    items: Vec<T>,
    provider_id: String,
}

/// Cache-first read for query-shaped categories (literature, trials).
///
/// Fresh hit → answer. Miss → fallback chain, result written back under the
/// category TTL. Chain exhausted → last stale answer if one is retained,
/// otherwise an empty `Unavailable` answer.
pub struct CachedQueryService<T>
where
    T: Send + Sync,
{
    cache: Arc<CacheStore>,
    category: CacheCategory,
    key_prefix: &'static str,
    chain: SourceFallbackChain<String, Vec<T>>,
}

impl<T> CachedQueryService<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(
        cache: Arc<CacheStore>,
        category: CacheCategory,
        key_prefix: &'static str,
        chain: SourceFallbackChain<String, Vec<T>>,
    ) -> Self {
        Self {
            cache,
            category,
            key_prefix,
            chain,
        }
    }

    pub fn cache_key(&self, normalized: &str) -> String {
        format!("{}:{}", self.key_prefix, normalized)
    }

    pub async fn query(&self, raw: &str) -> QueryAnswer<T> {
        let normalized = normalize_query(raw);
        if normalized.is_empty() {
            return QueryAnswer::unavailable();
        }
        let key = self.cache_key(&normalized);

        if let Some(cached) = self
            .cache
            .get_json::<CachedAnswer<T>>(&key, self.category)
            .await
        {
            return QueryAnswer {
                items: cached.items,
                provider_id: Some(cached.provider_id),
                freshness: Freshness::Fresh,
            };
        }

        match self.chain.resolve(&normalized).await {
            ChainResolution::Found { value, provider_id } => {
                let answer = CachedAnswer {
                    items: value,
                    provider_id: provider_id.to_string(),
                };
                self.cache.set_json(&key, &answer, self.category).await;
                info!(
                    category = %self.category,
                    provider = %provider_id,
                    count = answer.items.len(),
                    "Query answered from provider"
                );
                QueryAnswer {
                    items: answer.items,
                    provider_id: Some(answer.provider_id),
                    freshness: Freshness::Fresh,
                }
            }
            ChainResolution::NoneAvailable => {
                match self
                    .cache
                    .get_json_even_if_stale::<CachedAnswer<T>>(&key)
                    .await
                {
                    Some((stale, _)) => {
                        debug!(category = %self.category, key, "Serving stale answer");
                        QueryAnswer {
                            items: stale.items,
                            provider_id: Some(stale.provider_id),
                            freshness: Freshness::Stale,
                        }
                    }
                    None => QueryAnswer::unavailable(),
                }
            }
        }
    }
}

/// Lower-case and collapse whitespace so equivalent queries share a key.
pub(crate) fn normalize_query(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
