use crate::ports::{ListBackupRepository, ListProvider};
use crate::services::{CacheStore, ListCatalog};
use chrono::Utc;
use medref_domain::{CachedList, DomainError, ListCategory, ListSource, RefreshOutcome};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Use case: fetch a fresh list from the primary API and publish it.
///
/// At most one refresh per category runs at a time; a second trigger while
/// one is in flight returns [`RefreshOutcome::Coalesced`] without a fetch.
/// A failed refresh leaves the current list untouched.
pub struct RefreshListUseCase {
    provider: Arc<dyn ListProvider>,
    backup: Arc<dyn ListBackupRepository>,
    catalog: Arc<ListCatalog>,
    cache: Arc<CacheStore>,
    timeout: Duration,
    max_items: usize,
}

impl RefreshListUseCase {
    pub fn new(
        provider: Arc<dyn ListProvider>,
        backup: Arc<dyn ListBackupRepository>,
        catalog: Arc<ListCatalog>,
        cache: Arc<CacheStore>,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            backup,
            catalog,
            cache,
            timeout,
            max_items: 500,
        }
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items.max(1);
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, category: ListCategory) -> RefreshOutcome {
        let Some(_guard) = self.catalog.try_begin_refresh(category) else {
            debug!(category = %category, "Refresh already in flight, coalescing");
            return RefreshOutcome::Coalesced;
        };

        let start = Instant::now();
        let items = match self.fetch(category).await {
            Ok(items) => items,
            Err(e) => {
                let error = e.to_string();
                self.catalog
                    .record_failure(category, error.clone(), Utc::now());
                warn!(
                    category = %category,
                    provider = self.provider.provider_id(),
                    error = %error,
                    "List refresh failed, keeping current list"
                );
                return RefreshOutcome::Failed { error };
            }
        };

        let list = match self
            .backup
            .replace(category, &items, ListSource::PrimaryApi)
            .await
        {
            Ok(saved) => saved,
            Err(e) => {
                warn!(category = %category, error = %e, "Failed to persist list backup");
                CachedList::new(category, items, ListSource::PrimaryApi)
            }
        };

        let count = list.count;
        self.cache
            .set_json(&category.cache_key(), &list, category.cache_category())
            .await;
        self.catalog.install(list);
        self.catalog.record_success(category, Utc::now());

        info!(
            category = %category,
            count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "List refreshed"
        );

        RefreshOutcome::Refreshed { count }
    }

    async fn fetch(&self, category: ListCategory) -> Result<Vec<String>, DomainError> {
        let raw = tokio::time::timeout(
            self.timeout,
            self.provider.fetch_list(category, self.max_items),
        )
        .await
        .map_err(|_| {
            DomainError::ProviderTimeout(format!(
                "{} did not answer within {}ms",
                self.provider.provider_id(),
                self.timeout.as_millis()
            ))
        })??;

        let items = normalize_items(raw, self.max_items);
        if items.is_empty() {
            return Err(DomainError::MalformedResponse(format!(
                "{} returned an empty {} list",
                self.provider.provider_id(),
                category
            )));
        }
        Ok(items)
    }
}

/// Trim, drop blanks and case-insensitive duplicates, cap at `max`.
fn normalize_items(raw: Vec<String>, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_items() {
        let items = normalize_items(
            vec![
                " Aspirin".into(),
                "aspirin".into(),
                "".into(),
                "Ibuprofen".into(),
                "Naproxen".into(),
            ],
            2,
        );
        assert_eq!(items, vec!["Aspirin".to_string(), "Ibuprofen".to_string()]);
    }
}
