use super::refresh_list::RefreshListUseCase;
use crate::ports::ListBackupRepository;
use crate::services::{CacheStore, ListCatalog};
use chrono::Utc;
use medref_domain::{CachedList, ListCategory, ListSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_ON_DEMAND_COOLDOWN: Duration = Duration::from_secs(60);

/// Use case: serve the current list of a category. Never fails.
///
/// Read order is CacheStore, live snapshot, persistence backup (only while
/// the snapshot is still the static seed). A cache miss schedules a
/// coalesced background refresh and returns without waiting for it.
pub struct GetCachedListUseCase {
    catalog: Arc<ListCatalog>,
    cache: Arc<CacheStore>,
    backup: Arc<dyn ListBackupRepository>,
    refresher: Arc<RefreshListUseCase>,
    cooldown: Duration,
}

impl GetCachedListUseCase {
    pub fn new(
        catalog: Arc<ListCatalog>,
        cache: Arc<CacheStore>,
        backup: Arc<dyn ListBackupRepository>,
        refresher: Arc<RefreshListUseCase>,
    ) -> Self {
        Self {
            catalog,
            cache,
            backup,
            refresher,
            cooldown: DEFAULT_ON_DEMAND_COOLDOWN,
        }
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub async fn execute(&self, category: ListCategory) -> Arc<CachedList> {
        let key = category.cache_key();
        let current = self.catalog.current(category);

        if let Some(cached) = self
            .cache
            .get_json::<CachedList>(&key, category.cache_category())
            .await
        {
            let updated_at = cached.updated_at;
            let replace =
                |c: &CachedList| c.source != ListSource::PrimaryApi || c.updated_at < updated_at;
            if cached.category == category && replace(&current) {
                if self.catalog.install_if(cached, replace) {
                    debug!(category = %category, "Installed newer list from cache");
                }
                return self.catalog.current(category);
            }
            return current;
        }

        self.schedule_refresh(category);

        if current.source != ListSource::StaticFallback {
            return current;
        }

        match self.backup.load_latest(category).await {
            Ok(Some(list)) if !list.is_empty() => {
                info!(
                    category = %category,
                    count = list.count,
                    "Promoting persistence backup over static list"
                );
                self.catalog
                    .install_if(list.as_backup(), |c| c.source == ListSource::StaticFallback);
                self.catalog.current(category)
            }
            Ok(_) => current,
            Err(e) => {
                warn!(category = %category, error = %e, "Backup read failed, serving static list");
                current
            }
        }
    }

    fn schedule_refresh(&self, category: ListCategory) {
        if self.catalog.is_refreshing(category) {
            return;
        }

        let status = self.catalog.status(category);
        if let Some(last) = status.last_attempt_at {
            let since = Utc::now().signed_duration_since(last);
            if since.to_std().map(|d| d < self.cooldown).unwrap_or(true) {
                debug!(category = %category, "On-demand refresh within cooldown, skipping");
                return;
            }
        }

        let refresher = Arc::clone(&self.refresher);
        tokio::spawn(async move {
            refresher.execute(category).await;
        });
    }
}
