use medref_application::services::CacheStore;
use medref_domain::{CacheStrategyRegistry, Config};
use medref_infrastructure::cache::{select_cache_backend, InMemoryCacheBackend};
use std::sync::Arc;
use tracing::info;

pub async fn build_cache_store(config: &Config) -> Arc<CacheStore> {
    let registry = CacheStrategyRegistry::new().with_overrides(&config.refresh);
    for category in medref_domain::CacheCategory::all() {
        info!(
            category = %category,
            ttl_secs = registry.ttl(*category).as_secs(),
            refresh_secs = registry.refresh_interval(*category).as_secs(),
            "Cache strategy"
        );
    }

    let primary = select_cache_backend(&config.cache).await;

    Arc::new(
        CacheStore::new(
            primary,
            Arc::new(InMemoryCacheBackend::new()),
            Arc::new(registry),
        )
        .with_stale_grace(config.cache.stale_grace())
        .with_recheck_interval(config.cache.recheck_interval())
        .with_op_timeout(config.cache.connect_timeout()),
    )
}
