use crate::services::{CacheStore, CacheStoreStats, ListCatalog};
use medref_domain::{ListCategory, RefreshStatus};
use std::sync::Arc;

pub struct GetRefreshStatusUseCase {
    catalog: Arc<ListCatalog>,
    cache: Arc<CacheStore>,
}

impl GetRefreshStatusUseCase {
    pub fn new(catalog: Arc<ListCatalog>, cache: Arc<CacheStore>) -> Self {
        Self { catalog, cache }
    }

    pub fn execute(&self, category: ListCategory) -> RefreshStatus {
        self.catalog.status(category)
    }

    pub fn execute_all(&self) -> Vec<RefreshStatus> {
        ListCategory::all()
            .iter()
            .map(|category| self.catalog.status(*category))
            .collect()
    }

    pub fn cache_stats(&self) -> CacheStoreStats {
        self.cache.stats()
    }
}
