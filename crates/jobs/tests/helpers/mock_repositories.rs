#![allow(dead_code)]

use async_trait::async_trait;
use medref_application::ports::{CacheBackend, ListBackupRepository, ListProvider};
use medref_domain::{CachedList, DomainError, ListCategory, ListSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock ListProvider
// ============================================================================

#[derive(Clone, Default)]
pub struct MockListProvider {
    items: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<AtomicBool>,
    fetch_count: Arc<AtomicU64>,
}

impl MockListProvider {
    pub fn with_items(items: &[&str]) -> Self {
        let provider = Self::default();
        *provider.items.lock().unwrap() = items.iter().map(|s| s.to_string()).collect();
        provider
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListProvider for MockListProvider {
    fn provider_id(&self) -> &str {
        "mock-primary"
    }

    async fn fetch_list(
        &self,
        _category: ListCategory,
        limit: usize,
    ) -> Result<Vec<String>, DomainError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderUnavailable("mock-primary: HTTP 503".into()));
        }
        Ok(self.items.lock().unwrap().iter().take(limit).cloned().collect())
    }
}

// ============================================================================
// Mock ListBackupRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockListBackupRepository {
    lists: Arc<Mutex<HashMap<ListCategory, CachedList>>>,
}

#[async_trait]
impl ListBackupRepository for MockListBackupRepository {
    async fn load_latest(&self, category: ListCategory) -> Result<Option<CachedList>, DomainError> {
        Ok(self.lists.lock().unwrap().get(&category).cloned())
    }

    async fn replace(
        &self,
        category: ListCategory,
        items: &[String],
        source: ListSource,
    ) -> Result<CachedList, DomainError> {
        let list = CachedList::new(category, items.to_vec(), source);
        self.lists.lock().unwrap().insert(category, list.clone());
        Ok(list)
    }
}

// ============================================================================
// Mock CacheBackend
// ============================================================================

#[derive(Clone, Default)]
pub struct MockCacheBackend {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    purge_count: Arc<AtomicU64>,
}

impl MockCacheBackend {
    pub fn purge_count(&self) -> u64 {
        self.purge_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheBackend for MockCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>, _retain: Duration) -> Result<(), DomainError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock-memory"
    }

    fn is_distributed(&self) -> bool {
        false
    }

    fn purge_expired(&self) -> usize {
        self.purge_count.fetch_add(1, Ordering::SeqCst);
        0
    }
}
