#![allow(dead_code)]

use async_trait::async_trait;
use medref_application::ports::{
    CacheBackend, ConsumerHealthSource, ConsumerQuery, ListBackupRepository, ListProvider,
    LiteratureSource, PhenotypeSource, TrialRegistry,
};
use medref_domain::{
    CachedList, ClinicalTrial, DomainError, ListCategory, ListSource, LiteratureArticle,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock CacheBackend
// ============================================================================

#[derive(Clone, Default)]
pub struct MockCacheBackend {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

#[async_trait]
impl CacheBackend for MockCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>, _retain: Duration) -> Result<(), DomainError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.entries.write().await.remove(key);
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
}

// ============================================================================
// Mock list provider and backup
// ============================================================================

#[derive(Clone, Default)]
pub struct MockListProvider {
    lists: Arc<RwLock<HashMap<ListCategory, Vec<String>>>>,
    should_fail: Arc<AtomicBool>,
    fetch_count: Arc<AtomicU64>,
}

impl MockListProvider {
    pub async fn set_list(&self, category: ListCategory, items: &[&str]) {
        self.lists
            .write()
            .await
            .insert(category, items.iter().map(|s| s.to_string()).collect());
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
        category: ListCategory,
        limit: usize,
    ) -> Result<Vec<String>, DomainError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderUnavailable(
                "mock-primary: HTTP 503".to_string(),
            ));
        }
        Ok(self
            .lists
            .read()
            .await
            .get(&category)
            .map(|items| items.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

#[derive(Clone, Default)]
pub struct MockListBackupRepository {
    lists: Arc<RwLock<HashMap<ListCategory, CachedList>>>,
}

#[async_trait]
impl ListBackupRepository for MockListBackupRepository {
    async fn load_latest(&self, category: ListCategory) -> Result<Option<CachedList>, DomainError> {
        Ok(self.lists.read().await.get(&category).cloned())
    }

    async fn replace(
        &self,
        category: ListCategory,
        items: &[String],
        source: ListSource,
    ) -> Result<CachedList, DomainError> {
        let list = CachedList::new(category, items.to_vec(), source);
        self.lists.write().await.insert(category, list.clone());
        Ok(list)
    }
}

// ============================================================================
// Mock symptom sources
// ============================================================================

#[derive(Clone, Default)]
pub struct MockConsumerHealthSource {
    by_term: Arc<RwLock<HashMap<String, Vec<String>>>>,
    call_count: Arc<AtomicU64>,
}

impl MockConsumerHealthSource {
    pub async fn set_term(&self, term: &str, symptoms: &[&str]) {
        self.by_term
            .write()
            .await
            .insert(term.to_lowercase(), symptoms.iter().map(|s| s.to_string()).collect());
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConsumerHealthSource for MockConsumerHealthSource {
    async fn symptoms_for(&self, query: &ConsumerQuery) -> Result<Vec<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let found = match query {
            ConsumerQuery::Code { .. } => None,
            ConsumerQuery::Term(term) => {
                self.by_term.read().await.get(&term.to_lowercase()).cloned()
            }
        };
        Ok(found.unwrap_or_default())
    }
}

#[derive(Clone, Default)]
pub struct MockPhenotypeSource {
    should_fail: Arc<AtomicBool>,
}

impl MockPhenotypeSource {
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PhenotypeSource for MockPhenotypeSource {
    async fn phenotypes_for(&self, _disease_id: &str) -> Result<Vec<String>, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderTimeout("phenotype ontology".to_string()));
        }
        Ok(Vec::new())
    }
}

// ============================================================================
// Mock research sources
// ============================================================================

#[derive(Clone, Default)]
pub struct MockLiteratureSource {
    articles: Arc<RwLock<Vec<LiteratureArticle>>>,
}

impl MockLiteratureSource {
    pub async fn set_titles(&self, titles: &[&str]) {
        *self.articles.write().await = titles
            .iter()
            .enumerate()
            .map(|(i, title)| LiteratureArticle {
                id: format!("PMID:{}", 1000 + i),
                title: title.to_string(),
                journal: Some("Test Journal".to_string()),
                published: None,
            })
            .collect();
    }
}

#[async_trait]
impl LiteratureSource for MockLiteratureSource {
    fn provider_id(&self) -> &str {
        "mock-pubmed"
    }

    async fn search(
        &self,
        _query: &str,
        limit: usize,
    ) -> Result<Vec<LiteratureArticle>, DomainError> {
        Ok(self.articles.read().await.iter().take(limit).cloned().collect())
    }
}

#[derive(Clone, Default)]
pub struct MockTrialRegistry {
    should_fail: Arc<AtomicBool>,
}

impl MockTrialRegistry {
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl TrialRegistry for MockTrialRegistry {
    fn provider_id(&self) -> &str {
        "mock-trials"
    }

    async fn search(
        &self,
        condition: &str,
        _limit: usize,
    ) -> Result<Vec<ClinicalTrial>, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderUnavailable("mock-trials: HTTP 503".to_string()));
        }
        Ok(vec![ClinicalTrial {
            nct_id: "NCT00000001".to_string(),
            title: format!("Study of {}", condition),
            status: Some("RECRUITING".to_string()),
            conditions: vec![condition.to_string()],
        }])
    }
}
