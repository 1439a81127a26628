#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use chrono::Utc;
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

#[derive(Clone)]
pub struct MockCacheBackend {
    name: &'static str,
    distributed: bool,
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    should_fail: Arc<AtomicBool>,
    should_hang: Arc<AtomicBool>,
    call_count: Arc<AtomicU64>,
}

impl MockCacheBackend {
    /// Stand-in for a shared backend such as Redis.
    pub fn distributed() -> Self {
        Self::with_name("mock-redis", true)
    }

    pub fn local() -> Self {
        Self::with_name("mock-memory", false)
    }

    fn with_name(name: &'static str, distributed: bool) -> Self {
        Self {
            name,
            distributed,
            entries: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            should_hang: Arc::new(AtomicBool::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Calls never complete while set, like a blackholed host.
    pub fn set_should_hang(&self, should_hang: bool) {
        self.should_hang.store(should_hang, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    async fn check(&self) -> Result<(), DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::CacheBackend(format!(
                "{}: connection refused",
                self.name
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheBackend for MockCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        self.check().await?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>, _retain: Duration) -> Result<(), DomainError> {
        self.check().await?;
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.check().await?;
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check().await
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn is_distributed(&self) -> bool {
        self.distributed
    }
}

// ============================================================================
// Mock ListProvider
// ============================================================================

#[derive(Clone)]
pub struct MockListProvider {
    lists: Arc<RwLock<HashMap<ListCategory, Vec<String>>>>,
    should_fail: Arc<AtomicBool>,
    delay: Arc<RwLock<Option<Duration>>>,
    fetch_count: Arc<AtomicU64>,
}

impl MockListProvider {
    pub fn new() -> Self {
        Self {
            lists: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            delay: Arc::new(RwLock::new(None)),
            fetch_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn with_list(self, category: ListCategory, items: &[&str]) -> Self {
        self.set_list(category, items).await;
        self
    }

    pub async fn set_list(&self, category: ListCategory, items: &[&str]) {
        self.lists
            .write()
            .await
            .insert(category, items.iter().map(|s| s.to_string()).collect());
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
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

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

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

// ============================================================================
// Mock ListBackupRepository
// ============================================================================

#[derive(Clone)]
pub struct MockListBackupRepository {
    lists: Arc<RwLock<HashMap<ListCategory, CachedList>>>,
    should_fail: Arc<AtomicBool>,
    replace_count: Arc<AtomicU64>,
}

impl MockListBackupRepository {
    pub fn new() -> Self {
        Self {
            lists: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            replace_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn seed(&self, category: ListCategory, items: &[&str]) {
        let list = CachedList::new(
            category,
            items.iter().map(|s| s.to_string()).collect(),
            ListSource::PrimaryApi,
        );
        self.lists.write().await.insert(category, list);
    }

    pub async fn stored(&self, category: ListCategory) -> Option<CachedList> {
        self.lists.read().await.get(&category).cloned()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn replace_count(&self) -> u64 {
        self.replace_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListBackupRepository for MockListBackupRepository {
    async fn load_latest(&self, category: ListCategory) -> Result<Option<CachedList>, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }
        Ok(self.lists.read().await.get(&category).cloned())
    }

    async fn replace(
        &self,
        category: ListCategory,
        items: &[String],
        source: ListSource,
    ) -> Result<CachedList, DomainError> {
        self.replace_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        let mut list = CachedList::new(category, items.to_vec(), source);
        list.id = Some(self.replace_count() as i64);
        self.lists.write().await.insert(category, list.clone());
        Ok(list)
    }
}

// ============================================================================
// Mock symptom sources
// ============================================================================

#[derive(Clone)]
pub struct MockConsumerHealthSource {
    by_code: Arc<RwLock<HashMap<String, Vec<String>>>>,
    by_term: Arc<RwLock<HashMap<String, Vec<String>>>>,
    queries: Arc<RwLock<Vec<ConsumerQuery>>>,
    should_fail: Arc<AtomicBool>,
    code_should_fail: Arc<AtomicBool>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockConsumerHealthSource {
    pub fn new() -> Self {
        Self {
            by_code: Arc::new(RwLock::new(HashMap::new())),
            by_term: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            code_should_fail: Arc::new(AtomicBool::new(false)),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn set_code(&self, code: &str, symptoms: &[&str]) {
        self.by_code
            .write()
            .await
            .insert(code.to_string(), symptoms.iter().map(|s| s.to_string()).collect());
    }

    pub async fn set_term(&self, term: &str, symptoms: &[&str]) {
        self.by_term
            .write()
            .await
            .insert(term.to_lowercase(), symptoms.iter().map(|s| s.to_string()).collect());
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Fails only `ConsumerQuery::Code` lookups; term lookups still answer.
    pub fn set_code_should_fail(&self, should_fail: bool) {
        self.code_should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn queries(&self) -> Vec<ConsumerQuery> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl ConsumerHealthSource for MockConsumerHealthSource {
    async fn symptoms_for(&self, query: &ConsumerQuery) -> Result<Vec<String>, DomainError> {
        self.queries.write().await.push(query.clone());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderUnavailable(
                "consumer source: HTTP 502".to_string(),
            ));
        }

        let found = match query {
            ConsumerQuery::Code { .. } if self.code_should_fail.load(Ordering::SeqCst) => {
                return Err(DomainError::ProviderUnavailable(
                    "consumer source: HTTP 500 for code lookup".to_string(),
                ));
            }
            ConsumerQuery::Code { code, .. } => self.by_code.read().await.get(code).cloned(),
            ConsumerQuery::Term(term) => {
                self.by_term.read().await.get(&term.to_lowercase()).cloned()
            }
        };
        Ok(found.unwrap_or_default())
    }
}

#[derive(Clone)]
pub struct MockPhenotypeSource {
    phenotypes: Arc<RwLock<HashMap<String, Vec<String>>>>,
    should_fail: Arc<AtomicBool>,
    call_count: Arc<AtomicU64>,
}

impl MockPhenotypeSource {
    pub fn new() -> Self {
        Self {
            phenotypes: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set(&self, disease_id: &str, phenotypes: &[&str]) {
        self.phenotypes.write().await.insert(
            disease_id.to_string(),
            phenotypes.iter().map(|s| s.to_string()).collect(),
        );
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PhenotypeSource for MockPhenotypeSource {
    async fn phenotypes_for(&self, disease_id: &str) -> Result<Vec<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderTimeout("phenotype ontology".to_string()));
        }
        Ok(self
            .phenotypes
            .read()
            .await
            .get(disease_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock research sources
// ============================================================================

#[derive(Clone)]
pub struct MockLiteratureSource {
    id: &'static str,
    articles: Arc<RwLock<Vec<LiteratureArticle>>>,
    should_fail: Arc<AtomicBool>,
    call_count: Arc<AtomicU64>,
}

impl MockLiteratureSource {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            articles: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_articles(&self, titles: &[&str]) {
        *self.articles.write().await = titles
            .iter()
            .enumerate()
            .map(|(i, title)| LiteratureArticle {
                id: format!("{}-{}", self.id, i + 1),
                title: title.to_string(),
                journal: None,
                published: None,
            })
            .collect();
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LiteratureSource for MockLiteratureSource {
    fn provider_id(&self) -> &str {
        self.id
    }

    async fn search(
        &self,
        _query: &str,
        limit: usize,
    ) -> Result<Vec<LiteratureArticle>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderUnavailable(format!("{}: HTTP 500", self.id)));
        }
        Ok(self.articles.read().await.iter().take(limit).cloned().collect())
    }
}

#[derive(Clone)]
pub struct MockTrialRegistry {
    trials: Arc<RwLock<Vec<ClinicalTrial>>>,
    should_fail: Arc<AtomicBool>,
    call_count: Arc<AtomicU64>,
}

impl MockTrialRegistry {
    pub fn new() -> Self {
        Self {
            trials: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_trials(&self, ids: &[&str]) {
        *self.trials.write().await = ids
            .iter()
            .map(|id| ClinicalTrial {
                nct_id: id.to_string(),
                title: format!("Study {}", id),
                status: Some("RECRUITING".to_string()),
                conditions: vec!["Diabetes".to_string()],
            })
            .collect();
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrialRegistry for MockTrialRegistry {
    fn provider_id(&self) -> &str {
        "mock-trials"
    }

    async fn search(
        &self,
        _condition: &str,
        limit: usize,
    ) -> Result<Vec<ClinicalTrial>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderUnavailable("mock-trials: HTTP 503".to_string()));
        }
        Ok(self.trials.read().await.iter().take(limit).cloned().collect())
    }
}
