use async_trait::async_trait;
use dashmap::DashMap;
use medref_application::ports::CacheBackend;
use medref_domain::DomainError;
use std::time::{Duration, Instant};
use tracing::debug;

struct StoredValue {
    bytes: Vec<u8>,
    retain_until: Instant,
}

/// In-process cache backend. Used alone when no distributed backend is
/// configured and as the outage fallback when one is.
pub struct InMemoryCacheBackend {
    entries: DashMap<String, StoredValue>,
}

impl InMemoryCacheBackend {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryCacheBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheBackend for InMemoryCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let now = Instant::now();
        if let Some(stored) = self.entries.get(key) {
            if stored.retain_until > now {
                return Ok(Some(stored.bytes.clone()));
            }
        }
        self.entries.remove_if(key, |_, stored| stored.retain_until <= now);
        Ok(None)
    }

    async fn set(&self, key: &str, value: Vec<u8>, retain: Duration) -> Result<(), DomainError> {
        self.entries.insert(
            key.to_string(),
            StoredValue {
                bytes: value,
                retain_until: Instant::now() + retain,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn is_distributed(&self) -> bool {
        false
    }

    /// Drop entries past their retention deadline. Returns how many went.
    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, stored| stored.retain_until > now);
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(removed, "Purged expired in-process cache entries");
        }
        removed
    }
}
