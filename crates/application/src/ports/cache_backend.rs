use async_trait::async_trait;
use medref_domain::DomainError;
use std::time::Duration;

/// Raw key/value storage underneath [`CacheStore`](crate::services::CacheStore).
///
/// Implementations know nothing about categories or freshness: `retain` is how
/// long the backend must keep the bytes, which the store sets longer than the
/// category TTL so expired entries stay readable as stale fallbacks.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;

    async fn set(&self, key: &str, value: Vec<u8>, retain: Duration) -> Result<(), DomainError>;

    async fn delete(&self, key: &str) -> Result<(), DomainError>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<(), DomainError>;

    fn name(&self) -> &'static str;

    /// Shared across processes (e.g. Redis) rather than in-process.
    fn is_distributed(&self) -> bool;

    /// Drop entries past their retention. Backends that expire entries on
    /// their own keep the default.
    fn purge_expired(&self) -> usize {
        0
    }
}
