use async_trait::async_trait;
use medref_domain::{CachedList, DomainError, ListCategory, ListSource};

/// Durable last-known-good list per category.
#[async_trait]
pub trait ListBackupRepository: Send + Sync {
    /// Most recent persisted list, if any.
    async fn load_latest(&self, category: ListCategory) -> Result<Option<CachedList>, DomainError>;

    /// Atomically replace the persisted list. On error the previous row must
    /// remain intact.
    async fn replace(
        &self,
        category: ListCategory,
        items: &[String],
        source: ListSource,
    ) -> Result<CachedList, DomainError>;
}
