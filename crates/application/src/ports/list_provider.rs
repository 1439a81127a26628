use async_trait::async_trait;
use medref_domain::{DomainError, ListCategory};

/// Primary upstream for authoritative reference lists.
#[async_trait]
pub trait ListProvider: Send + Sync {
    fn provider_id(&self) -> &str;

    /// Fetch up to `limit` names for `category`.
    async fn fetch_list(&self, category: ListCategory, limit: usize)
        -> Result<Vec<String>, DomainError>;
}
