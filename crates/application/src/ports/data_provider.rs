use async_trait::async_trait;
use medref_domain::{DomainError, ProviderResult};

/// One link of a [`SourceFallbackChain`](crate::services::SourceFallbackChain).
///
/// Returning `Ok` with an absent value means "nothing here, try the next
/// provider". `Err` is a transient or malformed-response failure and is
/// treated the same way by the chain.
#[async_trait]
pub trait DataProvider<I, T>: Send + Sync
where
    I: Send + Sync,
    T: Send,
{
    fn provider_id(&self) -> &str;

    async fn query(&self, input: &I) -> Result<ProviderResult<T>, DomainError>;
}
