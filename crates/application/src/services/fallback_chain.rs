use crate::ports::DataProvider;
use medref_domain::ChainResolution;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Ordered list of providers tried one at a time until one has a value.
///
/// Every call is bounded by `timeout`. Errors, timeouts and absent results
/// all move on to the next provider; [`resolve`](Self::resolve) never fails
/// and ends in [`ChainResolution::NoneAvailable`] when nobody answers.
pub struct SourceFallbackChain<I, T>
where
    I: Send + Sync,
    T: Send,
{
    name: &'static str,
    providers: Vec<Arc<dyn DataProvider<I, T>>>,
    timeout: Duration,
}

impl<I, T> SourceFallbackChain<I, T>
where
    I: Send + Sync,
    T: Send,
{
    pub fn new(
        name: &'static str,
        providers: Vec<Arc<dyn DataProvider<I, T>>>,
        timeout: Duration,
    ) -> Self {
        Self {
            name,
            providers,
            timeout,
        }
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.provider_id()).collect()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn resolve(&self, input: &I) -> ChainResolution<T> {
        for provider in &self.providers {
            let provider_id = provider.provider_id();
            let start = Instant::now();

            match tokio::time::timeout(self.timeout, provider.query(input)).await {
                Ok(Ok(result)) => match result.value {
                    Some(value) => {
                        debug!(
                            chain = self.name,
                            provider = provider_id,
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "Fallback chain resolved"
                        );
                        return ChainResolution::Found {
                            value,
                            provider_id: result.provider_id,
                        };
                    }
                    None => {
                        debug!(chain = self.name, provider = provider_id, "Provider had no result");
                    }
                },
                Ok(Err(e)) => {
                    warn!(
                        chain = self.name,
                        provider = provider_id,
                        transient = e.is_transient(),
                        error = %e,
                        "Provider failed, trying next"
                    );
                }
                Err(_) => {
                    warn!(
                        chain = self.name,
                        provider = provider_id,
                        timeout_ms = self.timeout.as_millis() as u64,
                        "Provider timed out, trying next"
                    );
                }
            }
        }

        debug!(chain = self.name, "No provider available");
        ChainResolution::NoneAvailable
    }
}
