use crate::ports::{DataProvider, TrialRegistry};
use crate::services::{CacheStore, CachedQueryService, SourceFallbackChain};
use async_trait::async_trait;
use medref_domain::{CacheCategory, ClinicalTrial, DomainError, ProviderResult, QueryAnswer};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

pub struct TrialRegistryProvider {
    registry: Arc<dyn TrialRegistry>,
    limit: usize,
}

impl TrialRegistryProvider {
    pub fn new(registry: Arc<dyn TrialRegistry>, limit: usize) -> Self {
        Self { registry, limit }
    }
}

#[async_trait]
impl DataProvider<String, Vec<ClinicalTrial>> for TrialRegistryProvider {
    fn provider_id(&self) -> &str {
        self.registry.provider_id()
    }

    async fn query(
        &self,
        condition: &String,
    ) -> Result<ProviderResult<Vec<ClinicalTrial>>, DomainError> {
        let trials = self.registry.search(condition, self.limit).await?;
        if trials.is_empty() {
            Ok(ProviderResult::absent(self.provider_id()))
        } else {
            Ok(ProviderResult::found(self.provider_id(), trials))
        }
    }
}

/// Use case: clinical trials recruiting for a condition.
pub struct SearchClinicalTrialsUseCase {
    service: CachedQueryService<ClinicalTrial>,
}

impl SearchClinicalTrialsUseCase {
    pub fn new(
        registries: Vec<Arc<dyn TrialRegistry>>,
        cache: Arc<CacheStore>,
        provider_timeout: Duration,
        limit: usize,
    ) -> Self {
        let providers = registries
            .into_iter()
            .map(|registry| {
                Arc::new(TrialRegistryProvider::new(registry, limit))
                    as Arc<dyn DataProvider<String, Vec<ClinicalTrial>>>
            })
            .collect();
        let chain = SourceFallbackChain::new("clinical-trials", providers, provider_timeout);

        Self {
            service: CachedQueryService::new(cache, CacheCategory::ClinicalTrials, "trials", chain),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, condition: &str) -> QueryAnswer<ClinicalTrial> {
        self.service.query(condition).await
    }
}
