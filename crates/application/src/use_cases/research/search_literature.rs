use crate::ports::{DataProvider, LiteratureSource};
use crate::services::{CacheStore, CachedQueryService, SourceFallbackChain};
use async_trait::async_trait;
use medref_domain::{CacheCategory, DomainError, LiteratureArticle, ProviderResult, QueryAnswer};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Adapts a [`LiteratureSource`] to the fallback chain; no articles is absent.
pub struct LiteratureProvider {
    source: Arc<dyn LiteratureSource>,
    limit: usize,
}

impl LiteratureProvider {
    pub fn new(source: Arc<dyn LiteratureSource>, limit: usize) -> Self {
        Self { source, limit }
    }
}

#[async_trait]
impl DataProvider<String, Vec<LiteratureArticle>> for LiteratureProvider {
    fn provider_id(&self) -> &str {
        self.source.provider_id()
    }

    async fn query(
        &self,
        query: &String,
    ) -> Result<ProviderResult<Vec<LiteratureArticle>>, DomainError> {
        let articles = self.source.search(query, self.limit).await?;
        if articles.is_empty() {
            Ok(ProviderResult::absent(self.provider_id()))
        } else {
            Ok(ProviderResult::found(self.provider_id(), articles))
        }
    }
}

/// Use case: literature search, primary index first then the secondary one.
pub struct SearchLiteratureUseCase {
    service: CachedQueryService<LiteratureArticle>,
}

impl SearchLiteratureUseCase {
    pub fn new(
        sources: Vec<Arc<dyn LiteratureSource>>,
        cache: Arc<CacheStore>,
        provider_timeout: Duration,
        limit: usize,
    ) -> Self {
        let providers = sources
            .into_iter()
            .map(|source| {
                Arc::new(LiteratureProvider::new(source, limit))
                    as Arc<dyn DataProvider<String, Vec<LiteratureArticle>>>
            })
            .collect();
        let chain = SourceFallbackChain::new("literature-search", providers, provider_timeout);

        Self {
            service: CachedQueryService::new(
                cache,
                CacheCategory::LiteratureSearch,
                "literature",
                chain,
            ),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, query: &str) -> QueryAnswer<LiteratureArticle> {
        self.service.query(query).await
    }
}
