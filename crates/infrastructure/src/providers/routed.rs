use async_trait::async_trait;
use medref_application::ports::ListProvider;
use medref_domain::{DomainError, ListCategory};
use std::sync::Arc;

/// Dispatches each list category to the client that serves it.
pub struct RoutedListProvider {
    drugs: Option<Arc<dyn ListProvider>>,
    diseases: Option<Arc<dyn ListProvider>>,
}

impl RoutedListProvider {
    pub fn new() -> Self {
        Self {
            drugs: None,
            diseases: None,
        }
    }

    pub fn with_drugs(mut self, provider: Arc<dyn ListProvider>) -> Self {
        self.drugs = Some(provider);
        self
    }

    pub fn with_diseases(mut self, provider: Arc<dyn ListProvider>) -> Self {
        self.diseases = Some(provider);
        self
    }

    fn route(&self, category: ListCategory) -> Option<&Arc<dyn ListProvider>> {
        match category {
            ListCategory::Drugs => self.drugs.as_ref(),
            ListCategory::Diseases => self.diseases.as_ref(),
        }
    }
}

impl Default for RoutedListProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListProvider for RoutedListProvider {
    fn provider_id(&self) -> &str {
        "primary-api"
    }

    async fn fetch_list(
        &self,
        category: ListCategory,
        limit: usize,
    ) -> Result<Vec<String>, DomainError> {
        match self.route(category) {
            Some(provider) => provider.fetch_list(category, limit).await,
            None => Err(DomainError::ProviderUnavailable(format!(
                "No primary provider configured for {}",
                category
            ))),
        }
    }
}
