use async_trait::async_trait;
use medref_domain::{ClinicalTrial, DomainError, LiteratureArticle};

#[async_trait]
pub trait LiteratureSource: Send + Sync {
    fn provider_id(&self) -> &str;

    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LiteratureArticle>, DomainError>;
}

#[async_trait]
pub trait TrialRegistry: Send + Sync {
    fn provider_id(&self) -> &str;

    async fn search(
        &self,
        condition: &str,
        limit: usize,
    ) -> Result<Vec<ClinicalTrial>, DomainError>;
}
