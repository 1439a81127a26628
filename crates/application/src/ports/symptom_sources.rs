use async_trait::async_trait;
use medref_domain::DomainError;

/// Input for the consumer-health source: a clinical code when the disease
/// record carries one, otherwise a simplified display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsumerQuery {
    Code { system: String, code: String },
    Term(String),
}

/// Patient-facing symptom text keyed by clinical code.
#[async_trait]
pub trait ConsumerHealthSource: Send + Sync {
    /// Empty when the source has no symptom text for the query.
    async fn symptoms_for(&self, query: &ConsumerQuery) -> Result<Vec<String>, DomainError>;
}

/// Clinical phenotype annotations keyed by ontology disease id.
#[async_trait]
pub trait PhenotypeSource: Send + Sync {
    async fn phenotypes_for(&self, disease_id: &str) -> Result<Vec<String>, DomainError>;
}
