use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Provider timed out: {0}")]
    ProviderTimeout(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache backend error: {0}")]
    CacheBackend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

impl DomainError {
    /// Network, timeout and upstream 5xx failures. Resolved by trying the next
    /// provider or waiting for the next refresh cycle.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DomainError::ProviderUnavailable(_)
                | DomainError::ProviderTimeout(_)
                | DomainError::CacheBackend(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(DomainError::ProviderTimeout("ols".into()).is_transient());
        assert!(DomainError::ProviderUnavailable("rxnav".into()).is_transient());
        assert!(!DomainError::MalformedResponse("rxnav".into()).is_transient());
        assert!(!DomainError::InvalidCategory("x".into()).is_transient());
    }
}
