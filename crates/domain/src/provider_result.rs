use serde::Serialize;
use std::sync::Arc;

/// Uniform answer from one fallback-chain provider.
///
/// An absent value is not an error: it means "try the next provider".
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResult<T> {
    pub value: Option<T>,
    pub provider_id: Arc<str>,
}

impl<T> ProviderResult<T> {
    pub fn found(provider_id: impl Into<Arc<str>>, value: T) -> Self {
        Self {
            value: Some(value),
            provider_id: provider_id.into(),
        }
    }

    pub fn absent(provider_id: impl Into<Arc<str>>) -> Self {
        Self {
            value: None,
            provider_id: provider_id.into(),
        }
    }
}

/// Terminal outcome of a fallback chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChainResolution<T> {
    Found { value: T, provider_id: Arc<str> },
    NoneAvailable,
}

impl<T> ChainResolution<T> {
    pub fn provider_id(&self) -> Option<&str> {
        match self {
            ChainResolution::Found { provider_id, .. } => Some(provider_id),
            ChainResolution::NoneAvailable => None,
        }
    }
}
