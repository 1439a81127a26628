use serde::{Deserialize, Serialize};

/// Symptom resolution tables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Qualifier tokens stripped (in order, once each) from disease names
    /// before querying the consumer-health source
    #[serde(default = "default_qualifier_tokens")]
    pub qualifier_tokens: Vec<String>,

    /// Cross-reference code systems tried in order
    #[serde(default = "default_code_system_priority")]
    pub code_system_priority: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            qualifier_tokens: default_qualifier_tokens(),
            code_system_priority: default_code_system_priority(),
        }
    }
}

fn default_qualifier_tokens() -> Vec<String> {
    [
        "resistant",
        "refractory",
        "type 1",
        "type 2",
        "chronic",
        "acute",
        "juvenile",
        "adult-onset",
        "familial",
        "hereditary",
        "early-onset",
        "late-onset",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_code_system_priority() -> Vec<String> {
    ["ICD10CM", "SNOMEDCT_US", "ICD9CM"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
