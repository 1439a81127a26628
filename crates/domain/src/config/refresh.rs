use crate::category::CacheCategory;
use serde::{Deserialize, Serialize};

/// Background refresh configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Refresh interval override for `medical-reference`, in seconds
    #[serde(default)]
    pub medical_reference_secs: Option<u64>,

    /// Refresh interval override for `drug-interactions`, in seconds
    #[serde(default)]
    pub drug_interactions_secs: Option<u64>,

    /// Refresh interval override for `literature-search`, in seconds
    #[serde(default)]
    pub literature_search_secs: Option<u64>,

    /// Refresh interval override for `clinical-trials`, in seconds
    #[serde(default)]
    pub clinical_trials_secs: Option<u64>,

    /// Number of entries served from the bundled static list (default: 25)
    #[serde(default = "default_static_fallback_size")]
    pub static_fallback_size: usize,

    /// Maximum items requested from a primary list provider (default: 500)
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl RefreshConfig {
    pub fn override_for(&self, category: CacheCategory) -> Option<u64> {
        match category {
            CacheCategory::MedicalReference => self.medical_reference_secs,
            CacheCategory::DrugInteractions => self.drug_interactions_secs,
            CacheCategory::LiteratureSearch => self.literature_search_secs,
            CacheCategory::ClinicalTrials => self.clinical_trials_secs,
        }
    }

    pub fn set_override(&mut self, category: CacheCategory, secs: u64) {
        let slot = match category {
            CacheCategory::MedicalReference => &mut self.medical_reference_secs,
            CacheCategory::DrugInteractions => &mut self.drug_interactions_secs,
            CacheCategory::LiteratureSearch => &mut self.literature_search_secs,
            CacheCategory::ClinicalTrials => &mut self.clinical_trials_secs,
        };
        *slot = Some(secs);
    }

    pub fn interval_overrides(&self) -> impl Iterator<Item = (CacheCategory, u64)> + '_ {
        CacheCategory::all()
            .iter()
            .filter_map(|c| self.override_for(*c).map(|secs| (*c, secs)))
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            medical_reference_secs: None,
            drug_interactions_secs: None,
            literature_search_secs: None,
            clinical_trials_secs: None,
            static_fallback_size: default_static_fallback_size(),
            max_items: default_max_items(),
        }
    }
}

fn default_static_fallback_size() -> usize {
    25
}

fn default_max_items() -> usize {
    500
}
