use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classes of cached reference data, each with its own freshness policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheCategory {
    /// Disease ontology records and patient-facing symptom text
    MedicalReference,
    /// Drug name lists and drug reference lookups
    DrugInteractions,
    /// Literature search results
    LiteratureSearch,
    /// Clinical trial registry results
    ClinicalTrials,
}

impl CacheCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheCategory::MedicalReference => "medical-reference",
            CacheCategory::DrugInteractions => "drug-interactions",
            CacheCategory::LiteratureSearch => "literature-search",
            CacheCategory::ClinicalTrials => "clinical-trials",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CacheCategory::MedicalReference => "Medical Reference",
            CacheCategory::DrugInteractions => "Drug Interactions",
            CacheCategory::LiteratureSearch => "Literature Search",
            CacheCategory::ClinicalTrials => "Clinical Trials",
        }
    }

    pub fn all() -> &'static [CacheCategory] {
        &[
            CacheCategory::MedicalReference,
            CacheCategory::DrugInteractions,
            CacheCategory::LiteratureSearch,
            CacheCategory::ClinicalTrials,
        ]
    }
}

impl fmt::Display for CacheCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CacheCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        CacheCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidCategory(s.to_string()))
    }
}

/// Categories that own exactly one current [`CachedList`](crate::CachedList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListCategory {
    Drugs,
    Diseases,
}

impl ListCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListCategory::Drugs => "drugs",
            ListCategory::Diseases => "diseases",
        }
    }

    /// Freshness policy governing this list.
    pub fn cache_category(&self) -> CacheCategory {
        match self {
            ListCategory::Drugs => CacheCategory::DrugInteractions,
            ListCategory::Diseases => CacheCategory::MedicalReference,
        }
    }

    /// Backup table holding the last known good list.
    pub fn table_name(&self) -> &'static str {
        match self {
            ListCategory::Drugs => "cached_drug_list",
            ListCategory::Diseases => "cached_disease_list",
        }
    }

    /// JSON array column inside [`table_name`](Self::table_name).
    pub fn items_column(&self) -> &'static str {
        match self {
            ListCategory::Drugs => "drug_names",
            ListCategory::Diseases => "disease_names",
        }
    }

    pub fn cache_key(&self) -> String {
        format!("list:{}", self.as_str())
    }

    pub fn all() -> &'static [ListCategory] {
        &[ListCategory::Drugs, ListCategory::Diseases]
    }
}

impl fmt::Display for ListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drugs" | "drug" => Ok(ListCategory::Drugs),
            "diseases" | "disease" => Ok(ListCategory::Diseases),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}
