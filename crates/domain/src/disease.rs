use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Fixed text returned when no live source has symptoms for a disease.
pub const STATIC_SYMPTOM_DISCLAIMER: &[&str] = &[
    "Symptom information for this condition is not currently available.",
    "Symptoms vary from person to person and may change over time.",
    "Please consult a qualified healthcare professional for advice about your symptoms.",
];

/// Disease ontology record used as resolver input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Ontology identifier, e.g. `MONDO:0005148`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub synonyms: BTreeSet<String>,
    /// Code system key (e.g. `ICD10CM`) → code
    #[serde(default)]
    pub cross_references: BTreeMap<String, String>,
}

impl DiseaseRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            synonyms: BTreeSet::new(),
            cross_references: BTreeMap::new(),
        }
    }

    pub fn with_cross_reference(
        mut self,
        system: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        self.cross_references.insert(system.into(), code.into());
        self
    }

    /// First cross-reference found walking `priority` in order.
    ///
    /// Keys match case-insensitively. A `SYSTEM:` prefix on the stored value
    /// (as ontology xrefs are often written) is stripped. Returns
    /// `(system, code)` using the priority spelling of the system.
    pub fn cross_reference(&self, priority: &[String]) -> Option<(String, String)> {
        priority.iter().find_map(|system| {
            self.cross_references
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(system))
                .and_then(|(_, value)| {
                    let code = match value.split_once(':') {
                        Some((prefix, rest)) if prefix.eq_ignore_ascii_case(system) => rest,
                        _ => value.as_str(),
                    }
                    .trim();
                    (!code.is_empty()).then(|| (system.clone(), code.to_string()))
                })
        })
    }
}

/// Which tier produced a [`SymptomResolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymptomSource {
    ConsumerSource,
    PhenotypeOntology,
    StaticFallback,
}

impl SymptomSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomSource::ConsumerSource => "consumer-source",
            SymptomSource::PhenotypeOntology => "phenotype-ontology",
            SymptomSource::StaticFallback => "static-fallback",
        }
    }

    pub fn from_provider_id(id: &str) -> Option<Self> {
        match id {
            "consumer-source" => Some(SymptomSource::ConsumerSource),
            "phenotype-ontology" => Some(SymptomSource::PhenotypeOntology),
            "static-fallback" => Some(SymptomSource::StaticFallback),
            _ => None,
        }
    }
}

impl fmt::Display for SymptomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomResolution {
    pub symptoms: Vec<String>,
    pub source_used: SymptomSource,
}

impl SymptomResolution {
    pub fn static_fallback() -> Self {
        Self {
            symptoms: STATIC_SYMPTOM_DISCLAIMER
                .iter()
                .map(|s| s.to_string())
                .collect(),
            source_used: SymptomSource::StaticFallback,
        }
    }
}
