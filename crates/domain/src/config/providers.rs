use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream provider endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Per-provider call timeout in milliseconds (default: 8000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_ols_url")]
    pub disease_ontology_url: String,

    #[serde(default = "default_rxnav_url")]
    pub drug_reference_url: String,

    #[serde(default = "default_medlineplus_url")]
    pub consumer_health_url: String,

    #[serde(default = "default_hpo_url")]
    pub phenotype_url: String,

    #[serde(default = "default_pubmed_url")]
    pub pubmed_url: String,

    #[serde(default = "default_europe_pmc_url")]
    pub europe_pmc_url: String,

    #[serde(default = "default_trials_url")]
    pub clinical_trials_url: String,

    /// Results requested per literature / trials query (default: 20)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl ProvidersConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            disease_ontology_url: default_ols_url(),
            drug_reference_url: default_rxnav_url(),
            consumer_health_url: default_medlineplus_url(),
            phenotype_url: default_hpo_url(),
            pubmed_url: default_pubmed_url(),
            europe_pmc_url: default_europe_pmc_url(),
            clinical_trials_url: default_trials_url(),
            page_size: default_page_size(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    8000
}

fn default_ols_url() -> String {
    "https://www.ebi.ac.uk/ols4/api".to_string()
}

fn default_rxnav_url() -> String {
    "https://rxnav.nlm.nih.gov/REST".to_string()
}

fn default_medlineplus_url() -> String {
    "https://connect.medlineplus.gov/service".to_string()
}

fn default_hpo_url() -> String {
    "https://ontology.jax.org/api/network/annotation".to_string()
}

fn default_pubmed_url() -> String {
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils".to_string()
}

fn default_europe_pmc_url() -> String {
    "https://www.ebi.ac.uk/europepmc/webservices/rest".to_string()
}

fn default_trials_url() -> String {
    "https://clinicaltrials.gov/api/v2".to_string()
}

fn default_page_size() -> usize {
    20
}
