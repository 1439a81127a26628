//! HTTP adapters for the upstream medical reference APIs.
//!
//! Each adapter keeps its response parsing in pure functions so the decoding
//! rules can be tested without a network.

pub mod clinical_trials;
pub mod europe_pmc;
pub mod hpo;
pub mod medlineplus;
pub mod ols;
pub mod pubmed;
pub mod routed;
pub mod rxnav;

pub use clinical_trials::ClinicalTrialsGovClient;
pub use europe_pmc::EuropePmcClient;
pub use hpo::HpoAnnotationClient;
pub use medlineplus::MedlinePlusConnectClient;
pub use ols::OlsDiseaseOntologyClient;
pub use pubmed::PubMedClient;
pub use routed::RoutedListProvider;
pub use rxnav::RxNavDrugClient;
