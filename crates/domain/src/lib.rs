//! Medref Domain Layer
pub mod cached_list;
pub mod category;
pub mod config;
pub mod disease;
pub mod errors;
pub mod provider_result;
pub mod refresh_status;
pub mod research;
pub mod static_lists;
pub mod strategy;

pub use cached_list::{CachedList, ListSource};
pub use category::{CacheCategory, ListCategory};
pub use config::{CliOverrides, Config, ConfigError};
pub use disease::{DiseaseRecord, SymptomResolution, SymptomSource, STATIC_SYMPTOM_DISCLAIMER};
pub use errors::DomainError;
pub use provider_result::{ChainResolution, ProviderResult};
pub use refresh_status::{RefreshOutcome, RefreshStatus};
pub use research::{ClinicalTrial, Freshness, LiteratureArticle, QueryAnswer};
pub use strategy::{CacheStrategy, CacheStrategyRegistry};
