mod cache_backend;
mod data_provider;
mod list_backup_repository;
mod list_provider;
mod research_sources;
mod symptom_sources;

pub use cache_backend::CacheBackend;
pub use data_provider::DataProvider;
pub use list_backup_repository::ListBackupRepository;
pub use list_provider::ListProvider;
pub use research_sources::{LiteratureSource, TrialRegistry};
pub use symptom_sources::{ConsumerHealthSource, ConsumerQuery, PhenotypeSource};
