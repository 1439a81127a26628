mod cache_store;
mod cached_query;
mod fallback_chain;
mod list_catalog;
mod name_simplifier;
mod symptom_resolver;

pub use cache_store::{CacheEntry, CacheStore, CacheStoreStats, StaleRead};
pub use cached_query::CachedQueryService;
pub use fallback_chain::SourceFallbackChain;
pub use list_catalog::{ListCatalog, RefreshGuard};
pub use name_simplifier::NameSimplifier;
pub use symptom_resolver::{
    ConsumerSourceProvider, DiseaseSymptomResolver, PhenotypeOntologyProvider,
    StaticDisclaimerProvider,
};
