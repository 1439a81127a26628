pub mod adapters;
pub mod cache;
pub mod use_cases;

pub use adapters::Adapters;
pub use cache::build_cache_store;
pub use use_cases::UseCases;
