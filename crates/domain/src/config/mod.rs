//! Configuration module for Medref
//!
//! Sections:
//! - `root`: Main configuration, environment and CLI overrides
//! - `server`: Status surface binding
//! - `cache`: Distributed cache connection and outage behaviour
//! - `refresh`: Background refresh cadence and static fallback size
//! - `providers`: Upstream endpoints and timeouts
//! - `resolver`: Symptom resolution tables
//! - `logging`: Logging settings
//! - `database`: Persistence backup database
//! - `errors`: Configuration errors

pub mod cache;
pub mod database;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod refresh;
pub mod resolver;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use providers::ProvidersConfig;
pub use refresh::RefreshConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
