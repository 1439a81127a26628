pub mod config;
pub mod database;
pub mod logging;

pub use config::{load_config, log_config_summary};
pub use database::init_database;
pub use logging::init_logging;
