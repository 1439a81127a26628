pub mod cache_maintenance;
pub mod list_refresh;
pub mod runner;

pub use cache_maintenance::CacheMaintenanceJob;
pub use list_refresh::ListRefreshJob;
pub use runner::JobRunner;
