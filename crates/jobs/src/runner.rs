use crate::{CacheMaintenanceJob, ListRefreshJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once and
/// keep the handles to await after cancelling the shared token.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_list_refresh(ListRefreshJob::new(refresh, ListCategory::Drugs, interval))
///     .with_cache_maintenance(CacheMaintenanceJob::new(cache_store))
///     .start();
/// ```
pub struct JobRunner {
    list_refresh: Vec<ListRefreshJob>,
    cache_maintenance: Option<CacheMaintenanceJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            list_refresh: Vec::new(),
            cache_maintenance: None,
        }
    }

    pub fn with_list_refresh(mut self, job: ListRefreshJob) -> Self {
        self.list_refresh.push(job);
        self
    }

    pub fn with_cache_maintenance(mut self, job: CacheMaintenanceJob) -> Self {
        self.cache_maintenance = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!(
            list_refresh_jobs = self.list_refresh.len(),
            "Starting background job runner"
        );

        let mut handles: Vec<JoinHandle<()>> = self
            .list_refresh
            .into_iter()
            .map(|job| Arc::new(job).start())
            .collect();

        if let Some(job) = self.cache_maintenance {
            handles.push(Arc::new(job).start());
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
