use medref_application::services::CacheStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically evicts entries past retention from the in-process cache.
pub struct CacheMaintenanceJob {
    cache: Arc<CacheStore>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheMaintenanceJob {
    pub fn new(cache: Arc<CacheStore>) -> Self {
        Self {
            cache,
            interval_secs: 600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting cache maintenance job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheMaintenanceJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.purge_local();
                        let stats = self.cache.stats();
                        debug!(
                            removed,
                            backend = stats.backend,
                            degraded = stats.degraded,
                            "Cache maintenance completed"
                        );
                    }
                }
            }
        })
    }
}
