use medref_application::use_cases::RefreshListUseCase;
use medref_domain::{ListCategory, RefreshOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Background refresher for one list category.
///
/// Refreshes immediately on start, then once per interval. A failed cycle
/// keeps the current list and waits for the next tick; there is no retry
/// inside a cycle.
pub struct ListRefreshJob {
    refresh: Arc<RefreshListUseCase>,
    category: ListCategory,
    interval: Duration,
    shutdown: CancellationToken,
}

impl ListRefreshJob {
    pub fn new(
        refresh: Arc<RefreshListUseCase>,
        category: ListCategory,
        interval: Duration,
    ) -> Self {
        Self {
            refresh,
            category,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            category = %self.category,
            interval_secs = self.interval.as_secs(),
            "Starting list refresh job"
        );

        tokio::spawn(async move {
            let period = self.interval.max(Duration::from_millis(1));
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!(category = %self.category, "ListRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.refresh.execute(self.category).await {
                            RefreshOutcome::Refreshed { count } => {
                                debug!(
                                    category = %self.category,
                                    count,
                                    "Scheduled refresh completed"
                                );
                            }
                            RefreshOutcome::Coalesced => {
                                debug!(
                                    category = %self.category,
                                    "Scheduled refresh joined one in flight"
                                );
                            }
                            RefreshOutcome::Failed { error } => {
                                warn!(
                                    category = %self.category,
                                    error = %error,
                                    next_in_secs = self.interval.as_secs(),
                                    "Scheduled refresh failed"
                                );
                            }
                        }
                    }
                }
            }
        })
    }
}
