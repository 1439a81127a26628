use crate::cached_list::ListSource;
use crate::category::ListCategory;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Observability snapshot for one list category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshStatus {
    pub category: ListCategory,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_attempt_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub consecutive_failures: u32,
    pub current_source: ListSource,
    pub item_count: usize,
}

impl RefreshStatus {
    /// The most recent refresh attempt failed; the category keeps serving
    /// its last good list.
    pub fn is_degraded(&self) -> bool {
        self.consecutive_failures > 0
    }
}

/// What a single refresh trigger did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// Another refresh for the same category was already in flight.
    Coalesced,
    Refreshed { count: usize },
    Failed { error: String },
}
