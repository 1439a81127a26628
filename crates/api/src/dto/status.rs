use chrono::{DateTime, Utc};
use medref_application::services::CacheStoreStats;
use medref_domain::{ListCategory, ListSource, RefreshStatus};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CategoryStatusResponse {
    pub category: ListCategory,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_attempt_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub consecutive_failures: u32,
    pub current_source: ListSource,
    pub item_count: usize,
    pub degraded: bool,
}

impl From<RefreshStatus> for CategoryStatusResponse {
    fn from(status: RefreshStatus) -> Self {
        let degraded = status.is_degraded();
        Self {
            category: status.category,
            last_success_at: status.last_success_at,
            last_attempt_at: status.last_attempt_at,
            last_error: status.last_error,
            consecutive_failures: status.consecutive_failures,
            current_source: status.current_source,
            item_count: status.item_count,
            degraded,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatusResponse {
    pub backend: String,
    pub degraded: bool,
    pub hits: u64,
    pub misses: u64,
    pub stale_reads: u64,
    pub writes: u64,
    pub backend_failures: u64,
    pub hit_rate: f64,
}

impl From<CacheStoreStats> for CacheStatusResponse {
    fn from(stats: CacheStoreStats) -> Self {
        let lookups = stats.hits + stats.misses;
        let hit_rate = if lookups > 0 {
            (stats.hits as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };
        Self {
            backend: stats.backend.to_string(),
            degraded: stats.degraded,
            hits: stats.hits,
            misses: stats.misses,
            stale_reads: stats.stale_reads,
            writes: stats.writes,
            backend_failures: stats.backend_failures,
            hit_rate,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct StatusResponse {
    pub categories: Vec<CategoryStatusResponse>,
    pub cache: CacheStatusResponse,
}
