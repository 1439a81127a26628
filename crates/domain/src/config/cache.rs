use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Distributed cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection string. Absent → in-process cache only.
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Startup connect timeout in milliseconds (default: 2000)
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// How long to stay on the in-process map after a backing store failure
    /// before trying it again, in seconds (default: 30)
    #[serde(default = "default_recheck_secs")]
    pub recheck_interval_secs: u64,

    /// How long expired entries stay retrievable as stale fallbacks,
    /// in seconds (default: 7 days)
    #[serde(default = "default_stale_grace_secs")]
    pub stale_grace_secs: u64,
}

impl CacheConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn recheck_interval(&self) -> Duration {
        Duration::from_secs(self.recheck_interval_secs)
    }

    pub fn stale_grace(&self) -> Duration {
        Duration::from_secs(self.stale_grace_secs)
    }

}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            connect_timeout_ms: default_connect_timeout_ms(),
            recheck_interval_secs: default_recheck_secs(),
            stale_grace_secs: default_stale_grace_secs(),
        }
    }
}

fn default_connect_timeout_ms() -> u64 {
    2000
}

fn default_recheck_secs() -> u64 {
    30
}

fn default_stale_grace_secs() -> u64 {
    7 * 24 * 3600
}
