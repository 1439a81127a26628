use crate::category::CacheCategory;
use crate::config::RefreshConfig;
use std::collections::HashMap;
use std::time::Duration;

const HOUR: u64 = 3600;

/// Freshness policy for one [`CacheCategory`].
///
/// `refresh_interval` is decoupled from `ttl`: refresh normally runs more often
/// than data expires, so `ttl` only matters once refreshing stops entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStrategy {
    pub ttl: Duration,
    pub refresh_interval: Duration,
}

impl CacheStrategy {
    pub const fn new(ttl_secs: u64, refresh_secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
            refresh_interval: Duration::from_secs(refresh_secs),
        }
    }
}

/// Static category → strategy table. TTLs are resolved here at write time so
/// no call site passes a TTL of its own.
#[derive(Debug, Clone)]
pub struct CacheStrategyRegistry {
    strategies: HashMap<CacheCategory, CacheStrategy>,
}

impl CacheStrategyRegistry {
    pub fn new() -> Self {
        let strategies = HashMap::from([
            (
                CacheCategory::MedicalReference,
                CacheStrategy::new(24 * HOUR, HOUR),
            ),
            (
                CacheCategory::DrugInteractions,
                CacheStrategy::new(24 * HOUR, HOUR),
            ),
            (
                CacheCategory::LiteratureSearch,
                CacheStrategy::new(6 * HOUR, HOUR),
            ),
            (CacheCategory::ClinicalTrials, CacheStrategy::new(HOUR, HOUR)),
        ]);
        Self { strategies }
    }

    /// Apply per-category refresh interval overrides from configuration.
    pub fn with_overrides(mut self, refresh: &RefreshConfig) -> Self {
        for (category, secs) in refresh.interval_overrides() {
            if let Some(strategy) = self.strategies.get_mut(&category) {
                strategy.refresh_interval = Duration::from_secs(secs);
            }
        }
        self
    }

    /// Replace the policy for one category.
    pub fn with_strategy(mut self, category: CacheCategory, strategy: CacheStrategy) -> Self {
        self.strategies.insert(category, strategy);
        self
    }

    pub fn strategy(&self, category: CacheCategory) -> CacheStrategy {
        self.strategies
            .get(&category)
            .copied()
            .unwrap_or(CacheStrategy::new(HOUR, HOUR))
    }

    pub fn ttl(&self, category: CacheCategory) -> Duration {
        self.strategy(category).ttl
    }

    pub fn refresh_interval(&self, category: CacheCategory) -> Duration {
        self.strategy(category).refresh_interval
    }
}

impl Default for CacheStrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
