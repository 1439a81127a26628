use crate::ports::CacheBackend;
use chrono::Utc;
use medref_domain::{CacheCategory, CacheStrategyRegistry, DomainError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const ENTRY_FORMAT_VERSION: u8 = 1;
const HEADER_LEN: usize = 10;

/// A value plus the metadata needed to judge its freshness.
///
/// Wire layout: `[version][category][expires_at millis, i64 BE][value...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: String,
    pub value: Vec<u8>,
    pub category: CacheCategory,
    /// Unix epoch milliseconds
    pub expires_at: i64,
}

impl CacheEntry {
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        now_millis >= self.expires_at
    }

    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.value.len());
        buf.push(ENTRY_FORMAT_VERSION);
        buf.push(category_tag(self.category));
        buf.extend_from_slice(&self.expires_at.to_be_bytes());
        buf.extend_from_slice(&self.value);
        buf
    }

    fn decode(key: &str, bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_LEN || bytes[0] != ENTRY_FORMAT_VERSION {
            return None;
        }
        let category = *CacheCategory::all().get(bytes[1] as usize)?;
        let mut millis = [0u8; 8];
        millis.copy_from_slice(&bytes[2..HEADER_LEN]);
        Some(Self {
            key: key.to_string(),
            value: bytes[HEADER_LEN..].to_vec(),
            category,
            expires_at: i64::from_be_bytes(millis),
        })
    }
}

fn category_tag(category: CacheCategory) -> u8 {
    CacheCategory::all()
        .iter()
        .position(|c| *c == category)
        .unwrap_or(0) as u8
}

/// Result of [`CacheStore::get_even_if_stale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleRead {
    pub value: Vec<u8>,
    pub category: CacheCategory,
    pub expired: bool,
}

#[derive(Default)]
struct CacheStoreMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    stale_reads: AtomicU64,
    writes: AtomicU64,
    backend_failures: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStoreStats {
    pub backend: &'static str,
    pub degraded: bool,
    pub hits: u64,
    pub misses: u64,
    pub stale_reads: u64,
    pub writes: u64,
    pub backend_failures: u64,
}

enum Route<'a> {
    Primary(&'a Arc<dyn CacheBackend>),
    /// Single caller allowed to retry the primary after an outage. The slot
    /// is released when the route is dropped, even if the call is cancelled.
    Recovery(&'a Arc<dyn CacheBackend>, RecoveryGuard<'a>),
    Local,
}

struct RecoveryGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for RecoveryGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Category-aware cache over a primary backend with an in-process fallback.
///
/// TTL comes from the [`CacheStrategyRegistry`] at `set` time. When the
/// primary fails, the store flips to the in-process backend for all callers
/// (logged once per outage) and retries the primary again after
/// `recheck_interval`. No method returns an error: backend failures degrade to
/// misses and dropped writes.
pub struct CacheStore {
    primary: Option<Arc<dyn CacheBackend>>,
    local: Arc<dyn CacheBackend>,
    registry: Arc<CacheStrategyRegistry>,
    stale_grace: Duration,
    recheck_interval: Duration,
    op_timeout: Duration,
    degraded: AtomicBool,
    recovering: AtomicBool,
    epoch: Instant,
    last_failure_ms: AtomicU64,
    metrics: CacheStoreMetrics,
}

impl CacheStore {
    /// Store backed only by the in-process map.
    pub fn local_only(local: Arc<dyn CacheBackend>, registry: Arc<CacheStrategyRegistry>) -> Self {
        Self::new(None, local, registry)
    }

    pub fn new(
        primary: Option<Arc<dyn CacheBackend>>,
        local: Arc<dyn CacheBackend>,
        registry: Arc<CacheStrategyRegistry>,
    ) -> Self {
        info!(
            primary = primary.as_ref().map(|b| b.name()).unwrap_or("none"),
            local = local.name(),
            "Cache store initialized"
        );
        Self {
            primary,
            local,
            registry,
            stale_grace: Duration::from_secs(7 * 24 * 3600),
            recheck_interval: Duration::from_secs(30),
            op_timeout: Duration::from_secs(2),
            degraded: AtomicBool::new(false),
            recovering: AtomicBool::new(false),
            epoch: Instant::now(),
            last_failure_ms: AtomicU64::new(0),
            metrics: CacheStoreMetrics::default(),
        }
    }

    pub fn with_stale_grace(mut self, grace: Duration) -> Self {
        self.stale_grace = grace;
        self
    }

    pub fn with_recheck_interval(mut self, interval: Duration) -> Self {
        self.recheck_interval = interval;
        self
    }

    /// Upper bound on a single primary backend call; an elapsed call counts
    /// as an outage.
    pub fn with_op_timeout(mut self, timeout: Duration) -> Self {
        self.op_timeout = timeout;
        self
    }

    pub fn registry(&self) -> &CacheStrategyRegistry {
        &self.registry
    }

    /// Fresh value for `key`, or `None` on miss, expiry or category mismatch.
    pub async fn get(&self, key: &str, category: CacheCategory) -> Option<Vec<u8>> {
        let entry = self.read_entry(key).await;
        match entry {
            Some(entry) if entry.category == category && !entry.is_expired_at(now_millis()) => {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key, category = %category, "Cache HIT");
                Some(entry.value)
            }
            _ => {
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key, category = %category, "Cache MISS");
                None
            }
        }
    }

    /// Value for `key` regardless of expiry, for callers deciding whether a
    /// stale serve beats serving nothing.
    pub async fn get_even_if_stale(&self, key: &str) -> Option<StaleRead> {
        let entry = self.read_entry(key).await?;
        let expired = entry.is_expired_at(now_millis());
        if expired {
            self.metrics.stale_reads.fetch_add(1, Ordering::Relaxed);
            debug!(key, category = %entry.category, "Serving stale cache entry");
        }
        Some(StaleRead {
            value: entry.value,
            category: entry.category,
            expired,
        })
    }

    pub async fn set(&self, key: &str, value: Vec<u8>, category: CacheCategory) {
        let ttl = self.registry.ttl(category);
        let expires_at = now_millis().saturating_add(ttl.as_millis() as i64);
        let entry = CacheEntry {
            key: key.to_string(),
            value,
            category,
            expires_at,
        };
        let retain = ttl.saturating_add(self.stale_grace);
        let bytes = entry.encode();

        let written = match self.route() {
            Route::Primary(primary) | Route::Recovery(primary, _) => {
                match self.bounded(primary, primary.set(key, bytes.clone(), retain)).await {
                    Ok(()) => {
                        self.mark_recovered();
                        true
                    }
                    Err(e) => {
                        self.mark_outage(primary.name(), &e.to_string());
                        self.write_local(key, bytes, retain).await
                    }
                }
            }
            Route::Local => self.write_local(key, bytes, retain).await,
        };

        if written {
            self.metrics.writes.fetch_add(1, Ordering::Relaxed);
            debug!(key, category = %category, ttl_secs = ttl.as_secs(), "Cache SET");
        }
    }

    pub async fn delete(&self, key: &str) {
        if let Route::Primary(primary) | Route::Recovery(primary, _) = self.route() {
            match self.bounded(primary, primary.delete(key)).await {
                Ok(()) => self.mark_recovered(),
                Err(e) => self.mark_outage(primary.name(), &e.to_string()),
            }
        }
        // The in-process map may hold a copy written during an outage.
        if let Err(e) = self.local.delete(key).await {
            debug!(key, error = %e, "Local cache delete failed");
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        key: &str,
        category: CacheCategory,
    ) -> Option<T> {
        let bytes = self.get(key, category).await?;
        decode_json(key, &bytes)
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T, category: CacheCategory) {
        match serde_json::to_vec(value) {
            Ok(bytes) => self.set(key, bytes, category).await,
            Err(e) => warn!(key, error = %e, "Failed to serialize cache value"),
        }
    }

    /// Typed variant of [`get_even_if_stale`](Self::get_even_if_stale);
    /// returns the value and whether it was expired.
    pub async fn get_json_even_if_stale<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Option<(T, bool)> {
        let read = self.get_even_if_stale(key).await?;
        decode_json(key, &read.value).map(|value| (value, read.expired))
    }

    /// Evict entries past retention from the in-process backend.
    pub fn purge_local(&self) -> usize {
        self.local.purge_expired()
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Acquire)
    }

    /// Name of the backend currently serving requests.
    pub fn active_backend(&self) -> &'static str {
        match &self.primary {
            Some(primary) if !self.is_degraded() => primary.name(),
            _ => self.local.name(),
        }
    }

    pub fn stats(&self) -> CacheStoreStats {
        CacheStoreStats {
            backend: self.active_backend(),
            degraded: self.is_degraded(),
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            stale_reads: self.metrics.stale_reads.load(Ordering::Relaxed),
            writes: self.metrics.writes.load(Ordering::Relaxed),
            backend_failures: self.metrics.backend_failures.load(Ordering::Relaxed),
        }
    }

    async fn read_entry(&self, key: &str) -> Option<CacheEntry> {
        let bytes = match self.route() {
            Route::Primary(primary) | Route::Recovery(primary, _) => {
                match self.bounded(primary, primary.get(key)).await {
                    Ok(bytes) => {
                        self.mark_recovered();
                        bytes
                    }
                    Err(e) => {
                        self.mark_outage(primary.name(), &e.to_string());
                        self.read_local(key).await
                    }
                }
            }
            Route::Local => self.read_local(key).await,
        }?;

        let entry = CacheEntry::decode(key, &bytes);
        if entry.is_none() {
            debug!(key, "Discarding undecodable cache entry");
        }
        entry
    }

    async fn bounded<T>(
        &self,
        primary: &Arc<dyn CacheBackend>,
        call: impl Future<Output = Result<T, DomainError>>,
    ) -> Result<T, DomainError> {
        match tokio::time::timeout(self.op_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::CacheBackend(format!(
                "{} did not answer within {}ms",
                primary.name(),
                self.op_timeout.as_millis()
            ))),
        }
    }

    async fn read_local(&self, key: &str) -> Option<Vec<u8>> {
        self.local.get(key).await.unwrap_or_else(|e| {
            debug!(key, error = %e, "Local cache read failed");
            None
        })
    }

    async fn write_local(&self, key: &str, bytes: Vec<u8>, retain: Duration) -> bool {
        match self.local.set(key, bytes, retain).await {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "Local cache write failed");
                false
            }
        }
    }

    fn route(&self) -> Route<'_> {
        let Some(primary) = &self.primary else {
            return Route::Local;
        };

        if !self.degraded.load(Ordering::Acquire) {
            return Route::Primary(primary);
        }

        let since_failure = self
            .elapsed_ms()
            .saturating_sub(self.last_failure_ms.load(Ordering::Acquire));
        if since_failure >= self.recheck_interval.as_millis() as u64
            && self
                .recovering
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
        {
            return Route::Recovery(
                primary,
                RecoveryGuard {
                    flag: &self.recovering,
                },
            );
        }

        Route::Local
    }

    fn mark_outage(&self, backend: &str, error: &str) {
        self.metrics.backend_failures.fetch_add(1, Ordering::Relaxed);
        self.last_failure_ms.store(self.elapsed_ms(), Ordering::Release);

        if self
            .degraded
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            warn!(
                backend,
                error,
                recheck_secs = self.recheck_interval.as_secs(),
                "Cache backing store unreachable, using in-process cache"
            );
        }
    }

    fn mark_recovered(&self) {
        if self
            .degraded
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            info!(
                backend = self.primary.as_ref().map(|b| b.name()).unwrap_or("none"),
                "Cache backing store reachable again"
            );
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

fn decode_json<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Option<T> {
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(key, error = %e, "Cached payload did not match expected shape");
            None
        }
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
