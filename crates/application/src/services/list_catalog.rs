use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use medref_domain::static_lists::static_list;
use medref_domain::{CachedList, ListCategory, ListSource, RefreshStatus};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default, Clone)]
struct RefreshHistory {
    last_success_at: Option<DateTime<Utc>>,
    last_attempt_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
    consecutive_failures: u32,
}

struct CategorySlot {
    current: ArcSwap<CachedList>,
    in_flight: AtomicBool,
    history: Mutex<RefreshHistory>,
}

/// Live snapshot of the current list per category.
///
/// Readers load an `Arc<CachedList>` lock-free; a successful refresh swaps
/// in a complete new list so readers see either the old or the new one,
/// never a partial write. Each category starts on its bundled static list.
pub struct ListCatalog {
    slots: HashMap<ListCategory, CategorySlot>,
    static_size: usize,
}

impl ListCatalog {
    pub fn new(static_size: usize) -> Self {
        let slots = ListCategory::all()
            .iter()
            .map(|category| {
                let seed = CachedList::new(
                    *category,
                    static_list(*category, static_size),
                    ListSource::StaticFallback,
                );
                (
                    *category,
                    CategorySlot {
                        current: ArcSwap::from_pointee(seed),
                        in_flight: AtomicBool::new(false),
                        history: Mutex::new(RefreshHistory::default()),
                    },
                )
            })
            .collect();

        Self { slots, static_size }
    }

    fn slot(&self, category: ListCategory) -> &CategorySlot {
        // Every ListCategory is inserted in `new`.
        &self.slots[&category]
    }

    pub fn current(&self, category: ListCategory) -> Arc<CachedList> {
        self.slot(category).current.load_full()
    }

    /// Atomically replace the current list. Empty lists are ignored so a
    /// category can never be left without usable data.
    pub fn install(&self, list: CachedList) -> bool {
        if list.is_empty() {
            return false;
        }
        self.slot(list.category).current.store(Arc::new(list));
        true
    }

    /// Install `list` only while `replace(current)` holds, retrying if a
    /// concurrent swap lands between the check and the store.
    pub fn install_if<F>(&self, list: CachedList, replace: F) -> bool
    where
        F: Fn(&CachedList) -> bool,
    {
        if list.is_empty() {
            return false;
        }
        let slot = self.slot(list.category);
        let candidate = Arc::new(list);
        loop {
            let current = slot.current.load_full();
            if !replace(&current) {
                return false;
            }
            let previous = slot.current.compare_and_swap(&current, Arc::clone(&candidate));
            if Arc::ptr_eq(&previous, &current) {
                return true;
            }
        }
    }

    pub fn static_fallback(&self, category: ListCategory) -> CachedList {
        CachedList::new(
            category,
            static_list(category, self.static_size),
            ListSource::StaticFallback,
        )
    }

    /// Claim the refresh slot for `category`. `None` when a refresh is
    /// already running; the slot is released when the guard drops.
    pub fn try_begin_refresh(&self, category: ListCategory) -> Option<RefreshGuard<'_>> {
        let slot = self.slot(category);
        slot.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshGuard {
                flag: &slot.in_flight,
            })
    }

    pub fn is_refreshing(&self, category: ListCategory) -> bool {
        self.slot(category).in_flight.load(Ordering::Acquire)
    }

    pub fn record_success(&self, category: ListCategory, at: DateTime<Utc>) {
        let mut history = self.history(category);
        history.last_success_at = Some(at);
        history.last_attempt_at = Some(at);
        history.last_error = None;
        history.consecutive_failures = 0;
    }

    pub fn record_failure(&self, category: ListCategory, error: String, at: DateTime<Utc>) {
        let mut history = self.history(category);
        history.last_attempt_at = Some(at);
        history.last_error = Some(error);
        history.consecutive_failures = history.consecutive_failures.saturating_add(1);
    }

    pub fn status(&self, category: ListCategory) -> RefreshStatus {
        let current = self.current(category);
        let history = self.history(category).clone();
        RefreshStatus {
            category,
            last_success_at: history.last_success_at,
            last_attempt_at: history.last_attempt_at,
            last_error: history.last_error,
            consecutive_failures: history.consecutive_failures,
            current_source: current.source,
            item_count: current.count,
        }
    }

    fn history(&self, category: ListCategory) -> std::sync::MutexGuard<'_, RefreshHistory> {
        // A poisoned lock only means a panic mid-update of plain fields.
        self.slot(category)
            .history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Releases the per-category in-flight flag on drop.
pub struct RefreshGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
