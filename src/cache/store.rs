//! Cache Store Module
//!
//! Expiring key-value cache: a HashMap behind one exclusive lock, reclaimed by a
//! fixed-period background sweep.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::cache::{CacheEntry, CacheStats};
use crate::tasks::spawn_sweeper;

// == Locked State ==
/// Everything guarded by the cache lock.
#[derive(Debug, Default)]
struct State {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    interval: Duration,
    shutdown: CancellationToken,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// == Cache ==
/// Expiring cache of opaque byte payloads keyed by string.
///
/// Cloning a `Cache` yields another handle to the same entries. Every entry
/// lives for at least `interval` and is removed by the first sweep that finds
/// it older than that, so an entry may survive for up to twice the interval.
///
/// Lookups never trigger eviction; only the background sweep removes entries.
#[derive(Debug, Clone)]
pub struct Cache {
    shared: Arc<Shared>,
}

/// Non-owning handle held by the sweeper so it does not keep the cache alive.
#[derive(Debug, Clone)]
pub(crate) struct WeakCache {
    shared: Weak<Shared>,
}

impl WeakCache {
    pub(crate) fn upgrade(&self) -> Option<Cache> {
        self.shared.upgrade().map(|shared| Cache { shared })
    }
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its background sweep.
    ///
    /// The sweep runs every `interval` until [`Cache::shutdown`] is called or
    /// the last handle is dropped. Must be called from within a Tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let cache = Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::default()),
                interval,
                shutdown: CancellationToken::new(),
                sweeper: Mutex::new(None),
            }),
        };

        let handle = spawn_sweeper(cache.downgrade(), interval, cache.shared.shutdown.clone());
        *cache
            .shared
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);

        cache
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn downgrade(&self) -> WeakCache {
        WeakCache {
            shared: Arc::downgrade(&self.shared),
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The entry's expiry window starts now, even when overwriting.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let entry = CacheEntry::new(value.into());

        let mut state = self.lock();
        state.entries.insert(key.into(), entry);
        let len = state.entries.len();
        state.stats.set_total_entries(len);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if present.
    ///
    /// A key that was never added and a key that has been reclaimed both
    /// yield `None`.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut state = self.lock();
        let value = state.entries.get(key).map(|entry| entry.value.clone());

        match value {
            Some(_) => state.stats.record_hit(),
            None => state.stats.record_miss(),
        }
        value
    }

    // == Sweep ==
    /// Removes every entry whose window ended strictly before now.
    ///
    /// Returns the number of entries removed. This is the full scan the
    /// background task runs on each tick.
    pub fn sweep(&self) -> usize {
        let interval = self.shared.interval;
        let mut state = self.lock();
        let now = Instant::now();

        let before = state.entries.len();
        state
            .entries
            .retain(|_, entry| !entry.is_stale(interval, now));
        let removed = before - state.entries.len();

        let len = state.entries.len();
        state.stats.record_reclaimed(removed);
        state.stats.set_total_entries(len);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.entries.len());
        stats
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// The fixed expiry interval, which is also the sweep period.
    pub fn interval(&self) -> Duration {
        self.shared.interval
    }

    // == Lifecycle ==
    /// Returns true while the background sweep is still scheduled.
    pub fn is_sweeping(&self) -> bool {
        let sweeper = self
            .shared
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sweeper.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Signals the background sweep to stop without waiting for it.
    ///
    /// Entries already stored stay readable; they are simply no longer reclaimed.
    pub fn shutdown(&self) {
        self.shared.shutdown.cancel();
    }

    /// Signals the background sweep to stop and waits for it to finish.
    pub async fn stop(&self) {
        self.shutdown();

        let handle = self
            .shared
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!("Cache sweeper ended abnormally: {}", err);
            }
        }
    }
}
