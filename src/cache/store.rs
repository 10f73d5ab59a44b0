//! Cache Store Module
//!
//! Process-wide key-value store with per-entry expiration and lazy, read-time eviction.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock, DEFAULT_TTL_MS};

#[derive(Debug)]
struct Inner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
}

// == TTL Cache ==
/// Thread-safe TTL cache.
///
/// Every operation takes one lock around the mapping and completes without
/// suspending. Stale entries are only removed when a `get` or `clear` touches
/// their key; nothing sweeps in the background.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    inner: Mutex<Inner<V>>,
    clock: C,
    default_ttl: Duration,
}

impl<V> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache on the system clock with a 60 second default TTL.
    pub fn new() -> Self {
        Self::with_default_ttl(Duration::from_millis(DEFAULT_TTL_MS))
    }

    /// Creates an empty cache on the system clock with the given default TTL.
    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self::with_clock(SystemClock, default_ttl)
    }
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Clock> TtlCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(clock: C, default_ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
            clock,
            default_ttl,
        }
    }

    // == Set ==
    /// Stores `value` under `key` until `ttl` has elapsed.
    ///
    /// Overwrites any existing entry, stale or fresh, and resets its expiration.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_ms);

        let mut inner = self.inner.lock();
        debug!(key = %key, ttl_ms, "cache set");
        inner.entries.insert(key, entry);
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
    }

    /// Stores `value` under `key` with the cache's default TTL.
    pub fn set_default(&self, key: impl Into<String>, value: V) {
        self.set(key, value, self.default_ttl);
    }

    // == Clear ==
    /// Removes the entry for `key`; no-op if absent.
    pub fn clear(&self, key: &str) {
        let mut inner = self.inner.lock();
        if inner.entries.remove(key).is_some() {
            debug!(key = %key, "cache entry cleared");
        }
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
    }

    // == Clear All ==
    /// Empties the mapping.
    pub fn clear_all(&self) {
        let mut inner = self.inner.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        inner.stats.set_total_entries(0);
        debug!(removed, "cache cleared");
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats.clone()
    }

    // == Length ==
    /// Returns the number of entries in the mapping, stale ones included.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the mapping holds no entries, stale or fresh.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    // == Default TTL ==
    /// Returns the TTL applied by `set_default`.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    // == Get ==
    /// Returns a copy of the value stored under `key` if it is still fresh.
    ///
    /// A stale entry is removed from the mapping and reported as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        match inner.entries.get(key) {
            None => {
                inner.stats.record_miss();
                debug!(key = %key, "cache miss");
                return None;
            }
            Some(entry) if !entry.is_expired(now) => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                debug!(key = %key, "cache hit");
                return Some(value);
            }
            Some(_) => {}
        }

        // Stale: evict on read
        inner.entries.remove(key);
        inner.stats.record_expiration();
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        debug!(key = %key, "cache entry expired");
        None
    }
}
