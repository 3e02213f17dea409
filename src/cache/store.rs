//! Cache Store Module
//!
//! Time-boxed key/value store: one global TTL, lazy expiry on read, no
//! capacity bound.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheKey, CacheStats, Clock, SystemClock, DEFAULT_TTL_MS};

// == Cache Store ==
/// In-memory cache whose entries stay readable for `ttl_ms` after each `set`.
///
/// Reads never fail: absence is reported as `None`. A stale entry found by a
/// read is removed on the spot; nothing sweeps the map in the background.
#[derive(Debug)]
pub struct CacheStore<V = serde_json::Value> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Freshness window shared by every entry
    ttl_ms: u64,
    /// Time source
    clock: Arc<dyn Clock>,
    /// Read statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructors ==
    /// Creates a store with the given TTL in milliseconds, using the wall clock.
    pub fn new(ttl_ms: u64) -> Self {
        Self::with_clock(ttl_ms, Arc::new(SystemClock))
    }

    /// Creates a store that reads time from `clock`.
    pub fn with_clock(ttl_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms,
            clock,
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and restarting
    /// its freshness window.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let now = self.clock.now_ms();
        trace!(key = %key, stored_at = now, "cache set");
        self.entries.insert(key, CacheEntry::new(value, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the stored value if the entry is still fresh.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_entry(key).map(|entry| entry.value)
    }

    /// Returns a copy of the fresh entry, timestamp included.
    ///
    /// Same semantics as [`CacheStore::get`]: a stale entry is removed and
    /// reported as absent.
    pub fn get_entry(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let now = self.clock.now_ms();

        let fresh = match self.entries.get(key) {
            Some(entry) => entry.is_fresh(now, self.ttl_ms),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if !fresh {
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_expiration();
            debug!(key = %key, "cache entry expired");
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).cloned()
    }

    // == Has ==
    /// Reports whether a read of `key` right now would hit.
    ///
    /// Applies the same freshness check as `get` but leaves the map and the
    /// statistics untouched.
    pub fn has(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| entry.is_fresh(now, self.ttl_ms))
    }

    // == Clear Key ==
    /// Removes the entry for `key`. Returns whether anything was removed.
    pub fn clear_key(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_total_entries(self.entries.len());
            debug!(key = %key, "cache entry cleared");
        }
        removed
    }

    // == Clear ==
    /// Empties the cache. Returns the number of entries removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        debug!(removed = count, "cache cleared");
        count
    }

    // == Scoped Access ==
    pub fn get_scoped(&mut self, key: &CacheKey) -> Option<V> {
        self.get(key.as_str())
    }

    pub fn set_scoped(&mut self, key: &CacheKey, value: V) {
        self.set(key.as_str(), value);
    }

    pub fn has_scoped(&self, key: &CacheKey) -> bool {
        self.has(key.as_str())
    }

    pub fn clear_scoped(&mut self, key: &CacheKey) -> bool {
        self.clear_key(key.as_str())
    }

    // == Introspection ==
    /// Number of stored entries, including stale ones no read has touched yet.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// Current time according to the store's clock.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}
