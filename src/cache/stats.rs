//! Cache Statistics Module
//!
//! Tracks read outcomes so callers can see how often the providers were spared.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache read outcomes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Reads answered from a fresh entry
    pub hits: u64,
    /// Reads that found nothing usable (absent or stale)
    pub misses: u64,
    /// Stale entries dropped by lazy expiry during a read
    pub expirations: u64,
    /// Current number of stored entries
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing has been read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expiration ==
    /// Counts a stale read: one miss plus one expiration.
    pub fn record_expiration(&mut self) {
        self.misses += 1;
        self.expirations += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
