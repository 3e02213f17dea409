//! Cache Entry Module
//!
//! Defines a stored payload together with the instant it was stored.

// == Cache Entry ==
/// A single cached payload and its storage timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored payload, returned verbatim on a fresh read
    pub value: V,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped at `stored_at`.
    pub fn new(value: V, stored_at: u64) -> Self {
        Self { value, stored_at }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    ///
    /// A clock that reads earlier than `stored_at` yields an age of 0.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.stored_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still inside its freshness window.
    ///
    /// The window `[stored_at, stored_at + ttl_ms]` is closed: an entry read
    /// exactly `ttl_ms` after storage is still fresh, one millisecond later
    /// it is stale.
    pub fn is_fresh(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) <= ttl_ms
    }

    // == Time To Live ==
    /// Returns the remaining freshness in milliseconds, 0 once stale.
    pub fn ttl_remaining_ms(&self, now: u64, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now))
    }
}
