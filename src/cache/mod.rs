//! Cache Module
//!
//! Time-boxed in-memory cache for market data payloads with lazy expiry.

mod clock;
mod entry;
mod key;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::{CacheKey, Scope, DEFAULT_SCOPE};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default freshness window in milliseconds
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000; // 5 minutes
