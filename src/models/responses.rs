//! Response DTOs for the cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for a fresh read (GET /cache/:dataset)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The rendered cache key
    pub key: String,
    /// The stored payload, as it was stored
    pub value: Value,
    /// Milliseconds since the payload was stored
    pub age_ms: u64,
    /// Milliseconds until the payload goes stale
    pub ttl_remaining_ms: u64,
}

/// Response body for a write (PUT /cache/:dataset)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    pub message: String,
    pub key: String,
}

impl SetResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for clearing one key (DELETE /cache/:dataset)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cleared successfully", key),
            key,
        }
    }
}

/// Response body for clearing everything (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Number of entries removed
    pub cleared: usize,
}

/// Response body for the freshness probe (GET /cache/:dataset/exists)
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    pub key: String,
    pub exists: bool,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    /// Stale entries dropped on read
    pub expirations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    /// Freshness window in milliseconds
    pub ttl_ms: u64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, ttl_ms: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_ms,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
