//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_TTL_MS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Freshness window for every cache entry, in milliseconds
    pub cache_ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Attempts per provider fetch, the first call included
    pub fetch_max_attempts: u32,
    /// Base backoff delay after an upstream server error, in milliseconds
    pub fetch_base_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Cache TTL in milliseconds (default: 300000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `FETCH_MAX_ATTEMPTS` - Provider attempts per fetch (default: 3)
    /// - `FETCH_BASE_DELAY_MS` - Backoff base delay (default: 1000)
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl_ms: env_or("CACHE_TTL_MS", defaults.cache_ttl_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            fetch_max_attempts: env_or("FETCH_MAX_ATTEMPTS", defaults.fetch_max_attempts),
            fetch_base_delay_ms: env_or("FETCH_BASE_DELAY_MS", defaults.fetch_base_delay_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_ms: DEFAULT_TTL_MS,
            server_port: 3000,
            fetch_max_attempts: 3,
            fetch_base_delay_ms: 1000,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
