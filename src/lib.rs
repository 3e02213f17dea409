//! Market Cache - time-boxed cache for third-party market data
//!
//! Keeps quotes, fund NAVs and crypto tickers for a fixed window so repeated
//! renders do not hammer rate-limited providers.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;

pub use api::AppState;
pub use cache::{CacheKey, CacheStore, Scope};
pub use config::Config;
pub use fetch::{CachedFetcher, DataProvider, ProviderError, RetryPolicy};
