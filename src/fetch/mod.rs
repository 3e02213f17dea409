//! Fetch Module
//!
//! Cache-first access to third-party market data: the provider seam, retry
//! policy, and input validation.

mod error;
mod fetcher;
mod provider;
mod retry;
mod validate;

pub use error::ProviderError;
pub use fetcher::CachedFetcher;
pub use provider::DataProvider;
pub use retry::{retry_with_backoff, RetryPolicy};
pub use validate::{validate_fund_code, validate_stock_symbol};
