//! Data provider seam.
//!
//! Implementations wrap a third-party market data API (quotes, fund NAVs,
//! crypto tickers) and hand back the final parsed payload for a key.

use async_trait::async_trait;
use serde_json::Value;

use crate::cache::CacheKey;
use crate::fetch::ProviderError;

#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Service name used in logs and errors.
    fn name(&self) -> &str;

    /// Fetches the complete payload for `key`.
    ///
    /// Must only return `Ok` with the full, final payload; partial data is an
    /// error.
    async fn fetch(&self, key: &CacheKey) -> Result<Value, ProviderError>;
}
