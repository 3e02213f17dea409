//! Cache-first fetching.
//!
//! Looks in the cache, calls the provider on a miss, and stores only
//! successful payloads so an outage never leaves error sentinels behind.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStore};
use crate::fetch::{retry_with_backoff, DataProvider, ProviderError, RetryPolicy};

pub struct CachedFetcher<P> {
    cache: Arc<RwLock<CacheStore>>,
    provider: P,
    policy: RetryPolicy,
}

impl<P: DataProvider> CachedFetcher<P> {
    pub fn new(cache: Arc<RwLock<CacheStore>>, provider: P) -> Self {
        Self {
            cache,
            provider,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn cache(&self) -> &Arc<RwLock<CacheStore>> {
        &self.cache
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    // == Get Or Fetch ==
    /// Returns the cached payload for `key`, fetching and caching it on a miss.
    ///
    /// A failed fetch leaves the cache as it was and returns the error.
    pub async fn get_or_fetch(&self, key: &CacheKey) -> Result<Value, ProviderError> {
        let cached = self.cache.write().await.get_scoped(key);
        if let Some(value) = cached {
            debug!(key = %key, "cache hit");
            return Ok(value);
        }

        debug!(key = %key, provider = self.provider.name(), "cache miss, fetching");
        let value = retry_with_backoff(&self.policy, || self.provider.fetch(key)).await?;

        self.cache.write().await.set_scoped(key, value.clone());
        Ok(value)
    }

    // == Refresh ==
    /// Drops the cached payload for `key` and fetches a new one.
    pub async fn refresh(&self, key: &CacheKey) -> Result<Value, ProviderError> {
        self.cache.write().await.clear_scoped(key);
        info!(key = %key, "forced refresh");
        self.get_or_fetch(key).await
    }

    // == Get Or Fallback ==
    /// Like [`CachedFetcher::get_or_fetch`], but a failed fetch yields
    /// `fallback`, which is cached in place of the real payload.
    pub async fn get_or_fallback(&self, key: &CacheKey, fallback: Value) -> Value {
        match self.get_or_fetch(key).await {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    key = %key,
                    provider = self.provider.name(),
                    code = error.code(),
                    "fetch failed, serving fallback: {}",
                    error
                );
                self.cache.write().await.set_scoped(key, fallback.clone());
                fallback
            }
        }
    }
}
