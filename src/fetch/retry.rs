//! Retry with backoff for provider calls.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::Config;
use crate::fetch::ProviderError;

// == Retry Policy ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first call included
    pub max_attempts: u32,
    /// Delay before the second attempt after a server error; doubles after that
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.fetch_max_attempts,
            Duration::from_millis(config.fetch_base_delay_ms),
        )
    }

    /// A policy that gives up after the first failure.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// How long to wait after `error` on attempt `attempt` (1-based), or
    /// `None` if the error should not be retried.
    pub fn delay_for(&self, error: &ProviderError, attempt: u32) -> Option<Duration> {
        match error {
            ProviderError::RateLimited { retry_after, .. } => Some(*retry_after),
            ProviderError::Api { status, .. } if *status >= 500 => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                Some(self.base_delay.saturating_mul(factor))
            }
            _ => None,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(1000))
    }
}

// == Retry With Backoff ==
/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// runs out of attempts.
///
/// - Rate limited: waits the provider's `retry_after`.
/// - Upstream 5xx: waits `base_delay * 2^(attempt-1)`.
/// - Anything else (4xx, validation, transport): returned immediately.
///
/// After the last attempt the last error is returned.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= policy.max_attempts {
                    warn!(attempt, code = error.code(), "giving up: {}", error);
                    return Err(error);
                }
                let Some(delay) = policy.delay_for(&error, attempt) else {
                    debug!(attempt, code = error.code(), "not retrying: {}", error);
                    return Err(error);
                };
                debug!(attempt, ?delay, code = error.code(), "retrying after: {}", error);
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
