//! Error types for market data providers.

use std::time::Duration;

use thiserror::Error;

/// Errors a data provider can report while fetching a payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Rate limit exceeded for {service}")]
    RateLimited {
        service: String,
        retry_after: Duration,
    },

    #[error("{service} returned HTTP {status}: {message}")]
    Api {
        service: String,
        status: u16,
        message: String,
    },

    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Malformed response from {service}: {message}")]
    Malformed { service: String, message: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ProviderError {
    /// Rate limits and upstream 5xx responses are worth another attempt;
    /// everything else will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::RateLimited { .. } => true,
            ProviderError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Short machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            ProviderError::RateLimited { .. } => "RATE_LIMIT",
            ProviderError::Api { .. } => "API_ERROR",
            ProviderError::Validation { .. } => "VALIDATION_ERROR",
            ProviderError::Malformed { .. } => "MALFORMED_RESPONSE",
            ProviderError::Transport(_) => "TRANSPORT_ERROR",
        }
    }
}
