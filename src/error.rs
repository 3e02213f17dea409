//! Error types for the market data cache
//!
//! Cache reads and writes never fail; these errors come from building keys
//! and from the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
#[derive(Error, Debug)]
pub enum CacheError {
    /// No fresh entry for the key
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key could not be built (e.g. empty dataset name)
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidKey(_) | CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, CacheError>;
