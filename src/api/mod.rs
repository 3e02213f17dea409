//! API Module
//!
//! HTTP handlers and routing for the market data cache.
//!
//! # Endpoints
//! - `PUT /cache/:dataset` - Store a payload
//! - `GET /cache/:dataset` - Read a fresh payload
//! - `DELETE /cache/:dataset` - Clear one key
//! - `GET /cache/:dataset/exists` - Freshness-aware presence check
//! - `DELETE /cache` - Clear everything
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
