//! Request and Response models for the cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ScopeQuery, SetRequest};
pub use responses::{
    ClearResponse, DeleteResponse, ErrorResponse, ExistsResponse, GetResponse, HealthResponse,
    SetResponse, StatsResponse,
};
