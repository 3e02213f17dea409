//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::{CacheKey, CacheStore};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, ExistsResponse, GetResponse, HealthResponse, ScopeQuery,
    SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds the one cache instance for this process behind an async `RwLock`,
/// so a read's lazy expiry and a write's overwrite never interleave.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.cache_ttl_ms))
    }
}

/// Handler for PUT /cache/:dataset
///
/// Stores the full payload under `{dataset}_{scope}`, replacing any previous one.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if req.value.is_null() {
        return Err(CacheError::InvalidRequest(
            "Value cannot be null".to_string(),
        ));
    }

    let key = CacheKey::scoped(dataset, req.scope())?;
    state.cache.write().await.set_scoped(&key, req.value);

    Ok(Json(SetResponse::new(key)))
}

/// Handler for GET /cache/:dataset
///
/// Returns the payload if still fresh; a stale entry is dropped and reported
/// as not found.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<GetResponse>> {
    let key = CacheKey::scoped(dataset, query.scope())?;

    // Write lock: a stale hit removes the entry and every read updates stats
    let mut cache = state.cache.write().await;
    let entry = cache
        .get_entry(key.as_str())
        .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
    let now = cache.now_ms();
    let ttl_ms = cache.ttl_ms();

    Ok(Json(GetResponse {
        age_ms: entry.age_ms(now),
        ttl_remaining_ms: entry.ttl_remaining_ms(now, ttl_ms),
        value: entry.value,
        key: key.into(),
    }))
}

/// Handler for GET /cache/:dataset/exists
///
/// Freshness-aware presence check; does not touch stats or expire entries.
pub async fn exists_handler(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<ExistsResponse>> {
    let key = CacheKey::scoped(dataset, query.scope())?;
    let exists = state.cache.read().await.has_scoped(&key);

    Ok(Json(ExistsResponse {
        key: key.into(),
        exists,
    }))
}

/// Handler for DELETE /cache/:dataset
///
/// Clears one key so the next read misses (manual refresh).
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<DeleteResponse>> {
    let key = CacheKey::scoped(dataset, query.scope())?;

    if !state.cache.write().await.clear_scoped(&key) {
        return Err(CacheError::NotFound(key.to_string()));
    }

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.write().await.clear();
    info!("Cache cleared: {} entries removed", cleared);

    Json(ClearResponse { cleared })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.ttl_ms()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
