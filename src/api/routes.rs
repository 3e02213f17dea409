//! API Routes
//!
//! Configures the Axum router with all cache endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, delete_handler, exists_handler, get_handler, health_handler, set_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /cache/:dataset` - Store a payload (`scope` in the body)
/// - `GET /cache/:dataset?scope=` - Read a fresh payload
/// - `DELETE /cache/:dataset?scope=` - Clear one key
/// - `GET /cache/:dataset/exists?scope=` - Freshness-aware presence check
/// - `DELETE /cache` - Clear everything
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/cache/:dataset",
            get(get_handler).put(set_handler).delete(delete_handler),
        )
        .route("/cache/:dataset/exists", get(exists_handler))
        .route("/cache", delete(clear_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
