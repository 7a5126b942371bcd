//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_cache_handler, get_cache_handler, health_handler, name_handler, set_cache_handler,
    stats_handler, test_cache_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cache/test` - Cache-aside fetch of a fixed test key
/// - `POST /cache/set` - Force-set a key from form fields
/// - `GET /cache/get/:key` - Retrieve a stored payload by key
/// - `DELETE /cache/delete/:key` - Delete a key
/// - `GET /cache/stats` - Store server diagnostics
/// - `GET|POST /api/name` - Get-or-set the cached name
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/cache/test", get(test_cache_handler))
        .route("/cache/set", post(set_cache_handler))
        .route("/cache/get/:key", get(get_cache_handler))
        .route("/cache/delete/:key", delete(delete_cache_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/api/name", get(name_handler).post(name_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
