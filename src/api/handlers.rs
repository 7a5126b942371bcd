//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. Each handler maps
//! repository/store results onto that endpoint's response envelope; the
//! envelopes differ per endpoint and are part of the public contract.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json, RequestExt,
};
use chrono::Utc;
use serde_json::Value;
use tracing::error;

use crate::error::{CacheError, Result};
use crate::models::{
    CacheFailure, CachedValue, DeleteCacheResponse, GetCacheResponse, HealthResponse, NameParams,
    NameResponse, SetCacheRequest, SetCacheResponse, StatsResponse, TestCacheResponse, TestPayload,
};
use crate::repository::{CacheRepository, DEFAULT_TTL_SECS};
use crate::store::Store;

// == Well-Known Keys ==
/// Key under which the name endpoint caches its value.
pub const CACHED_NAME_KEY: &str = "cached_name";

/// Fixed key used by the cache test endpoint.
pub const TEST_CACHE_KEY: &str = "test_cache_key";

/// TTL for the cache test payload (5 minutes).
const TEST_CACHE_TTL_SECS: u64 = 300;

/// Simulated cost of recomputing the test payload.
const TEST_COMPUTE_DELAY: Duration = Duration::from_secs(2);

/// Application state shared across all handlers.
///
/// Constructed once at startup and handed to the router; handlers reach the
/// store only through these handles.
#[derive(Clone)]
pub struct AppState {
    /// Store client, used directly for diagnostics
    pub store: Arc<dyn Store>,
    /// Cache-aside repository over the same store
    pub repository: CacheRepository,
}

impl AppState {
    /// Creates a new AppState over the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            repository: CacheRepository::new(store.clone()),
            store,
        }
    }
}

/// Handler for GET /cache/test
///
/// Cache-aside fetch of a fixed key. On a miss the payload is recomputed
/// behind a fixed delay standing in for expensive work; within the TTL
/// window every response carries the same payload.
pub async fn test_cache_handler(
    State(state): State<AppState>,
) -> Result<Json<TestCacheResponse>> {
    let raw = state
        .repository
        .get_or_compute(TEST_CACHE_KEY, TEST_CACHE_TTL_SECS, || async {
            // Simulated expensive computation
            tokio::time::sleep(TEST_COMPUTE_DELAY).await;

            let payload = TestPayload {
                message: "This data was cached!".to_string(),
                timestamp: Utc::now().timestamp(),
                expensive_data: (1..=1000).collect(),
            };
            serde_json::to_string(&payload).map_err(|err| CacheError::Internal(err.to_string()))
        })
        .await?;

    let data: Value =
        serde_json::from_str(&raw).map_err(|err| CacheError::Internal(err.to_string()))?;

    Ok(Json(TestCacheResponse {
        success: true,
        data,
        cache_info: "Data retrieved from cache".to_string(),
    }))
}

/// Handler for POST /cache/set
///
/// Force-overwrite: the prior entry is always deleted first, so the write
/// path below always runs.
pub async fn set_cache_handler(
    State(state): State<AppState>,
    Form(req): Form<SetCacheRequest>,
) -> Result<Json<SetCacheResponse>> {
    state.repository.delete(&req.key).await?;

    let value = req.value.clone();
    let cached_at = Utc::now().timestamp();
    let raw = state
        .repository
        .get_or_compute(&req.key, req.ttl, || async move {
            serde_json::to_string(&CachedValue { value, cached_at })
                .map_err(|err| CacheError::Internal(err.to_string()))
        })
        .await?;

    let cached_data: CachedValue =
        serde_json::from_str(&raw).map_err(|err| CacheError::Internal(err.to_string()))?;

    Ok(Json(SetCacheResponse {
        success: true,
        message: "Cache set successfully".to_string(),
        key: req.key,
        cached_data,
    }))
}

/// Handler for GET /cache/get/:key
///
/// 200 with the stored payload on a hit, 404 on a miss, 500 when the store
/// itself fails.
pub async fn get_cache_handler(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    match state.repository.get(&key).await {
        Ok(Some(raw)) => {
            let data = serde_json::from_str::<Value>(&raw).unwrap_or_else(|_| Value::String(raw));
            (
                StatusCode::OK,
                Json(GetCacheResponse {
                    success: true,
                    key,
                    data,
                    message: "Data retrieved from cache".to_string(),
                }),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(CacheFailure::with_key("Cache key not found", key)),
        )
            .into_response(),
        Err(err) => {
            error!("cache lookup failed for key '{}': {}", key, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CacheFailure::new(format!("Error retrieving cache: {}", err))),
            )
                .into_response()
        }
    }
}

/// Handler for DELETE /cache/delete/:key
///
/// `success` reports whether the key held a live value before the call.
pub async fn delete_cache_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteCacheResponse>> {
    let removed = state.repository.delete(&key).await?;

    let message = if removed {
        "Cache deleted successfully"
    } else {
        "Cache key not found"
    };

    Ok(Json(DeleteCacheResponse {
        success: removed,
        message: message.to_string(),
        key,
    }))
}

/// Handler for GET /cache/stats
///
/// Store server diagnostics; 500 with the `{success: false}` envelope when
/// the store is unreachable.
pub async fn stats_handler(State(state): State<AppState>) -> Response {
    match state.store.server_info().await {
        Ok(server_info) => (
            StatusCode::OK,
            Json(StatsResponse {
                success: true,
                server_info,
                message: "Store connection successful".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!("store diagnostics unavailable: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CacheFailure::new(format!("Store connection failed: {}", err))),
            )
                .into_response()
        }
    }
}

/// Handler for GET|POST /api/name
///
/// Accepts `name` from the query string, a form body, or a JSON body, in
/// that order. The value is cached under a well-known key with a 60-second
/// TTL; within that window the first-written name wins and later inputs are
/// ignored.
pub async fn name_handler(
    State(state): State<AppState>,
    mut request: Request,
) -> Result<Json<NameResponse>> {
    let query_name = request
        .extract_parts::<Query<NameParams>>()
        .await
        .ok()
        .and_then(|Query(params)| params.name)
        .filter(|name| !name.is_empty());

    let name = match query_name {
        Some(name) => Some(name),
        None => {
            let is_json = request
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|ct| ct.starts_with("application/json"));

            if is_json {
                request
                    .extract::<Json<NameParams>, _>()
                    .await
                    .ok()
                    .and_then(|Json(body)| body.name)
            } else {
                request
                    .extract::<Form<NameParams>, _>()
                    .await
                    .ok()
                    .and_then(|Form(body)| body.name)
            }
        }
    };

    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(CacheError::InvalidRequest("name is required".to_string())),
    };

    let cached_name = state
        .repository
        .get_or_set(CACHED_NAME_KEY, name, DEFAULT_TTL_SECS)
        .await?;

    Ok(Json(NameResponse { cached_name }))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
