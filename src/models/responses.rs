//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies. The envelope
//! shapes differ per endpoint and are part of the public contract, so they
//! are kept as-is rather than unified.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::ServerInfo;

/// Payload produced by the cache test endpoint's compute path.
#[derive(Debug, Clone, Serialize)]
pub struct TestPayload {
    /// Fixed marker message
    pub message: String,
    /// Unix timestamp (seconds) of when the payload was computed
    pub timestamp: i64,
    /// Deterministic stand-in for expensive-to-recompute data
    pub expensive_data: Vec<u32>,
}

/// Response body for GET /cache/test.
#[derive(Debug, Clone, Serialize)]
pub struct TestCacheResponse {
    pub success: bool,
    /// The cached payload, as stored
    pub data: Value,
    pub cache_info: String,
}

/// A value as stored by the explicit set endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedValue {
    pub value: String,
    /// Unix timestamp (seconds) of the write
    pub cached_at: i64,
}

/// Response body for POST /cache/set.
#[derive(Debug, Clone, Serialize)]
pub struct SetCacheResponse {
    pub success: bool,
    pub message: String,
    pub key: String,
    pub cached_data: CachedValue,
}

/// Response body for a GET /cache/get/{key} hit.
#[derive(Debug, Clone, Serialize)]
pub struct GetCacheResponse {
    pub success: bool,
    pub key: String,
    /// The stored payload; JSON if it parses, a plain string otherwise
    pub data: Value,
    pub message: String,
}

/// Failure envelope shared by the cache-inspection endpoints
/// (`{success: false, message, key?}`).
#[derive(Debug, Clone, Serialize)]
pub struct CacheFailure {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl CacheFailure {
    /// Creates a failure envelope without a key.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            key: None,
        }
    }

    /// Creates a failure envelope naming the key involved.
    pub fn with_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            key: Some(key.into()),
        }
    }
}

/// Response body for DELETE /cache/delete/{key}.
///
/// `success` reflects whether the key held a live value before the call.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteCacheResponse {
    pub success: bool,
    pub message: String,
    pub key: String,
}

/// Response body for GET /cache/stats.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub server_info: ServerInfo,
    pub message: String,
}

/// Response body for the name endpoint (GET|POST /api/name).
#[derive(Debug, Clone, Serialize)]
pub struct NameResponse {
    pub cached_name: String,
}

/// Response body for the health endpoint (GET /health).
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for validation and store failures (`{error}`).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
