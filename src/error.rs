//! Error types for the cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache service.
///
/// A cache miss is not an error: lookups return `Ok(None)` so callers can
/// always tell a miss apart from a store failure.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Invalid request data
    #[error("{0}")]
    InvalidRequest(String),

    /// The store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A store operation did not complete in time
    #[error("store operation timed out: {0}")]
    Timeout(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Unavailable(_) | CacheError::Timeout(_) | CacheError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (
                CacheError::InvalidRequest("name is required".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CacheError::Unavailable("connection refused".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CacheError::Timeout("write lock".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CacheError::Internal("oops".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_invalid_request_message_is_verbatim() {
        // Validation errors surface the message exactly as written, without
        // any variant prefix.
        let error = CacheError::InvalidRequest("name is required".to_string());
        assert_eq!(error.to_string(), "name is required");
    }

    #[tokio::test]
    async fn test_error_body_uses_error_envelope() {
        let response = CacheError::Internal("boom".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json.get("error").is_some());
    }
}
