//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

fn default_key() -> String {
    "default_key".to_string()
}

fn default_value() -> String {
    "default_value".to_string()
}

fn default_ttl() -> u64 {
    3600 // 1 hour
}

/// Form body for the explicit set operation (POST /cache/set).
///
/// Every field is optional; absent fields fall back to the documented
/// defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCacheRequest {
    /// The cache key
    #[serde(default = "default_key")]
    pub key: String,
    /// The value to store
    #[serde(default = "default_value")]
    pub value: String,
    /// TTL in seconds
    #[serde(default = "default_ttl")]
    pub ttl: u64,
}

/// The `name` input for the name endpoint, accepted from the query string,
/// a form body, or a JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameParams {
    #[serde(default)]
    pub name: Option<String>,
}
