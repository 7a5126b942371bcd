//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `GET /cache/test` - Cache-aside fetch of a fixed test key
//! - `POST /cache/set` - Force-set a key from form fields
//! - `GET /cache/get/:key` - Retrieve a stored payload by key
//! - `DELETE /cache/delete/:key` - Delete a key
//! - `GET /cache/stats` - Store server diagnostics
//! - `GET|POST /api/name` - Get-or-set the cached name
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
