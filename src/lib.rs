//! nvcache - A name-value cache HTTP service
//!
//! Exposes a Redis-like key-value store with TTL expiration through a small
//! JSON API, with a cache-aside repository in between.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use repository::CacheRepository;
pub use tasks::spawn_cleanup_task;
