//! Store Client Module
//!
//! The client-facing contract over the key-value store, and its in-process
//! implementation. Every operation is fallible so callers can always tell a
//! miss (`Ok(None)`, `Ok(false)`) apart from a store failure (`Err`).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::time::timeout;

use crate::error::{CacheError, Result};
use crate::store::info::format_bytes;
use crate::store::{KvStore, ServerInfo};

/// The engine shared between the HTTP layer and background tasks.
pub type SharedStore = Arc<RwLock<KvStore>>;

// == Store Contract ==
/// Client contract for a Redis-like key-value store.
#[async_trait]
pub trait Store: Send + Sync {
    /// Looks up a live value; `Ok(None)` on miss.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value expiring `ttl_seconds` from now, replacing any prior
    /// value and resetting its expiry.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()>;

    /// Removes a key, reporting whether a live value existed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Checks whether a key currently holds a live value.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Returns a diagnostic snapshot of the store server.
    async fn server_info(&self) -> Result<ServerInfo>;
}

// == Store Client ==
/// Handle to the in-process store.
///
/// Cloning is cheap; all clones share one engine. Lock acquisition is
/// bounded by the configured operation timeout, and exceeding it is
/// reported as an error, never as an empty value.
#[derive(Debug, Clone)]
pub struct StoreClient {
    shared: SharedStore,
    op_timeout: Duration,
}

impl StoreClient {
    /// Creates a client over a shared engine.
    pub fn new(shared: SharedStore, op_timeout: Duration) -> Self {
        Self { shared, op_timeout }
    }

    async fn write_guard(&self) -> Result<RwLockWriteGuard<'_, KvStore>> {
        timeout(self.op_timeout, self.shared.write())
            .await
            .map_err(|_| {
                CacheError::Timeout(format!(
                    "write not acquired within {:?}",
                    self.op_timeout
                ))
            })
    }

    async fn read_guard(&self) -> Result<RwLockReadGuard<'_, KvStore>> {
        timeout(self.op_timeout, self.shared.read())
            .await
            .map_err(|_| {
                CacheError::Timeout(format!("read not acquired within {:?}", self.op_timeout))
            })
    }
}

#[async_trait]
impl Store for StoreClient {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write access: lookups drop expired entries in place.
        let mut store = self.write_guard().await?;
        Ok(store.get(key))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        let mut store = self.write_guard().await?;
        store.set(key.to_string(), value.to_string(), ttl_seconds)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut store = self.write_guard().await?;
        Ok(store.delete(key))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut store = self.write_guard().await?;
        Ok(store.exists(key))
    }

    async fn server_info(&self) -> Result<ServerInfo> {
        let store = self.read_guard().await?;
        Ok(ServerInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            connected_clients: Arc::strong_count(&self.shared),
            used_memory: format_bytes(store.used_memory()),
            total_keys: store.len(),
        })
    }
}
