//! Cache-Aside Repository
//!
//! Get-or-compute semantics over the store, hiding hit/miss branching from
//! callers. This is the single parameterized contract; callers that cache a
//! fixed well-known key pin the key to a constant.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::store::Store;

/// TTL applied by callers that cache the single well-known name.
pub const DEFAULT_TTL_SECS: u64 = 60;

// == Cache Repository ==
/// Cache-aside access layer over the store.
///
/// Store failures always propagate as errors; they are never folded into a
/// miss.
#[derive(Clone)]
pub struct CacheRepository {
    store: Arc<dyn Store>,
}

impl CacheRepository {
    /// Creates a repository over the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Looks up `key`; on a miss, stores `value` with `ttl_seconds` and
    /// returns it.
    ///
    /// On a hit the supplied `value` is ignored and the stored value is
    /// returned unchanged. Concurrent callers racing on a miss both observe
    /// a consistent value afterwards; the last writer wins.
    pub async fn get_or_set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<String> {
        self.get_or_compute(key, ttl_seconds, || async move { Ok(value) })
            .await
    }

    /// Looks up `key`; on a miss, runs `compute`, stores its result with
    /// `ttl_seconds`, and returns it. `compute` is not invoked on a hit.
    pub async fn get_or_compute<F, Fut>(
        &self,
        key: &str,
        ttl_seconds: u64,
        compute: F,
    ) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        if let Some(hit) = self.store.get(key).await? {
            return Ok(hit);
        }

        let value = compute().await?;
        self.store.set(key, &value, ttl_seconds).await?;
        Ok(value)
    }

    /// Unconditional lookup; `Ok(None)` when the key is absent or expired.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        self.store.get(key).await
    }

    /// Unconditionally writes `key`, overwriting any prior value and
    /// resetting its expiry.
    pub async fn save(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        self.store.set(key, value, ttl_seconds).await
    }

    /// Removes `key`, reporting whether a live value existed.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        self.store.delete(key).await
    }
}
