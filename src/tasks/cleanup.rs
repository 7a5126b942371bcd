//! TTL Cleanup Task
//!
//! Background task that periodically removes expired store entries. The
//! engine already drops expired entries lazily on read; the sweep reclaims
//! entries nothing reads again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::SharedStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the store for each sweep.
///
/// # Arguments
/// * `store` - Shared handle to the store engine
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(store: SharedStore, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store_guard = store.write().await;
                store_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tokio::sync::RwLock;

    use crate::store::KvStore;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let store: SharedStore = Arc::new(RwLock::new(KvStore::new()));

        {
            let mut store_guard = store.write().await;
            store_guard
                .set("expire_soon".to_string(), "value".to_string(), 1)
                .unwrap();
        }

        let handle = spawn_cleanup_task(store.clone(), 1);

        // Wait for the entry to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let store_guard = store.read().await;
            assert!(
                store_guard.is_empty(),
                "Expired entry should have been swept"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let store: SharedStore = Arc::new(RwLock::new(KvStore::new()));

        {
            let mut store_guard = store.write().await;
            store_guard
                .set("long_lived".to_string(), "value".to_string(), 3600)
                .unwrap();
        }

        let handle = spawn_cleanup_task(store.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut store_guard = store.write().await;
            let result = store_guard.get("long_lived");
            assert_eq!(result.as_deref(), Some("value"));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let store: SharedStore = Arc::new(RwLock::new(KvStore::new()));

        let handle = spawn_cleanup_task(store, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
