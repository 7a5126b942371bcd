//! Key-Value Engine Module
//!
//! In-process Redis-like storage: string keys and values, mandatory TTL on
//! every write, lazy expiry on read plus periodic sweeping.

use std::collections::HashMap;

use crate::error::{CacheError, Result};
use crate::store::{StoreEntry, MAX_KEY_LENGTH, MAX_VALUE_SIZE};

// == Key-Value Store ==
/// The storage engine behind the store client.
#[derive(Debug, Default)]
pub struct KvStore {
    /// Key-value storage
    entries: HashMap<String, StoreEntry>,
}

impl KvStore {
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Set ==
    /// Stores a key-value pair expiring `ttl_seconds` from now.
    ///
    /// If the key already exists, the value is overwritten and the expiry
    /// is reset.
    pub fn set(&mut self, key: String, value: String, ttl_seconds: u64) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidRequest(
                "key must not be empty".to_string(),
            ));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        self.entries.insert(key, StoreEntry::new(value, ttl_seconds));

        Ok(())
    }

    // == Get ==
    /// Retrieves a live value by key.
    ///
    /// Expired entries are dropped in place and reported as a miss, so a
    /// miss and an expired entry are indistinguishable to callers.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    // == Exists ==
    /// Checks whether a key currently holds a live value.
    pub fn exists(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // == Delete ==
    /// Removes an entry by key, reporting whether a live value existed.
    ///
    /// Removing an already-expired entry counts as a miss.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => !entry.is_expired(),
            None => false,
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Used Memory ==
    /// Approximate resident size of all keys and values in bytes.
    pub fn used_memory(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, entry)| key.len() + entry.value.len())
            .sum()
    }
}
