//! Store Module
//!
//! The Redis-like key-value store: engine, entries, diagnostics, and the
//! client contract the rest of the service talks to.

mod client;
mod engine;
mod entry;
mod info;


// Re-export public types
pub use client::{SharedStore, Store, StoreClient};
pub use engine::KvStore;
pub use entry::StoreEntry;
pub use info::ServerInfo;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
