//! Store Diagnostics Module
//!
//! Server-level information about the store, for the stats endpoint.

use serde::Serialize;

// == Server Info ==
/// Diagnostic snapshot of the store.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Store server version
    pub version: String,
    /// Number of live handles on the store
    pub connected_clients: usize,
    /// Human-readable resident size of keys and values
    pub used_memory: String,
    /// Current number of keys
    pub total_keys: usize,
}

/// Formats a byte count the way Redis reports `used_memory_human`.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{}B", bytes)
    } else {
        format!("{:.2}{}", size, UNITS[unit])
    }
}
