//! SQLite connection configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the storage connection pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Number of read-only reader connections (0 falls back to the
    /// pool default).
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { read_pool_size: 2 }
    }
}
