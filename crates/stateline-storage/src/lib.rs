//! # stateline-storage
//!
//! SQLite persistence layer for the stateline engine.
//! Single write connection + read pool (WAL mode), strict identifier
//! allow-listing for the data-derived output schema, and one raw query
//! module per table family.

pub mod identifiers;
pub mod pool;
pub mod pragmas;
pub mod queries;

pub use pool::ConnectionPool;

use stateline_core::errors::{StateError, StorageError};

/// Helper to convert a string message into a StateError::Storage.
pub fn to_storage_err(msg: String) -> StateError {
    StateError::Storage(StorageError::SqliteError { message: msg })
}
