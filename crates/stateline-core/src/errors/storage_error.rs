//! Storage-layer errors for SQLite operations.

/// Errors from the SQLite persistence layer. Propagated to the caller
/// unmodified; a failed build is never retried internally.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    SqliteError { message: String },

    #[error("connection lock poisoned: {message}")]
    LockPoisoned { message: String },

    #[error("unparseable timestamp in source table: {value}")]
    InvalidTimestamp { value: String },
}
