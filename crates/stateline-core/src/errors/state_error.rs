use super::{BuildError, StorageError};

/// Top-level error type for the stateline engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias.
pub type StateResult<T> = Result<T, StateError>;
