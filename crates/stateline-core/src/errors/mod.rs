mod build_error;
mod state_error;
mod storage_error;

pub use build_error::BuildError;
pub use state_error::{StateError, StateResult};
pub use storage_error::StorageError;
