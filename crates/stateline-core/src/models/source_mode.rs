//! Source selection for a build.

use serde::{Deserialize, Serialize};

/// Which source table a build reads from. Exactly one mode per builder;
/// the caller picks it explicitly at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMode {
    /// Dense interval table `(entity_id, state, start_time, end_time)`.
    Dense { table: String },
    /// Event table `(entity_id, event_time, outcome)`.
    Events { table: String },
}

impl SourceMode {
    /// The source table name, whichever mode is configured.
    pub fn table(&self) -> &str {
        match self {
            SourceMode::Dense { table } => table,
            SourceMode::Events { table } => table,
        }
    }
}
