//! Sparse table materialization configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the sparse table builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterializeConfig {
    /// Prefix for the derived output table name; the run id is appended
    /// as `{table_prefix}_{run_id}`.
    pub table_prefix: String,
}

impl Default for MaterializeConfig {
    fn default() -> Self {
        Self {
            table_prefix: "sparse_states".to_string(),
        }
    }
}
