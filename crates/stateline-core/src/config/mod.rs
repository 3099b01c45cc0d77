pub mod materialize_config;
pub mod storage_config;

use serde::{Deserialize, Serialize};

pub use materialize_config::MaterializeConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatelineConfig {
    pub storage: StorageConfig,
    pub materialize: MaterializeConfig,
}

impl StatelineConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
