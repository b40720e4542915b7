use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::runner::SimOpts;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Optional JSON sweep configuration; absent fields take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Simulator parameters; any subset of [`SimOpts`] fields.
    #[serde(default)]
    pub sim: SimOpts,
    /// Intensities to sweep, in order.
    #[serde(default)]
    pub speeds: Option<Vec<u32>>,
    /// Payload length in flits.
    #[serde(default)]
    pub payload_flits: Option<u32>,
    /// Seed for the traffic RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BenchConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}
