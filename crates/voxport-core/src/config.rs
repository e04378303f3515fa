use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config invalid at {path:?}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Sidecar metadata record written next to a packaged model.
///
/// Every field is optional on read: the reader does flat key lookup and
/// tolerates hand-edited files with missing or unknown keys. Packaging
/// always writes all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub sampling_rate: Option<f64>,
    #[serde(default)]
    pub hop_size: Option<u32>,
    #[serde(default)]
    pub mel_bins: Option<u32>,
    #[serde(default)]
    pub window_size: Option<u32>,
    #[serde(default)]
    pub expected_inputs: Vec<String>,
    #[serde(default)]
    pub expected_outputs: Vec<String>,
}

impl ModelConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

/// Split a comma-separated name list, trimming tokens and dropping empty
/// ones. `None` and all-whitespace input both yield an empty list.
pub fn parse_name_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// User-supplied names win over graph-derived defaults, per direction.
/// An empty or whitespace-only override falls back to the defaults.
pub fn resolve_names(override_raw: Option<&str>, graph_names: Vec<String>) -> Vec<String> {
    let parsed = parse_name_list(override_raw);
    if parsed.is_empty() {
        graph_names
    } else {
        parsed
    }
}
