use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

use crate::InternalResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Name attached to every log event the counter emits.
    #[serde(default = "default_label")]
    pub label: String,

    #[serde(default = "default_true")]
    pub trace_operations: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            trace_operations: default_true(),
        }
    }
}

impl CounterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }

    pub fn with_label<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {message}")]
    Io { path: String, message: String },
    #[error("Failed to parse config: {message}")]
    Parse { message: String },
}

pub fn from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })?;
    Ok(config)
}

pub fn from_str<T: DeserializeOwned>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })?;
    Ok(config)
}

fn default_label() -> String {
    "counter".to_string()
}

fn default_true() -> bool {
    true
}
