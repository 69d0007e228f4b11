use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config JSON parse failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config YAML parse failure: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid port in config: {0}")]
    InvalidPort(String),
}
