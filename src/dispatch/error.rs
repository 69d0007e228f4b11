use crate::config::ConfigError;
use crate::encode::EncodeError;
use crate::model::CoreError;
use crate::normalize::NormalizeError;
use crate::transport::TransportError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DisplayError>;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("invalid input: {0}")]
    Core(#[from] CoreError),

    #[error("normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("pane content serialization failed: {0}")]
    Content(#[from] serde_json::Error),
}
