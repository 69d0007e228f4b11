use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransportError>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("display server at {url} answered with status {code}")]
    Status { url: String, code: u16 },

    #[error("command serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}
