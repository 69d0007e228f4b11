use thiserror::Error;

pub type Result<T> = std::result::Result<T, EncodeError>;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unsupported image encoding: {0} (expected jpeg, jpg or png)")]
    UnsupportedFormat(String),

    #[error("unsupported image MIME type: image/{0}")]
    UnsupportedMimeType(String),

    #[error("image encode failure: {0}")]
    Encoding(#[from] image::ImageError),

    #[error("pixel buffer does not fit the image layout: {0}")]
    Layout(String),
}
