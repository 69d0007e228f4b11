use crate::model::{CoreError, PixelType};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("image should be 2 (gray) or 3 (rgb) dimensional: {0}")]
    InvalidShape(String),

    #[error("only uint8 or float for 3-channel images, found {0}")]
    UnsupportedDtype(PixelType),

    #[error("vmin ({vmin}) and vmax ({vmax}) must be finite with vmin <= vmax")]
    InvalidRange { vmin: f64, vmax: f64 },

    #[error("unknown colormap: {0}")]
    UnknownColormap(String),

    #[error("normalized image construction failed: {0}")]
    Core(#[from] CoreError),
}
