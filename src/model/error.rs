use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("buffer shape {shape:?} does not match {len} values")]
    ShapeMismatch { shape: Vec<usize>, len: usize },

    #[error("RGB image must be [height, width, 3], found shape {0:?}")]
    NotRgb(Vec<usize>),

    #[error("pane id must not be empty")]
    EmptyPaneId,
}
