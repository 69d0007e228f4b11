mod colormap;
mod error;
mod pipeline;
mod rgb;
mod scalar;


pub use colormap::Colormap;
pub use error::{NormalizeError, Result};
pub use pipeline::{NormalizeOptions, normalize};
