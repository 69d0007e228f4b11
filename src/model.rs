mod buffer;
mod dtype;
mod error;
mod pane;


pub use buffer::{Element, ImageBuffer, RgbImage};
pub use dtype::PixelType;
pub use error::{CoreError, Result};
pub use pane::{PaneId, PaneKind};
