pub mod cli;
pub mod config;
pub mod dispatch;
pub mod encode;
pub mod model;
pub mod normalize;
pub mod transport;

pub use config::DisplayConfig;
pub use dispatch::{
    Display, DisplayError, FigureOptions, ImageOptions, PlotData, PlotOptions, TextOptions,
};
pub use encode::{ImageFormat, MimeType};
pub use model::{ImageBuffer, PaneId, PaneKind};
pub use normalize::{Colormap, NormalizeOptions};

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
