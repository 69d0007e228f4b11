mod client;
mod command;
mod error;
mod options;
mod plot;


pub use client::Display;
pub use command::{Command, PANE_COMMAND};
pub use error::{DisplayError, Result};
pub use options::{FigureOptions, ImageOptions, PlotOptions, TextOptions};
pub use plot::PlotData;
