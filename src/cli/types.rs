use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "disp",
    version,
    about = "Send image, text and plot panes to a display server"
)]
pub(super) struct Cli {
    /// Config file (JSON or YAML). Defaults to ~/.display/config.json.
    #[arg(long, global = true)]
    pub(super) config: Option<PathBuf>,
    #[arg(long, global = true)]
    pub(super) host: Option<String>,
    #[arg(long, global = true)]
    pub(super) port: Option<u16>,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Args)]
pub(super) struct PaneArgs {
    /// Pane id to reuse; a new pane is created when omitted.
    #[arg(long)]
    pub(super) win: Option<String>,
    #[arg(long)]
    pub(super) title: Option<String>,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    Text {
        text: String,
        #[command(flatten)]
        pane: PaneArgs,
    },
    /// Sends a PNG, JPEG or single-page TIFF file.
    Image {
        input: PathBuf,
        #[command(flatten)]
        pane: PaneArgs,
        #[arg(long, default_value = "jpeg")]
        encoding: String,
        #[arg(long)]
        to_bgr: bool,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long, value_delimiter = ',')]
        labels: Vec<String>,
        #[arg(long, default_value = "jet")]
        cmap: String,
        #[arg(long, allow_negative_numbers = true)]
        vmin: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        vmax: Option<f64>,
        #[arg(long)]
        clip: bool,
    },
    /// Sends a JSON file holding rows of numbers as a line plot.
    Plot {
        input: PathBuf,
        #[command(flatten)]
        pane: PaneArgs,
        #[arg(long, value_delimiter = ',')]
        labels: Vec<String>,
    },
    /// Fills panes w0..w3 with a plot, a text and two images.
    Sanity,
}

#[derive(Debug, Serialize, PartialEq)]
pub(super) struct SentPane {
    pub(super) kind: String,
    pub(super) id: String,
}
