use std::path::Path;

use clap::Parser;

use crate::config::DisplayConfig;
use crate::dispatch::{Display, ImageOptions, PlotOptions, TextOptions};
use crate::encode::ImageFormat;
use crate::model::{PaneId, PaneKind};
use crate::normalize::{Colormap, NormalizeOptions};

use super::input::{read_image, read_plot};
use super::sanity::run_sanity;
use super::types::{Cli, Commands, SentPane};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.host, cli.port)?;
    let display = Display::new(&config);

    let sent = match cli.command {
        Commands::Text { text, pane } => {
            let options = TextOptions {
                win: parse_win(pane.win)?,
                title: pane.title,
            };
            let id = display
                .text(&text, &options)
                .map_err(|error| error.to_string())?;
            vec![(PaneKind::Text, id)]
        }
        Commands::Image {
            input,
            pane,
            encoding,
            to_bgr,
            width,
            labels,
            cmap,
            vmin,
            vmax,
            clip,
        } => {
            let options = ImageOptions {
                win: parse_win(pane.win)?,
                title: pane.title,
                labels: non_empty(labels),
                width,
                encoding: encoding
                    .parse::<ImageFormat>()
                    .map_err(|error| error.to_string())?,
                normalize: NormalizeOptions {
                    vmin,
                    vmax,
                    clip,
                    cmap: cmap
                        .parse::<Colormap>()
                        .map_err(|error| error.to_string())?,
                    to_bgr,
                },
            };
            let buffer = read_image(&input)?;
            let id = display
                .image(&buffer, &options)
                .map_err(|error| error.to_string())?;
            vec![(PaneKind::Image, id)]
        }
        Commands::Plot {
            input,
            pane,
            labels,
        } => {
            let options = PlotOptions {
                win: parse_win(pane.win)?,
                title: pane.title,
                labels: non_empty(labels),
                ..PlotOptions::default()
            };
            let data = read_plot(&input)?;
            let id = display
                .plot(data, &options)
                .map_err(|error| error.to_string())?;
            vec![(PaneKind::Plot, id)]
        }
        Commands::Sanity => run_sanity(&display).map_err(|error| error.to_string())?,
    };

    let sent = sent
        .into_iter()
        .map(|(kind, id)| SentPane {
            kind: kind.to_string(),
            id: id.to_string(),
        })
        .collect::<Vec<_>>();
    println!(
        "{}",
        serde_json::to_string_pretty(&sent).map_err(|error| error.to_string())?
    );
    Ok(())
}

pub(super) fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<DisplayConfig, String> {
    let mut config = match path {
        Some(path) => DisplayConfig::from_path(path),
        None => DisplayConfig::load(),
    }
    .map_err(|error| error.to_string())?;
    if let Some(host) = host {
        config = config.with_hostname(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    Ok(config)
}

pub(super) fn parse_win(win: Option<String>) -> Result<Option<PaneId>, String> {
    win.map(PaneId::new)
        .transpose()
        .map_err(|error| error.to_string())
}

fn non_empty(labels: Vec<String>) -> Option<Vec<String>> {
    if labels.is_empty() {
        None
    } else {
        Some(labels)
    }
}
