use std::fs::{self, File};
use std::sync::Mutex;

use clap::Parser;
use image::{ImageBuffer as RasterBuffer, Luma, Rgb};
use serde_json::json;
use tempfile::tempdir;
use tiff::encoder::{TiffEncoder, colortype};

use crate::dispatch::{Command, Display};
use crate::model::{PaneKind, PixelType};
use crate::transport::{Result as TransportResult, Transport};

use super::input::{read_image, read_plot};
use super::runner::{parse_win, resolve_config};
use super::sanity::run_sanity;
use super::types::{Cli, Commands};

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<Command>>,
}

impl Transport for RecordingTransport {
    fn send(&self, command: &Command) -> TransportResult<bool> {
        self.sent.lock().expect("lock").push(command.clone());
        Ok(true)
    }
}

#[test]
fn rgb_png_reads_as_three_channels() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("color.png");
    let mut raster = RasterBuffer::<Rgb<u8>, Vec<u8>>::new(2, 1);
    raster.put_pixel(0, 0, Rgb([255, 0, 0]));
    raster.put_pixel(1, 0, Rgb([0, 255, 0]));
    raster.save(&path).expect("save png");

    let buffer = read_image(&path).expect("read");
    assert_eq!(buffer.shape(), &[1, 2, 3]);
    assert_eq!(buffer.pixel_type(), PixelType::U8);
}

#[test]
fn gray_png_reads_as_scalar_field() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("gray.png");
    RasterBuffer::<Luma<u8>, Vec<u8>>::from_vec(2, 2, vec![0, 50, 100, 255])
        .expect("raster")
        .save(&path)
        .expect("save png");
    let buffer = read_image(&path).expect("read");
    assert_eq!(buffer.shape(), &[2, 2]);
}

#[test]
fn float_tiff_reads_as_scalar_field() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("field.tiff");
    let file = File::create(&path).expect("create");
    let mut encoder = TiffEncoder::new(file).expect("encoder");
    encoder
        .write_image::<colortype::Gray32Float>(3, 2, &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5])
        .expect("write tiff");

    let buffer = read_image(&path).expect("read");
    assert_eq!(buffer.shape(), &[2, 3]);
    assert_eq!(buffer.pixel_type(), PixelType::F32);
}

#[test]
fn plot_file_rows_keep_json_numbers() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plot.json");
    fs::write(&path, "[[0, 0], [1, 1], [2, 4]]").expect("write");
    let data = read_plot(&path).expect("plot");
    assert_eq!(data.into_value(), json!([[0, 0], [1, 1], [2, 4]]));

    fs::write(&path, r#"{"not": "rows"}"#).expect("write");
    assert!(read_plot(&path).is_err());
}

#[test]
fn overrides_apply_on_top_of_config_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"hostname": "viz", "port": 9000}"#).expect("write");
    let config = resolve_config(Some(&path), None, Some(9100)).expect("config");
    assert_eq!(config.display_url(), "http://viz:9100/events");
}

#[test]
fn empty_win_is_rejected() {
    assert!(parse_win(Some(String::new())).is_err());
    assert_eq!(parse_win(None).expect("none"), None);
    assert_eq!(
        parse_win(Some("w3".into())).expect("id").expect("some").as_str(),
        "w3"
    );
}

#[test]
fn image_command_parses_options() {
    let cli = Cli::try_parse_from([
        "disp", "--port", "9000", "image", "in.png", "--win", "w2", "--encoding", "png",
        "--labels", "a,b", "--vmin", "-1", "--clip",
    ])
    .expect("parse");
    assert_eq!(cli.port, Some(9000));
    match cli.command {
        Commands::Image {
            pane,
            encoding,
            labels,
            vmin,
            clip,
            to_bgr,
            ..
        } => {
            assert_eq!(pane.win.as_deref(), Some("w2"));
            assert_eq!(encoding, "png");
            assert_eq!(labels, vec!["a", "b"]);
            assert_eq!(vmin, Some(-1.0));
            assert!(clip);
            assert!(!to_bgr);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn sanity_fills_four_panes() {
    let display = Display::with_transport(RecordingTransport::default());
    let sent = run_sanity(&display).expect("sanity");
    let ids = sent
        .iter()
        .map(|(_, id)| id.as_str().to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["w0", "w1", "w2", "w3"]);
    assert_eq!(sent[0].0, PaneKind::Plot);

    let commands = display.transport().sent.lock().expect("lock").clone();
    assert_eq!(commands.len(), 4);
    assert_eq!(commands[0].content["file"][3], json!([3, 9]));
    assert_eq!(commands[1].content, json!("foo"));
    assert_eq!(commands[3].title.as_deref(), Some("red image"));
}
