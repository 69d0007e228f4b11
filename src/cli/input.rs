use std::fs::{self, File};
use std::path::Path;

use image::DynamicImage;
use serde_json::Value;
use tiff::decoder::{Decoder, DecodingResult};

use crate::dispatch::PlotData;
use crate::model::ImageBuffer;

/// Loads an image file as the buffer the display client expects.
///
/// Grayscale rasters become 2-D scalar fields (and go through the colormap),
/// everything else is converted to 3-D RGB bytes.
pub(super) fn read_image(path: &Path) -> Result<ImageBuffer, String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if matches!(extension.as_str(), "tif" | "tiff") {
        return read_tiff(path);
    }

    let image = image::open(path).map_err(|error| format!("{}: {error}", path.display()))?;
    let buffer = match image {
        DynamicImage::ImageLuma8(buffer) => {
            let (width, height) = buffer.dimensions();
            ImageBuffer::from_shape_vec(&[height as usize, width as usize], buffer.into_raw())
        }
        DynamicImage::ImageLuma16(buffer) => {
            let (width, height) = buffer.dimensions();
            ImageBuffer::from_shape_vec(&[height as usize, width as usize], buffer.into_raw())
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();
            ImageBuffer::from_shape_vec(&[height as usize, width as usize, 3], rgb.into_raw())
        }
    };
    buffer.map_err(|error| error.to_string())
}

fn read_tiff(path: &Path) -> Result<ImageBuffer, String> {
    let file = File::open(path).map_err(|error| format!("{}: {error}", path.display()))?;
    let mut decoder = Decoder::new(file).map_err(|error| error.to_string())?;
    let (width, height) = decoder.dimensions().map_err(|error| error.to_string())?;
    let shape = [height as usize, width as usize];
    let expected = shape[0] * shape[1];
    let check = |len: usize| {
        if len == expected {
            Ok(())
        } else {
            Err("TIFF RGB/alpha pages are not supported".to_string())
        }
    };

    let buffer = match decoder.read_image().map_err(|error| error.to_string())? {
        DecodingResult::U8(values) => {
            check(values.len())?;
            ImageBuffer::from_shape_vec(&shape, values)
        }
        DecodingResult::U16(values) => {
            check(values.len())?;
            ImageBuffer::from_shape_vec(&shape, values)
        }
        DecodingResult::F32(values) => {
            check(values.len())?;
            ImageBuffer::from_shape_vec(&shape, values)
        }
        DecodingResult::F64(values) => {
            check(values.len())?;
            ImageBuffer::from_shape_vec(&shape, values)
        }
        other => return Err(format!("unsupported TIFF sample type: {other:?}")),
    };
    buffer.map_err(|error| error.to_string())
}

/// Reads a JSON array of rows, e.g. `[[0, 0], [1, 1], [2, 4]]`.
pub(super) fn read_plot(path: &Path) -> Result<PlotData, String> {
    let raw = fs::read_to_string(path).map_err(|error| format!("{}: {error}", path.display()))?;
    let rows = serde_json::from_str::<Vec<Vec<Value>>>(&raw)
        .map_err(|error| format!("{}: expected a JSON array of rows: {error}", path.display()))?;
    Ok(PlotData::from_rows(rows))
}
