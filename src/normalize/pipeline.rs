use crate::model::{ImageBuffer, RgbImage};

use super::rgb::to_rgb8;
use super::scalar::colorize;
use super::{Colormap, NormalizeError, Result};

/// Settings for turning an [`ImageBuffer`] into an [`RgbImage`].
///
/// `vmin`, `vmax`, `clip` and `cmap` only affect two-dimensional buffers.
/// `to_bgr` defaults to `false`: the encoder expects RGB order, so the swap is
/// only useful when the receiving side wants BGR.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeOptions {
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    pub clip: bool,
    pub cmap: Colormap,
    pub to_bgr: bool,
}

pub fn normalize(buffer: &ImageBuffer, options: &NormalizeOptions) -> Result<RgbImage> {
    let shape = buffer.shape();
    if shape.contains(&0) {
        return Err(NormalizeError::InvalidShape(format!(
            "zero-sized axis in shape {shape:?}"
        )));
    }

    let mut image = match shape.len() {
        2 => colorize(
            &buffer.to_f64(),
            options.vmin,
            options.vmax,
            options.clip,
            options.cmap,
        )?,
        3 if shape[2] == 3 => to_rgb8(buffer)?,
        3 => {
            return Err(NormalizeError::InvalidShape(format!(
                "3-dimensional images need 3 channels, found shape {shape:?}"
            )));
        }
        _ => {
            return Err(NormalizeError::InvalidShape(format!(
                "found shape {shape:?}"
            )));
        }
    };

    if options.to_bgr {
        image.swap_channels();
    }
    Ok(image)
}
