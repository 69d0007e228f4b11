use ndarray::{Array, ArrayD};
use rayon::prelude::*;

use crate::model::RgbImage;

use super::{Colormap, NormalizeError, Result};

/// Linear `[vmin, vmax] -> [0, 1]` transform followed by a colormap lookup.
pub(crate) fn colorize(
    values: &ArrayD<f64>,
    vmin: Option<f64>,
    vmax: Option<f64>,
    clip: bool,
    cmap: Colormap,
) -> Result<RgbImage> {
    let shape = values.shape();
    let (height, width) = (shape[0], shape[1]);
    let (observed_min, observed_max) = finite_min_max(values).unwrap_or((0.0, 0.0));
    let vmin = vmin.unwrap_or(observed_min);
    let vmax = vmax.unwrap_or(observed_max);
    if !vmin.is_finite() || !vmax.is_finite() || vmin > vmax {
        return Err(NormalizeError::InvalidRange { vmin, vmax });
    }

    let samples = values.iter().copied().collect::<Vec<_>>();
    let mut bytes = vec![0_u8; samples.len() * 3];
    bytes
        .par_chunks_mut(3)
        .zip(samples.par_iter())
        .for_each(|(pixel, value)| {
            let color = cmap.lookup(scale(*value, vmin, vmax, clip));
            for (channel, component) in pixel.iter_mut().zip(color) {
                *channel = (component * 255.0) as u8;
            }
        });

    let data = Array::from_shape_vec((height, width, 3), bytes).expect("shape checked");
    Ok(RgbImage::new(data)?)
}

pub(crate) fn scale(value: f64, vmin: f64, vmax: f64, clip: bool) -> f64 {
    if value.is_nan() {
        return f64::NAN;
    }
    if vmin == vmax {
        return 0.0;
    }
    let normalized = (value - vmin) / (vmax - vmin);
    if clip {
        normalized.clamp(0.0, 1.0)
    } else {
        normalized
    }
}

fn finite_min_max(values: &ArrayD<f64>) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied().filter(|value| value.is_finite());
    let first = iter.next()?;
    let mut min = first;
    let mut max = first;
    for value in iter {
        min = min.min(value);
        max = max.max(value);
    }
    Some((min, max))
}
