use ndarray::{ArrayD, Ix3};

use crate::model::{Element, ImageBuffer, RgbImage};

use super::{NormalizeError, Result};

/// Three-channel path: floats are taken as `[0, 1]`, bytes pass through.
pub(crate) fn to_rgb8(buffer: &ImageBuffer) -> Result<RgbImage> {
    let bytes = match buffer {
        ImageBuffer::U8(data) => data.clone(),
        ImageBuffer::F32(data) => scale_unit(data),
        ImageBuffer::F64(data) => scale_unit(data),
        other => return Err(NormalizeError::UnsupportedDtype(other.pixel_type())),
    };
    let bytes = bytes
        .into_dimensionality::<Ix3>()
        .expect("dimensionality checked");
    Ok(RgbImage::new(bytes)?)
}

fn scale_unit<T: Element>(data: &ArrayD<T>) -> ArrayD<u8> {
    // NaN saturates to 0 in the cast.
    data.mapv(|value| (value.to_f64() * 255.0).clamp(0.0, 255.0) as u8)
}
