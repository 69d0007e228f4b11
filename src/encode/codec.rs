use std::io::Cursor;

use image::DynamicImage;

use crate::model::RgbImage;

use super::{EncodeError, ImageFormat, Result, package};

pub fn encode(image: &RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let width = u32::try_from(image.width())
        .map_err(|_| EncodeError::Layout(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| EncodeError::Layout(format!("height {} too large", image.height())))?;
    let buffer = image::RgbImage::from_raw(width, height, image.as_bytes().to_vec())
        .ok_or_else(|| EncodeError::Layout("failed to construct RGB image".into()))?;

    let mut encoded = Vec::new();
    let mut cursor = Cursor::new(&mut encoded);
    DynamicImage::ImageRgb8(buffer).write_to(&mut cursor, format.into())?;
    Ok(encoded)
}

/// Encodes and packages in one step, yielding the `src` of an image pane.
pub fn encode_data_uri(image: &RgbImage, format: ImageFormat) -> Result<String> {
    let bytes = encode(image, format)?;
    Ok(package(&bytes, format.mime_type()))
}
