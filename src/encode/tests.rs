use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ndarray::{Array, Array2};

use crate::model::{ImageBuffer, RgbImage};
use crate::normalize::{NormalizeOptions, normalize};

use super::{
    EncodeError, ImageFormat, MimeType, encode, encode_data_uri, is_valid_image_mime_type,
    package,
};

fn gradient() -> RgbImage {
    let values = (0..4 * 5 * 3).map(|value| (value * 4) as u8).collect::<Vec<_>>();
    RgbImage::new(Array::from_shape_vec((4, 5, 3), values).expect("shape")).expect("rgb")
}

fn is_data_uri(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };
    let Some((subtype, payload)) = rest.split_once(";base64,") else {
        return false;
    };
    matches!(subtype, "jpeg" | "png")
        && !payload.is_empty()
        && payload
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
}

#[test]
fn format_names_and_alias() {
    assert_eq!("jpg".parse::<ImageFormat>().expect("jpg"), ImageFormat::Jpeg);
    assert_eq!("JPEG".parse::<ImageFormat>().expect("jpeg"), ImageFormat::Jpeg);
    assert_eq!("png".parse::<ImageFormat>().expect("png"), ImageFormat::Png);
    assert_eq!(ImageFormat::default(), ImageFormat::Jpeg);
    assert_eq!(ImageFormat::Jpeg.mime_type(), MimeType::Jpeg);
}

#[test]
fn tiff_encoding_is_unsupported() {
    let err = "tiff".parse::<ImageFormat>().expect_err("tiff");
    assert!(matches!(err, EncodeError::UnsupportedFormat(ref name) if name == "tiff"));
}

#[test]
fn png_is_lossless() {
    let image = gradient();
    let bytes = encode(&image, ImageFormat::Png).expect("png");
    assert_eq!(&bytes[1..4], b"PNG");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgb8();
    assert_eq!(decoded.dimensions(), (5, 4));
    assert_eq!(decoded.as_raw().as_slice(), image.as_bytes());
}

#[test]
fn jpeg_keeps_dimensions() {
    let bytes = encode(&gradient(), ImageFormat::Jpeg).expect("jpeg");
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    let decoded = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((decoded.width(), decoded.height()), (5, 4));
}

#[test]
fn package_builds_data_uri() {
    assert_eq!(package(b"abc", MimeType::Png), "data:image/png;base64,YWJj");
    assert_eq!(package(&[], MimeType::Gif), "data:image/gif;base64,");
}

#[test]
fn full_pipeline_yields_data_uri() {
    let field = Array2::from_shape_fn((8, 8), |(y, x)| (y * 8 + x) as f64);
    let normalized =
        normalize(&ImageBuffer::from(field), &NormalizeOptions::default()).expect("normalize");
    for format in [ImageFormat::Jpeg, ImageFormat::Png] {
        let uri = encode_data_uri(&normalized, format).expect("encode");
        assert!(is_data_uri(&uri), "unexpected data URI: {uri}");
        assert!(uri.starts_with(&format!("data:image/{format};")));
        let payload = uri.split_once(",").expect("payload").1;
        let bytes = STANDARD.decode(payload).expect("base64");
        assert!(image::load_from_memory(&bytes).is_ok());
    }
}

#[test]
fn mime_types_are_validated() {
    for subtype in ["png", "gif", "bmp", "webp", "jpeg"] {
        assert!(is_valid_image_mime_type(subtype));
        assert_eq!(
            subtype.parse::<MimeType>().expect("mime").subtype(),
            subtype
        );
    }
    assert!(!is_valid_image_mime_type("jpg"));
    assert!(!is_valid_image_mime_type("tiff"));
    assert!(matches!(
        "svg+xml".parse::<MimeType>(),
        Err(EncodeError::UnsupportedMimeType(_))
    ));
    assert_eq!(MimeType::Webp.to_string(), "image/webp");
}
