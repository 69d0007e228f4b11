use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use super::EncodeError;

pub const VALID_IMAGE_MIME_TYPES: [&str; 5] = ["png", "gif", "bmp", "webp", "jpeg"];

/// `image/<subtype>` values the display server can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Png,
    Gif,
    Bmp,
    Webp,
    Jpeg,
}

impl MimeType {
    pub fn subtype(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Webp => "webp",
            Self::Jpeg => "jpeg",
        }
    }
}

impl FromStr for MimeType {
    type Err = EncodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "png" => Ok(Self::Png),
            "gif" => Ok(Self::Gif),
            "bmp" => Ok(Self::Bmp),
            "webp" => Ok(Self::Webp),
            "jpeg" => Ok(Self::Jpeg),
            other => Err(EncodeError::UnsupportedMimeType(other.to_string())),
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image/{}", self.subtype())
    }
}

pub fn is_valid_image_mime_type(value: &str) -> bool {
    VALID_IMAGE_MIME_TYPES.contains(&value)
}

/// Wraps encoded bytes as `data:image/<subtype>;base64,<payload>`.
pub fn package(bytes: &[u8], mime_type: MimeType) -> String {
    format!(
        "data:image/{};base64,{}",
        mime_type.subtype(),
        BASE64_STANDARD.encode(bytes)
    )
}
