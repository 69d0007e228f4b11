mod codec;
mod data_uri;
mod error;
mod format;

#[cfg(test)]
mod tests;

pub use codec::{encode, encode_data_uri};
pub use data_uri::{MimeType, VALID_IMAGE_MIME_TYPES, is_valid_image_mime_type, package};
pub use error::{EncodeError, Result};
pub use format::ImageFormat;
