use ndarray::{Array, Array3, ArrayD, Axis, Dimension, IxDyn};

use super::{CoreError, PixelType, Result};

/// Raw numeric array handed to the display client, tagged with its element type.
///
/// Two-dimensional buffers are treated as scalar fields, three-dimensional
/// buffers as `[height, width, channel]` RGB images. The shape is checked by
/// the normalizer, not here, so any array can be wrapped.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageBuffer {
    U8(ArrayD<u8>),
    U16(ArrayD<u16>),
    I16(ArrayD<i16>),
    I32(ArrayD<i32>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

/// Numeric types that can back an [`ImageBuffer`].
pub trait Element: Copy + Send + Sync + 'static {
    fn wrap(data: ArrayD<Self>) -> ImageBuffer;
    fn to_f64(self) -> f64;
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            fn wrap(data: ArrayD<Self>) -> ImageBuffer {
                ImageBuffer::$variant(data)
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_element!(u8, U8);
impl_element!(u16, U16);
impl_element!(i16, I16);
impl_element!(i32, I32);
impl_element!(f32, F32);
impl_element!(f64, F64);

impl<T: Element, D: Dimension> From<Array<T, D>> for ImageBuffer {
    fn from(data: Array<T, D>) -> Self {
        T::wrap(data.into_dyn())
    }
}

macro_rules! each_variant {
    ($buffer:expr, $data:ident => $body:expr) => {
        match $buffer {
            ImageBuffer::U8($data) => $body,
            ImageBuffer::U16($data) => $body,
            ImageBuffer::I16($data) => $body,
            ImageBuffer::I32($data) => $body,
            ImageBuffer::F32($data) => $body,
            ImageBuffer::F64($data) => $body,
        }
    };
}

impl ImageBuffer {
    pub fn from_shape_vec<T: Element>(shape: &[usize], values: Vec<T>) -> Result<Self> {
        let len = values.len();
        let data = Array::from_shape_vec(IxDyn(shape), values).map_err(|_| {
            CoreError::ShapeMismatch {
                shape: shape.to_vec(),
                len,
            }
        })?;
        Ok(T::wrap(data))
    }

    pub fn pixel_type(&self) -> PixelType {
        match self {
            Self::U8(_) => PixelType::U8,
            Self::U16(_) => PixelType::U16,
            Self::I16(_) => PixelType::I16,
            Self::I32(_) => PixelType::I32,
            Self::F32(_) => PixelType::F32,
            Self::F64(_) => PixelType::F64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        each_variant!(self, data => data.shape())
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Widens every element to `f64`, keeping the shape.
    pub fn to_f64(&self) -> ArrayD<f64> {
        each_variant!(self, data => data.mapv(Element::to_f64))
    }
}

/// Canonical normalized image: `[height, width, 3]` bytes in standard layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    data: Array3<u8>,
}

impl RgbImage {
    pub fn new(data: Array3<u8>) -> Result<Self> {
        if data.shape()[2] != 3 {
            return Err(CoreError::NotRgb(data.shape().to_vec()));
        }
        Ok(Self {
            data: data.as_standard_layout().into_owned(),
        })
    }

    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn pixel(&self, y: usize, x: usize) -> [u8; 3] {
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        ]
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    /// Interleaved RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        self.data
            .as_slice()
            .expect("RgbImage is always kept in standard layout")
    }

    /// Reverses the channel axis in place (RGB becomes BGR).
    pub fn swap_channels(&mut self) {
        self.data.invert_axis(Axis(2));
        self.data = self.data.as_standard_layout().into_owned();
    }
}
