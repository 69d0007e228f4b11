use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::NormalizeError;

const LUT_SIZE: usize = 256;

type Lut = [[f64; 3]; LUT_SIZE];

/// Piecewise-linear channel description: `(x, value)` anchors sorted by `x`.
type Segment = &'static [(f64, f64)];

const JET: [Segment; 3] = [
    &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    &[
        (0.0, 0.0),
        (0.125, 0.0),
        (0.375, 1.0),
        (0.64, 1.0),
        (0.91, 0.0),
        (1.0, 0.0),
    ],
    &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
];

const HOT: [Segment; 3] = [
    &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
    &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
    &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
];

const GRAY: [Segment; 3] = [
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
];

const COOL: [Segment; 3] = [
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 1.0), (1.0, 0.0)],
    &[(0.0, 1.0), (1.0, 1.0)],
];

/// Named scalar-to-RGB mapping used for two-dimensional buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Jet,
    Gray,
    Hot,
    Cool,
}

impl Colormap {
    pub const ALL: [Colormap; 4] = [Self::Jet, Self::Gray, Self::Hot, Self::Cool];

    pub fn name(self) -> &'static str {
        match self {
            Self::Jet => "jet",
            Self::Gray => "gray",
            Self::Hot => "hot",
            Self::Cool => "cool",
        }
    }

    /// Maps a normalized scalar to RGB in `[0, 1]`.
    ///
    /// Values below 0 take the first table entry and values above 1 the last.
    /// NaN maps to black.
    pub fn lookup(self, value: f64) -> [f64; 3] {
        if value.is_nan() {
            return [0.0; 3];
        }
        let index = if value <= 0.0 {
            0
        } else {
            ((value * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1)
        };
        self.lut()[index]
    }

    fn segments(self) -> &'static [Segment; 3] {
        match self {
            Self::Jet => &JET,
            Self::Gray => &GRAY,
            Self::Hot => &HOT,
            Self::Cool => &COOL,
        }
    }

    fn lut(self) -> &'static Lut {
        static JET_LUT: OnceLock<Lut> = OnceLock::new();
        static GRAY_LUT: OnceLock<Lut> = OnceLock::new();
        static HOT_LUT: OnceLock<Lut> = OnceLock::new();
        static COOL_LUT: OnceLock<Lut> = OnceLock::new();
        let cell = match self {
            Self::Jet => &JET_LUT,
            Self::Gray => &GRAY_LUT,
            Self::Hot => &HOT_LUT,
            Self::Cool => &COOL_LUT,
        };
        cell.get_or_init(|| build_lut(self.segments()))
    }
}

fn build_lut(segments: &[Segment; 3]) -> Lut {
    let mut lut = [[0.0; 3]; LUT_SIZE];
    for (index, entry) in lut.iter_mut().enumerate() {
        let x = index as f64 / (LUT_SIZE - 1) as f64;
        for (channel, segment) in segments.iter().enumerate() {
            entry[channel] = interpolate(segment, x);
        }
    }
    lut
}

fn interpolate(segment: Segment, x: f64) -> f64 {
    for pair in segment.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 - x0 <= f64::EPSILON {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    segment.last().map(|(_, y)| *y).unwrap_or(0.0)
}

impl FromStr for Colormap {
    type Err = NormalizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|map| map.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| NormalizeError::UnknownColormap(value.to_string()))
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
