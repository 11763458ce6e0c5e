//! Oklab → linear sRGB conversion.
//!
//! # Reference
//! Björn Ottosson, "A perceptual color space for image processing" (2020).
//!
//! ```text
//! l' = L + 0.3963377774a + 0.2158037573b
//! m' = L − 0.1055613458a − 0.0638541728b
//! s' = L − 0.0894841775a − 1.2914855480b
//! (l, m, s) = (l'³, m'³, s'³)
//! RGB = M₂ · (l, m, s)
//! ```

use glam::Vec3;
use palette::IntoColor;
use serde::{Deserialize, Serialize};

use super::color_space::ColorMatrix;
use super::transfer::{SrgbTransfer, TransferFunction};
use crate::pixel::Pixel;

/// Oklab → non-linear LMS'.
const OKLAB_TO_LMS: ColorMatrix = ColorMatrix::from_rows(
    [1.0, 0.396_337_777_4, 0.215_803_757_3],
    [1.0, -0.105_561_345_8, -0.063_854_172_8],
    [1.0, -0.089_484_177_5, -1.291_485_548_0],
);

/// Linear LMS → linear sRGB.
const LMS_TO_LINEAR_SRGB: ColorMatrix = ColorMatrix::from_rows(
    [4.076_741_662_1, -3.307_711_591_3, 0.230_969_929_2],
    [-1.268_438_004_6, 2.609_757_401_1, -0.341_319_396_5],
    [-0.004_196_086_3, -0.703_418_614_7, 1.707_614_701_0],
);

/// An Oklab color. `l` is in 0..1; `a` and `b` stay within about ±0.4 for
/// sRGB colors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Oklab {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 0.0, 0.0);

    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Linear interpolation: `t = 0` returns `self`, `t = 1` returns `other`.
    #[must_use]
    pub fn mix(self, other: Self, t: f32) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Convert an 8-bit sRGB triple to Oklab.
    pub fn from_srgb(rgb: [u8; 3]) -> Self {
        let lab: palette::Oklab = palette::Srgb::new(rgb[0], rgb[1], rgb[2])
            .into_format::<f32>()
            .into_color();
        Self::new(lab.l, lab.a, lab.b)
    }
}

/// Convert Oklab to linear sRGB. Components may fall outside [0, 1] for
/// out-of-gamut colors.
pub fn oklab_to_linear_srgb(lab: Oklab) -> Vec3 {
    let lms_ = OKLAB_TO_LMS.apply(Vec3::new(lab.l, lab.a, lab.b));
    LMS_TO_LINEAR_SRGB.apply(lms_ * lms_ * lms_)
}

/// Convert an Oklab color to an opaque 8-bit sRGB pixel.
///
/// Lightness at or below zero short-circuits to opaque black.
pub fn oklab_to_pixel(lab: Oklab) -> Pixel {
    if lab.l <= 0.0 {
        return Pixel::OPAQUE_BLACK;
    }
    Pixel::from_unit_rgb(SrgbTransfer.encode_rgb(oklab_to_linear_srgb(lab)))
}

/// Interpolate two sRGB colors through Oklab.
///
/// `d = 1` returns `color_a`, `d = 0` returns `color_b`; `d` is clamped to
/// [0, 1].
pub fn intermediate_color(color_a: [u8; 3], color_b: [u8; 3], d: f32) -> Pixel {
    let d = d.clamp(0.0, 1.0);
    oklab_to_pixel(Oklab::from_srgb(color_b).mix(Oklab::from_srgb(color_a), d))
}
