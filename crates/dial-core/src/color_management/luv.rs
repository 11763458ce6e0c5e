//! CIELUV ↔ XYZ ↔ sRGB conversions.
//!
//! The inverse path follows the CIE 1976 definitions:
//!
//! ```text
//! fy = (L + 16) / 116
//! Y  = fy³                      if fy > 6/29
//!      (fy − 16/116) × 3(6/29)²  otherwise
//! u' = u / (13L) + ref_U
//! v' = v / (13L) + ref_V
//! X  = 9Y u' / (4 v')
//! Z  = (9Y − 15 v' Y − v' X) / (3 v')
//! ```
//!
//! There is no guard for `L = 0`: the division produces NaN,
//! which the pixel quantizer saturates to 0. Palette lightness never reaches
//! zero unless an endpoint is pure black.

use glam::Vec3;
use palette::IntoColor;
use serde::{Deserialize, Serialize};

use super::color_space::xyz_to_linear_srgb;
use super::transfer::{SrgbTransfer, TransferFunction};
use crate::pixel::Pixel;

/// CIE `ε` expressed in the `f(Y)` domain.
const DELTA: f32 = 6.0 / 29.0;

/// Reference white and its derived `u'`/`v'` chromaticity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhiteReference {
    /// Tristimulus X on the 0..100 scale.
    pub x: f32,
    /// Tristimulus Y on the 0..100 scale.
    pub y: f32,
    /// Tristimulus Z on the 0..100 scale.
    pub z: f32,
    pub ref_u: f32,
    pub ref_v: f32,
}

impl WhiteReference {
    /// D65 illuminant, 2° observer.
    pub fn d65() -> Self {
        Self::from_tristimulus(95.047, 100.0, 108.883)
    }

    pub fn from_tristimulus(x: f32, y: f32, z: f32) -> Self {
        let denom = x + 15.0 * y + 3.0 * z;
        Self {
            x,
            y,
            z,
            ref_u: 4.0 * x / denom,
            ref_v: 9.0 * y / denom,
        }
    }
}

impl Default for WhiteReference {
    fn default() -> Self {
        Self::d65()
    }
}

/// A CIELUV color. `l` is in 0..100; `u` and `v` are unbounded but stay
/// within roughly ±180 for sRGB colors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Luv {
    pub l: f32,
    pub u: f32,
    pub v: f32,
}

impl Luv {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(100.0, 0.0, 0.0);

    pub const fn new(l: f32, u: f32, v: f32) -> Self {
        Self { l, u, v }
    }

    /// Linear interpolation: `t = 0` returns `self`, `t = 1` returns `other`.
    #[must_use]
    pub fn mix(self, other: Self, t: f32) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            u: self.u + (other.u - self.u) * t,
            v: self.v + (other.v - self.v) * t,
        }
    }

    /// Convert an 8-bit sRGB triple to CIELUV (D65).
    pub fn from_srgb(rgb: [u8; 3]) -> Self {
        let luv: palette::Luv = palette::Srgb::new(rgb[0], rgb[1], rgb[2])
            .into_format::<f32>()
            .into_color();
        Self::new(luv.l, luv.u, luv.v)
    }
}

/// Invert CIELUV to XYZ on the 0..100 scale.
pub fn luv_to_xyz(luv: Luv, white: &WhiteReference) -> Vec3 {
    let fy = (luv.l + 16.0) / 116.0;
    let var_y = if fy > DELTA {
        fy * fy * fy
    } else {
        (fy - 16.0 / 116.0) * 3.0 * DELTA * DELTA
    };
    let y = var_y * white.y;

    let var_u = luv.u / (13.0 * luv.l) + white.ref_u;
    let var_v = luv.v / (13.0 * luv.l) + white.ref_v;

    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    Vec3::new(x, y, z)
}

/// Convert a CIELUV color to an opaque 8-bit sRGB pixel.
pub fn luv_to_pixel(luv: Luv, white: &WhiteReference) -> Pixel {
    let linear = xyz_to_linear_srgb(luv_to_xyz(luv, white));
    Pixel::from_unit_rgb(SrgbTransfer.encode_rgb(linear))
}

/// Interpolate two sRGB colors through CIELUV.
///
/// `d = 1` returns `color_a`, `d = 0` returns `color_b`; `d` is clamped to
/// [0, 1].
pub fn intermediate_color(color_a: [u8; 3], color_b: [u8; 3], d: f32) -> Pixel {
    let d = d.clamp(0.0, 1.0);
    let mixed = Luv::from_srgb(color_b).mix(Luv::from_srgb(color_a), d);
    luv_to_pixel(mixed, &WhiteReference::d65())
}
