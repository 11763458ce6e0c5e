//! 3x3 matrix transforms between linear color spaces.

use glam::{Mat3, Vec3};

/// A 3x3 color matrix for linear color space conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub Mat3);

impl ColorMatrix {
    /// Build a matrix from its rows as printed in the reference tables.
    pub const fn from_rows(r0: [f32; 3], r1: [f32; 3], r2: [f32; 3]) -> Self {
        Self(Mat3::from_cols(
            Vec3::new(r0[0], r1[0], r2[0]),
            Vec3::new(r0[1], r1[1], r2[1]),
            Vec3::new(r0[2], r1[2], r2[2]),
        ))
    }

    /// Returns the identity matrix (no-op transform).
    pub const fn identity() -> Self {
        Self(Mat3::IDENTITY)
    }

    /// Apply this matrix to a triplet.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        self.0 * v
    }
}

/// CIE XYZ (D65, Y normalized to 1) → linear sRGB.
pub const XYZ_TO_LINEAR_SRGB: ColorMatrix = ColorMatrix::from_rows(
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
);

/// Convert XYZ on the 0..100 scale to linear sRGB.
pub fn xyz_to_linear_srgb(xyz: Vec3) -> Vec3 {
    XYZ_TO_LINEAR_SRGB.apply(xyz / 100.0)
}
