//! ARGB color interpolation through CIE Lab (D50).
//!
//! Both endpoints go sRGB → XYZ (D65) → Bradford → XYZ (D50) → Lab. The mix
//! happens there, alpha included, and the result takes the reverse path.
//!
//! # Reference
//! Lindbloom, Bruce J. "Chromatic Adaptation", Bradford D65 ↔ D50 matrices.

use glam::Vec3;
use palette::white_point::{D50, D65};
use palette::{FromColor, Lab, Srgb, Xyz};

use super::color_space::ColorMatrix;
use crate::pixel::Pixel;

/// Bradford adaptation, XYZ D65 → XYZ D50.
pub const BRADFORD_D65_TO_D50: ColorMatrix = ColorMatrix::from_rows(
    [1.047_811_2, 0.022_886_6, -0.050_127_0],
    [0.029_542_4, 0.990_484_4, -0.017_049_1],
    [-0.009_234_5, 0.015_043_6, 0.752_131_6],
);

/// Bradford adaptation, XYZ D50 → XYZ D65.
pub const BRADFORD_D50_TO_D65: ColorMatrix = ColorMatrix::from_rows(
    [0.955_576_6, -0.023_039_3, 0.063_163_6],
    [-0.028_289_5, 1.009_941_6, 0.021_007_7],
    [0.012_298_2, -0.020_483_0, 1.329_909_8],
);

/// Convert an 8-bit sRGB triple to Lab relative to D50.
pub fn srgb_to_lab(rgb: [u8; 3]) -> Lab<D50, f32> {
    let srgb = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format::<f32>();
    let xyz = Xyz::<D65, f32>::from_color(srgb);
    let adapted = BRADFORD_D65_TO_D50.apply(Vec3::new(xyz.x, xyz.y, xyz.z));
    Lab::from_color(Xyz::<D50, f32>::new(adapted.x, adapted.y, adapted.z))
}

/// Convert D50 Lab back to 8-bit sRGB, clamping out-of-gamut results.
pub fn lab_to_srgb(lab: Lab<D50, f32>) -> [u8; 3] {
    let xyz = Xyz::<D50, f32>::from_color(lab);
    let adapted = BRADFORD_D50_TO_D65.apply(Vec3::new(xyz.x, xyz.y, xyz.z));
    let rgb: Srgb<u8> =
        Srgb::<f32>::from_color(Xyz::<D65, f32>::new(adapted.x, adapted.y, adapted.z))
            .into_format();
    [rgb.red, rgb.green, rgb.blue]
}

/// Interpolate two packed ARGB colors in Lab.
///
/// `d` is the weight of `color_a` and is clamped to [0, 1]: `d = 1` returns
/// `color_a`, `d = 0` returns `color_b`. Alpha mixes linearly with the same
/// weights and is rounded.
pub fn intermediate_argb(color_a: u32, color_b: u32, d: f32) -> u32 {
    let d = d.clamp(0.0, 1.0);
    let e = 1.0 - d;
    let (pa, pb) = (Pixel::from_argb(color_a), Pixel::from_argb(color_b));
    let (la, lb) = (srgb_to_lab(pa.rgb()), srgb_to_lab(pb.rgb()));

    let mixed = Lab::<D50, f32>::new(
        la.l * d + lb.l * e,
        la.a * d + lb.a * e,
        la.b * d + lb.b * e,
    );
    let [r, g, b] = lab_to_srgb(mixed);
    let alpha = (pa.a as f32 * d + pb.a as f32 * e + 0.5) as u8;
    Pixel::new(r, g, b, alpha).to_argb()
}

/// Per-channel sRGB interpolation with truncation, no color conversion.
///
/// Same weighting as [`intermediate_argb`]; for hosts that want the cheap
/// blend.
pub fn blend_argb(color_a: u32, color_b: u32, d: f32) -> u32 {
    let d = d.clamp(0.0, 1.0);
    let e = 1.0 - d;
    let (pa, pb) = (Pixel::from_argb(color_a), Pixel::from_argb(color_b));
    let mix = |x: u8, y: u8| (x as f32 * d + y as f32 * e) as u8;
    Pixel::new(mix(pa.r, pb.r), mix(pa.g, pb.g), mix(pa.b, pb.b), mix(pa.a, pb.a)).to_argb()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_argb_close(got: u32, want: u32, tol: u8) {
        let (g, w) = (Pixel::from_argb(got), Pixel::from_argb(want));
        for (x, y) in <[u8; 4]>::from(g).into_iter().zip(<[u8; 4]>::from(w)) {
            assert!(x.abs_diff(y) <= tol, "{g} vs {w}");
        }
    }

    #[test]
    fn test_bradford_matrices_are_inverse() {
        let v = Vec3::new(0.3, 0.6, 0.9);
        let back = BRADFORD_D50_TO_D65.apply(BRADFORD_D65_TO_D50.apply(v));
        assert!((back - v).abs().max_element() < 1e-4, "{back:?}");
    }

    #[test]
    fn test_lab_roundtrip_within_one_level() {
        for rgb in [[255, 0, 0], [0, 255, 0], [0, 0, 255], [128, 64, 32], [255, 255, 255]] {
            let back = lab_to_srgb(srgb_to_lab(rgb));
            for (x, y) in back.into_iter().zip(rgb) {
                assert!(x.abs_diff(y) <= 1, "{rgb:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn test_intermediate_argb_endpoints() {
        let a = 0xFF_C8_1E_28;
        let b = 0x40_0A_5A_DC;
        assert_argb_close(intermediate_argb(a, b, 1.0), a, 1);
        assert_argb_close(intermediate_argb(a, b, 0.0), b, 1);
        assert_eq!(intermediate_argb(a, b, 3.0), intermediate_argb(a, b, 1.0));
        assert_eq!(intermediate_argb(a, b, -1.0), intermediate_argb(a, b, 0.0));
    }

    #[test]
    fn test_intermediate_argb_midpoint_is_lab_gray_with_mixed_alpha() {
        // Opaque white and transparent black meet at L* = 50, sRGB ≈ 119.
        let px = Pixel::from_argb(intermediate_argb(0xFF_FF_FF_FF, 0x00_00_00_00, 0.5));
        assert_eq!(px.a, 128);
        assert!(px.r.abs_diff(px.g) <= 1 && px.g.abs_diff(px.b) <= 1, "{px}");
        assert!((117..=121).contains(&px.g), "{px}");
    }

    #[test]
    fn test_blend_argb_truncates() {
        let px = Pixel::from_argb(blend_argb(0xFF_FF_FF_FF, 0x00_00_00_00, 0.5));
        assert_eq!(px, Pixel::new(127, 127, 127, 127));
    }
}
