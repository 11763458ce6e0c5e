//! Palette synthesis.
//!
//! For grid coordinate `(x, y)` on a `width × height` grid:
//!
//! ```text
//! t     = x / (width − 1)               column blend, A → B
//! m     = 1 − 2y / (height − 1)         +1 top row, −1 bottom row
//! color = mix(A, B, t)
//! color = mix(color, m > 0 ? white : black, |m| × k)
//! ```
//!
//! `k` is a fixed 0.15 for CIELUV. Oklab uses the configured dynamic range
//! and also clamps the column blend's lightness into the range window first.

use crate::color_management::luv::luv_to_pixel;
use crate::color_management::oklab::oklab_to_pixel;
use crate::color_management::{Luv, Oklab};
use crate::error::KernelError;
use crate::grid::buffer::{PaletteGrid, PaletteSpace};
use crate::grid::params::{LuvPaletteConfig, OklabPaletteConfig, PaletteSpec};
use crate::pixel::Pixel;

/// Lightness blend strength for CIELUV rows.
pub const LUV_LIGHTNESS_BLEND: f32 = 0.15;

/// Column blend factor in [0, 1].
fn column_fraction(x: u32, width: u32) -> f32 {
    x as f32 / (width.max(2) - 1) as f32
}

/// Row lightness modifier in [−1, 1]; positive rows lighten.
fn lightness_modifier(y: u32, height: u32) -> f32 {
    1.0 - 2.0 * y as f32 / (height.max(2) - 1) as f32
}

/// Compute one CIELUV palette entry.
pub fn luv_palette_pixel(
    config: &LuvPaletteConfig,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Pixel {
    let mixed = config.color_a.mix(config.color_b, column_fraction(x, width));
    let modifier = lightness_modifier(y, height);
    let target = if modifier > 0.0 { Luv::WHITE } else { Luv::BLACK };
    let color = mixed.mix(target, modifier.abs() * LUV_LIGHTNESS_BLEND);
    luv_to_pixel(color, &config.white)
}

/// Column blend of the two Oklab endpoints with L held inside the
/// dynamic-range window.
pub fn oklab_column_color(config: &OklabPaletteConfig, x: u32, width: u32) -> Oklab {
    let mut mixed = config.color_a.mix(config.color_b, column_fraction(x, width));
    let (lo, hi) = config.lightness_window();
    mixed.l = mixed.l.max(lo).min(hi);
    mixed
}

/// Compute one Oklab palette entry.
pub fn oklab_palette_pixel(
    config: &OklabPaletteConfig,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Pixel {
    let mixed = oklab_column_color(config, x, width);
    let modifier = lightness_modifier(y, height);
    let target = if modifier > 0.0 { Oklab::WHITE } else { Oklab::BLACK };
    let color = mixed.mix(target, modifier.abs() * config.range_fraction());
    oklab_to_pixel(color)
}

fn build(
    width: u32,
    height: u32,
    space: PaletteSpace,
    entry: impl Fn(u32, u32) -> Pixel,
) -> Result<PaletteGrid, KernelError> {
    PaletteGrid::check_size(width, height)?;
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| entry(x, y))
        .collect();
    tracing::debug!("generated {:?} palette grid {}x{}", space, width, height);
    PaletteGrid::from_pixels(width, height, space, pixels)
}

/// Materialize a CIELUV palette grid.
pub fn generate_luv_palette(
    config: &LuvPaletteConfig,
    width: u32,
    height: u32,
) -> Result<PaletteGrid, KernelError> {
    build(width, height, PaletteSpace::Luv, |x, y| {
        luv_palette_pixel(config, x, y, width, height)
    })
}

/// Materialize an Oklab palette grid.
pub fn generate_oklab_palette(
    config: &OklabPaletteConfig,
    width: u32,
    height: u32,
) -> Result<PaletteGrid, KernelError> {
    build(width, height, PaletteSpace::Oklab, |x, y| {
        oklab_palette_pixel(config, x, y, width, height)
    })
}

/// Materialize whichever palette `spec` describes.
pub fn generate_palette(
    spec: &PaletteSpec,
    width: u32,
    height: u32,
) -> Result<PaletteGrid, KernelError> {
    match spec {
        PaletteSpec::Luv(config) => generate_luv_palette(config, width, height),
        PaletteSpec::Oklab(config) => generate_oklab_palette(config, width, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::buffer::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use crate::grid::params::{prepare_luv_palette, prepare_oklab_palette};

    fn luma(px: Pixel) -> u32 {
        px.r as u32 + px.g as u32 + px.b as u32
    }

    #[test]
    fn test_luv_palette_is_deterministic() {
        let cfg = prepare_luv_palette([0, 128, 255], [255, 64, 0]);
        let a = generate_luv_palette(&cfg, 64, 32).unwrap();
        let b = generate_luv_palette(&cfg, 64, 32).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_oklab_palette_is_deterministic() {
        let cfg = prepare_oklab_palette([10, 200, 30], [90, 0, 160], 60.0);
        let a = generate_oklab_palette(&cfg, 64, 32).unwrap();
        let b = generate_oklab_palette(&cfg, 64, 32).unwrap();
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_generate_rejects_undersized_grid() {
        let cfg = prepare_luv_palette([0, 0, 0], [255, 255, 255]);
        assert!(generate_luv_palette(&cfg, 63, 32).is_err());
        assert!(generate_luv_palette(&cfg, 64, 31).is_err());
    }

    #[test]
    fn test_luv_rows_darken_toward_bottom() {
        let cfg = prepare_luv_palette([40, 160, 90], [200, 100, 30]);
        let grid = generate_luv_palette(&cfg, DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        for x in [0, 31, 63] {
            let top = luma(grid.sample(x, 0));
            let mid = luma(grid.sample(x, 16));
            let bottom = luma(grid.sample(x, 31));
            assert!(top > mid && mid > bottom, "column {x}: {top} {mid} {bottom}");
        }
    }

    #[test]
    fn test_luv_blue_to_red_corners() {
        let cfg = prepare_luv_palette([0, 0, 255], [255, 0, 0]);
        let grid = generate_luv_palette(&cfg, 64, 32).unwrap();

        let bottom_left = grid.sample(0, 31);
        assert!(bottom_left.b > 150, "{bottom_left}");
        assert!(bottom_left.r < 40 && bottom_left.g < 40, "{bottom_left}");
        assert!(bottom_left.b < 255);

        let top_right = grid.sample(63, 0);
        assert_eq!(top_right.r, 255, "{top_right}");
        assert!(top_right.g > 0 && top_right.g < 120, "{top_right}");
        assert!(top_right.b > 0 && top_right.b < 120, "{top_right}");
    }

    #[test]
    fn test_oklab_full_range_reaches_extremes() {
        let cfg = prepare_oklab_palette([0, 90, 200], [200, 40, 0], 100.0);
        let grid = generate_oklab_palette(&cfg, 64, 32).unwrap();
        for x in 0..64 {
            assert_eq!(grid.sample(x, 0), Pixel::OPAQUE_WHITE);
            assert_eq!(grid.sample(x, 31), Pixel::OPAQUE_BLACK);
        }
    }

    #[test]
    fn test_oklab_partial_range_clamps_column_lightness() {
        let cfg = prepare_oklab_palette([255, 255, 255], [0, 0, 0], 40.0);
        assert!((oklab_column_color(&cfg, 0, 64).l - 0.7).abs() < 1e-6);
        assert!((oklab_column_color(&cfg, 63, 64).l - 0.3).abs() < 1e-6);
        for x in 0..64 {
            let l = oklab_column_color(&cfg, x, 64).l;
            assert!((0.3 - 1e-6..=0.7 + 1e-6).contains(&l), "column {x}: L={l}");
        }
    }

    #[test]
    fn test_oklab_partial_range_grid_stays_near_window() {
        let cfg = prepare_oklab_palette([255, 255, 255], [0, 0, 0], 40.0);
        let grid = generate_oklab_palette(&cfg, 64, 32).unwrap();
        let lightness = |x, y| Oklab::from_srgb(grid.sample(x, y).rgb()).l;

        // Rows next to the middle barely move off the clamped column color.
        let near_top = lightness(0, 15);
        let near_bottom = lightness(63, 16);
        assert!((0.69..0.715).contains(&near_top), "L={near_top}");
        assert!((0.285..0.305).contains(&near_bottom), "L={near_bottom}");

        // Full rows blend at most 40% of the way toward white or black.
        for &px in grid.pixels() {
            let l = Oklab::from_srgb(px.rgb()).l;
            assert!((0.17..=0.83).contains(&l), "{px}: L={l}");
        }
    }

    #[test]
    fn test_oklab_zero_range_is_flat_mid_lightness() {
        let cfg = prepare_oklab_palette([0, 0, 0], [255, 255, 255], 0.0);
        let grid = generate_oklab_palette(&cfg, 64, 32).unwrap();
        let reference = grid.sample(0, 0);
        for &px in grid.pixels() {
            assert_eq!(px, reference);
        }
    }

    #[test]
    fn test_generate_palette_dispatches_on_space() {
        let spec = PaletteSpec::Luv(prepare_luv_palette([1, 2, 3], [4, 5, 6]));
        let grid = generate_palette(&spec, 64, 32).unwrap();
        assert_eq!(grid.space(), PaletteSpace::Luv);
    }
}
