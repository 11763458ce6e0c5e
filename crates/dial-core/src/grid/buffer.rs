//! Palette grid storage and sampling.

use serde::{Deserialize, Serialize};

use crate::error::KernelError;
use crate::pixel::Pixel;

/// Default grid width: one column per `channel / 4` step.
pub const DEFAULT_WIDTH: u32 = 64;
/// Default grid height: one row per `channel / 8` step.
pub const DEFAULT_HEIGHT: u32 = 32;

/// Which perceptual space a grid was synthesized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteSpace {
    Luv,
    Oklab,
}

/// A row-major `width × height` table of palette colors.
///
/// Always at least [`DEFAULT_WIDTH`] × [`DEFAULT_HEIGHT`], so any
/// `(channel / 4, channel / 8)` coordinate is in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteGrid {
    width: u32,
    height: u32,
    space: PaletteSpace,
    pixels: Vec<Pixel>,
}

impl PaletteGrid {
    /// Check that a grid of this size covers the 8-bit sampling domain.
    pub fn check_size(width: u32, height: u32) -> Result<(), KernelError> {
        if width < DEFAULT_WIDTH || height < DEFAULT_HEIGHT {
            return Err(KernelError::GridTooSmall {
                width,
                height,
                min_width: DEFAULT_WIDTH,
                min_height: DEFAULT_HEIGHT,
            });
        }
        Ok(())
    }

    /// Wrap precomputed pixels, validating size and length.
    pub fn from_pixels(
        width: u32,
        height: u32,
        space: PaletteSpace,
        pixels: Vec<Pixel>,
    ) -> Result<Self, KernelError> {
        Self::check_size(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(KernelError::GridLength {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, space, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn space(&self) -> PaletteSpace {
        self.space
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Row used by the sparkle transform: mid-lightness.
    pub fn mid_row(&self) -> u32 {
        self.height / 2
    }

    /// Read the color at `(x, y)`. Coordinates are clamped to the grid edge.
    pub fn sample(&self, x: u32, y: u32) -> Pixel {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        self.pixels[y * self.width as usize + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_rejects_small_grid() {
        let err = PaletteGrid::from_pixels(32, 32, PaletteSpace::Luv, vec![Pixel::default(); 1024])
            .unwrap_err();
        assert!(matches!(err, KernelError::GridTooSmall { width: 32, .. }));
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let err = PaletteGrid::from_pixels(64, 32, PaletteSpace::Oklab, vec![Pixel::default(); 10])
            .unwrap_err();
        assert_eq!(
            err,
            KernelError::GridLength { width: 64, height: 32, expected: 2048, actual: 10 }
        );
    }

    #[test]
    fn test_sample_is_row_major_and_clamped() {
        let pixels: Vec<Pixel> = (0..64 * 32)
            .map(|i: u32| Pixel::opaque((i % 64) as u8, (i / 64) as u8, 0))
            .collect();
        let grid = PaletteGrid::from_pixels(64, 32, PaletteSpace::Luv, pixels).unwrap();
        assert_eq!(grid.sample(5, 7), Pixel::opaque(5, 7, 0));
        assert_eq!(grid.sample(500, 500), Pixel::opaque(63, 31, 0));
        assert_eq!(grid.mid_row(), 16);
    }
}
