//! Kernel entry points — one call per output pixel.
//!
//! Every kernel takes its lookup tables by reference and returns a new pixel.
//! `map_bitmap` and `generate_transform` are pure. The sparkle kernels are
//! pure too when driven by a [`CoordinateHash`]; with a sequential source
//! they depend on evaluation order.
//!
//! [`CoordinateHash`]: crate::sparkle::source::CoordinateHash

use std::sync::Arc;

use crate::grid::buffer::PaletteGrid;
use crate::pixel::Pixel;
use crate::sparkle::engine;
use crate::sparkle::source::SparkleSource;
use crate::sparkle::tables::SparkleTables;
use crate::transform::lut::IndexTable;

/// Divisor turning the gradient channel into a palette column (0..=63).
pub const GRADIENT_DIVISOR: u8 = 4;
/// Divisor turning the texture channel into a palette row (0..=31).
pub const TEXTURE_DIVISOR: u8 = 8;

/// A generated palette grid handed back as the live transform source.
#[derive(Debug, Clone)]
pub struct PaletteTransform {
    grid: Arc<PaletteGrid>,
}

impl PaletteTransform {
    pub fn grid(&self) -> &PaletteGrid {
        &self.grid
    }

    /// Column for an input pixel: gradient channel (red) / 4.
    pub fn column(input: Pixel) -> u32 {
        (input.r / GRADIENT_DIVISOR) as u32
    }

    /// Row for an input pixel: texture channel (green) / 8.
    pub fn row(input: Pixel) -> u32 {
        (input.g / TEXTURE_DIVISOR) as u32
    }
}

/// Install a generated grid as the palette for the transform kernels.
pub fn prepare_transform(grid: impl Into<Arc<PaletteGrid>>) -> PaletteTransform {
    let grid = grid.into();
    tracing::debug!(
        "prepared {:?} transform over {}x{} grid",
        grid.space(),
        grid.width(),
        grid.height()
    );
    PaletteTransform { grid }
}

/// Recolor by blue-channel index.
pub fn map_bitmap(table: &IndexTable, input: Pixel) -> Pixel {
    table.map(input)
}

/// Randomly highlight or lowlight channels of `input`.
pub fn sparkle<S>(tables: &SparkleTables, source: &mut S, input: Pixel, x: u32, y: u32) -> Pixel
where
    S: SparkleSource + ?Sized,
{
    engine::sparkle(tables, source, input, x, y)
}

/// Sample the palette at (gradient / 4, texture / 8).
pub fn generate_transform(transform: &PaletteTransform, input: Pixel) -> Pixel {
    transform
        .grid
        .sample(PaletteTransform::column(input), PaletteTransform::row(input))
}

/// Sample the palette's mid-lightness row at gradient / 4, then sparkle.
pub fn generate_transform_and_sparkle<S>(
    transform: &PaletteTransform,
    tables: &SparkleTables,
    source: &mut S,
    input: Pixel,
    x: u32,
    y: u32,
) -> Pixel
where
    S: SparkleSource + ?Sized,
{
    let grid = &transform.grid;
    let sampled = grid.sample(PaletteTransform::column(input), grid.mid_row());
    engine::sparkle(tables, source, sampled, x, y)
}
