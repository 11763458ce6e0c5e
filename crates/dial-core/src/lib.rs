//! Dial Core — per-pixel kernels for watch-face bitmaps.
//!
//! This crate contains the color science, palette synthesis, index mapping
//! and sparkle effect. Kernels are pure functions over [`Pixel`] values and
//! borrowed lookup tables; no threading or image I/O lives here.

pub mod color_management;
pub mod error;
pub mod grid;
pub mod pixel;
pub mod sparkle;
pub mod transform;

// Re-exports for convenience.
pub use error::KernelError;
pub use grid::buffer::{PaletteGrid, PaletteSpace};
pub use grid::generate::{generate_luv_palette, generate_oklab_palette, generate_palette};
pub use grid::params::{
    prepare_luv_palette, prepare_oklab_palette, LuvPaletteConfig, OklabPaletteConfig, PaletteSpec,
};
pub use pixel::{Channel, Pixel};
pub use sparkle::engine::SparkleDecision;
pub use sparkle::source::{CoordinateHash, SparkleSource, XorShiftStream};
pub use sparkle::tables::{SparkleTable, SparkleTables};
pub use transform::evaluate::{
    generate_transform, generate_transform_and_sparkle, map_bitmap, prepare_transform, sparkle,
    PaletteTransform,
};
pub use transform::lut::IndexTable;
