//! Dial raster — host-side dispatch of the per-pixel kernels over RGBA images.
//!
//! `dial-core` owns the kernels and tables. This crate owns the shared
//! context that hosts rebuild between frames and the loops that run kernels
//! over whole images, row-parallel where the random source allows it.

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;

pub use config::{RasterConfig, SourceKind};
pub use context::{KernelContext, SharedContext};
pub use dispatch::{
    map_image, pixels_mut, sparkle_image, transform_and_sparkle_image, transform_image,
};
pub use error::RasterError;
