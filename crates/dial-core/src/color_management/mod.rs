//! Color management — sRGB transfer, XYZ/CIELUV/Oklab/Lab conversions.
//!
//! Inverse conversions (perceptual → 8-bit sRGB pixel) are implemented here
//! from the published constants. Forward conversions of host endpoint colors
//! go through the `palette` crate.

pub mod color_space;
pub mod lab;
pub mod luv;
pub mod oklab;
pub mod transfer;

pub use lab::{blend_argb, intermediate_argb};
pub use luv::{Luv, WhiteReference};
pub use oklab::Oklab;
