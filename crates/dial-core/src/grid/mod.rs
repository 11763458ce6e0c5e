//! Palette grids — 2D lookup tables synthesized in CIELUV or Oklab.
//!
//! Columns interpolate between two endpoint colors; rows fade toward white
//! (top) or black (bottom).

pub mod buffer;
pub mod generate;
pub mod params;
