//! Palette configurations prepared from host endpoint colors.
//!
//! A configuration is an immutable value. Preparing a new one replaces the
//! old; nothing here is process-wide.

use serde::{Deserialize, Serialize};

use crate::color_management::{Luv, Oklab, WhiteReference};

/// Endpoints for a CIELUV palette, plus the cached white-point chromaticity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LuvPaletteConfig {
    /// Left-hand column color.
    pub color_a: Luv,
    /// Right-hand column color.
    pub color_b: Luv,
    /// Recomputed every time the endpoints are prepared.
    #[serde(default)]
    pub white: WhiteReference,
}

/// Endpoints for an Oklab palette and its lightness dynamic range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OklabPaletteConfig {
    /// Left-hand column color.
    pub color_a: Oklab,
    /// Right-hand column color.
    pub color_b: Oklab,
    /// Lightness dynamic range in percent, nominally [0, 100]. Not validated.
    pub dynamic_range: f32,
}

impl OklabPaletteConfig {
    /// Dynamic range as a fraction.
    pub fn range_fraction(&self) -> f32 {
        self.dynamic_range * 0.01
    }

    /// Lightness window `[0.5 − r/2, 0.5 + r/2]` applied to mixed colors.
    pub fn lightness_window(&self) -> (f32, f32) {
        let half = self.range_fraction() * 0.5;
        (0.5 - half, 0.5 + half)
    }
}

/// Either palette configuration, tagged for JSON round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "snake_case")]
pub enum PaletteSpec {
    Luv(LuvPaletteConfig),
    Oklab(OklabPaletteConfig),
}

/// Convert two sRGB endpoints to CIELUV and refresh the white reference.
pub fn prepare_luv_palette(color_a: [u8; 3], color_b: [u8; 3]) -> LuvPaletteConfig {
    LuvPaletteConfig {
        color_a: Luv::from_srgb(color_a),
        color_b: Luv::from_srgb(color_b),
        white: WhiteReference::d65(),
    }
}

/// Convert two sRGB endpoints to Oklab and record the dynamic range.
pub fn prepare_oklab_palette(
    color_a: [u8; 3],
    color_b: [u8; 3],
    dynamic_range: f32,
) -> OklabPaletteConfig {
    OklabPaletteConfig {
        color_a: Oklab::from_srgb(color_a),
        color_b: Oklab::from_srgb(color_b),
        dynamic_range,
    }
}
