//! Dispatch configuration.

use serde::{Deserialize, Serialize};

use crate::error::RasterError;

/// Seed used when `DIAL_SPARKLE_SEED` is unset or unparsable.
const DEFAULT_SPARKLE_SEED: u64 = 0x0D1A_15EED;

/// Which random source drives the sparkle kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Stateless hash of `(x, y, seed)`; any evaluation order.
    #[default]
    Hashed,
    /// Chained xorshift stream; row-major, single thread.
    Sequential,
}

/// Runtime configuration for image dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Seed for either sparkle source.
    pub sparkle_seed: u64,
    pub source: SourceKind,
    /// Split rows across the rayon pool.
    pub parallel: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            sparkle_seed: std::env::var("DIAL_SPARKLE_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SPARKLE_SEED),
            source: SourceKind::default(),
            parallel: std::env::var("DIAL_PARALLEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl RasterConfig {
    /// Parse a JSON config. Missing fields fall back to [`Default`].
    pub fn from_json(json: &str) -> Result<Self, RasterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether sparkle passes may run rows in parallel.
    ///
    /// Only the hashed source is order independent.
    pub fn sparkle_parallel(&self) -> bool {
        self.parallel && self.source == SourceKind::Hashed
    }
}
