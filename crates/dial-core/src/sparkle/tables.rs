//! The six host-supplied sparkle lookup tables.
//!
//! Each table maps an input channel intensity to three pre-divided results
//! packed into one [`Pixel`]:
//!
//! | field | meaning                        | used when      |
//! |-------|--------------------------------|----------------|
//! | `r`   | `input + delta`, clamped       | 1 channel hit  |
//! | `g`   | `input + delta / 2`, clamped   | 2 channels hit |
//! | `b`   | `input + delta / 3`, clamped   | 3 channels hit |
//!
//! Tables A, B, C carry negative deltas (strong, moderate, weak); D, E, F
//! carry positive deltas (weak, moderate, strong).

use crate::error::KernelError;
use crate::pixel::Pixel;

use super::engine::{Polarity, Tier};

/// Number of entries in every lookup table.
pub const TABLE_LEN: usize = 256;

/// One 256-entry sparkle table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparkleTable([Pixel; TABLE_LEN]);

impl SparkleTable {
    /// Table that leaves every channel unchanged.
    pub fn identity() -> Self {
        Self::from_delta(0)
    }

    pub const fn from_array(entries: [Pixel; TABLE_LEN]) -> Self {
        Self(entries)
    }

    /// Copy a host-supplied slice. It must hold exactly 256 entries.
    pub fn from_entries(entries: &[Pixel]) -> Result<Self, KernelError> {
        let array: [Pixel; TABLE_LEN] =
            entries.try_into().map_err(|_| KernelError::TableLength {
                expected: TABLE_LEN,
                actual: entries.len(),
            })?;
        Ok(Self(array))
    }

    /// Derive a pre-clamped table from a signed delta.
    ///
    /// Convenience for hosts; the kernels only ever read tables.
    pub fn from_delta(delta: i16) -> Self {
        let shift = |i: usize, d: i16| (i as i32 + d as i32).clamp(0, 255) as u8;
        Self(std::array::from_fn(|i| {
            Pixel::new(shift(i, delta), shift(i, delta / 2), shift(i, delta / 3), 255)
        }))
    }

    /// Look up the entry for an input intensity.
    pub fn entry(&self, intensity: u8) -> Pixel {
        self.0[intensity as usize]
    }

    pub fn entries(&self) -> &[Pixel; TABLE_LEN] {
        &self.0
    }
}

impl Default for SparkleTable {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tables A–F.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparkleTables {
    /// Strong lowlight.
    pub a: SparkleTable,
    /// Moderate lowlight.
    pub b: SparkleTable,
    /// Weak lowlight.
    pub c: SparkleTable,
    /// Weak highlight.
    pub d: SparkleTable,
    /// Moderate highlight.
    pub e: SparkleTable,
    /// Strong highlight.
    pub f: SparkleTable,
}

impl SparkleTables {
    /// Build all six tables from unsigned magnitudes per tier.
    pub fn from_magnitudes(big: u8, moderate: u8, small: u8) -> Self {
        let (big, moderate, small) = (big as i16, moderate as i16, small as i16);
        Self {
            a: SparkleTable::from_delta(-big),
            b: SparkleTable::from_delta(-moderate),
            c: SparkleTable::from_delta(-small),
            d: SparkleTable::from_delta(small),
            e: SparkleTable::from_delta(moderate),
            f: SparkleTable::from_delta(big),
        }
    }

    /// Pick the table for a tier and polarity.
    pub fn select(&self, tier: Tier, polarity: Polarity) -> &SparkleTable {
        match (tier, polarity) {
            (Tier::Big, Polarity::Lowlight) => &self.a,
            (Tier::Moderate, Polarity::Lowlight) => &self.b,
            (Tier::Small, Polarity::Lowlight) => &self.c,
            (Tier::Small, Polarity::Highlight) => &self.d,
            (Tier::Moderate, Polarity::Highlight) => &self.e,
            (Tier::Big, Polarity::Highlight) => &self.f,
        }
    }
}
