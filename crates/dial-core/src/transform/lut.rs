//! 256-entry index table for recoloring single-channel bitmaps.

use crate::error::KernelError;
use crate::pixel::Pixel;
use crate::sparkle::tables::TABLE_LEN;

/// Direct lookup from a byte index to an output color.
///
/// Built from packed 32-bit ARGB colors; rebuilt whenever the packed source
/// changes. Rebuilding takes `&mut self`, so readers cannot observe a partly
/// rebuilt table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTable {
    entries: [Pixel; TABLE_LEN],
}

impl IndexTable {
    /// Unpack 256 ARGB colors one-to-one.
    pub fn from_packed(packed: &[u32; TABLE_LEN]) -> Self {
        Self {
            entries: std::array::from_fn(|i| Pixel::from_argb(packed[i])),
        }
    }

    /// Like [`IndexTable::from_packed`] for an unchecked slice.
    pub fn from_packed_slice(packed: &[u32]) -> Result<Self, KernelError> {
        let packed: &[u32; TABLE_LEN] =
            packed.try_into().map_err(|_| KernelError::TableLength {
                expected: TABLE_LEN,
                actual: packed.len(),
            })?;
        Ok(Self::from_packed(packed))
    }

    /// Replace every entry from a new packed array.
    pub fn rebuild(&mut self, packed: &[u32; TABLE_LEN]) {
        for (entry, &argb) in self.entries.iter_mut().zip(packed) {
            *entry = Pixel::from_argb(argb);
        }
        tracing::debug!("index table rebuilt from {} packed colors", TABLE_LEN);
    }

    pub fn entry(&self, index: u8) -> Pixel {
        self.entries[index as usize]
    }

    pub fn entries(&self) -> &[Pixel; TABLE_LEN] {
        &self.entries
    }

    /// Substitute the entry selected by the input's blue channel.
    ///
    /// Red, green and alpha of the input are ignored; the entry's own alpha
    /// is returned.
    pub fn map(&self, input: Pixel) -> Pixel {
        self.entries[input.b as usize]
    }

    /// Recolor a whole bitmap in place.
    ///
    /// Indexes by blue like [`IndexTable::map`], not by the first byte in
    /// memory (red for RGBA8), so whole-bitmap and per-pixel recolors agree.
    pub fn map_in_place(&self, pixels: &mut [Pixel]) {
        for px in pixels {
            *px = self.map(*px);
        }
    }
}

impl Default for IndexTable {
    /// Grayscale ramp: index `i` maps to opaque `(i, i, i)`.
    fn default() -> Self {
        Self {
            entries: std::array::from_fn(|i| Pixel::opaque(i as u8, i as u8, i as u8)),
        }
    }
}
