//! Kernel tables and the rebuild-then-read barrier around them.

use dial_core::sparkle::tables::TABLE_LEN;
use dial_core::{
    generate_palette, prepare_transform, IndexTable, KernelError, PaletteSpec, PaletteTransform,
    SparkleTables,
};
use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::RasterError;

/// Everything a kernel pass reads.
#[derive(Debug, Clone, Default)]
pub struct KernelContext {
    pub index: IndexTable,
    pub sparkle: SparkleTables,
    /// Unset until a palette has been prepared.
    pub transform: Option<PaletteTransform>,
}

impl KernelContext {
    pub fn transform(&self) -> Result<&PaletteTransform, RasterError> {
        self.transform.as_ref().ok_or(RasterError::MissingPalette)
    }
}

/// A [`KernelContext`] shared between one host writer and many readers.
///
/// Rebuilds take the write lock, so a pass holding [`SharedContext::read`]
/// never sees a half-written table.
#[derive(Debug, Default)]
pub struct SharedContext {
    inner: RwLock<KernelContext>,
}

impl SharedContext {
    pub fn new(context: KernelContext) -> Self {
        Self {
            inner: RwLock::new(context),
        }
    }

    /// Rebuild the index table from 256 packed ARGB colors.
    pub fn rebuild_index(&self, packed: &[u32]) -> Result<(), RasterError> {
        let packed: &[u32; TABLE_LEN] =
            packed.try_into().map_err(|_| KernelError::TableLength {
                expected: TABLE_LEN,
                actual: packed.len(),
            })?;
        self.inner.write().index.rebuild(packed);
        Ok(())
    }

    pub fn set_sparkle_tables(&self, tables: SparkleTables) {
        self.inner.write().sparkle = tables;
        tracing::info!("sparkle tables replaced");
    }

    /// Generate a palette grid and install it as the live transform.
    ///
    /// The grid is built before the write lock is taken.
    pub fn prepare_palette(
        &self,
        spec: &PaletteSpec,
        width: u32,
        height: u32,
    ) -> Result<(), RasterError> {
        let transform = prepare_transform(generate_palette(spec, width, height)?);
        self.inner.write().transform = Some(transform);
        tracing::info!("palette {}x{} installed", width, height);
        Ok(())
    }

    pub fn read(&self) -> RwLockReadGuard<'_, KernelContext> {
        self.inner.read()
    }

    /// Clone the current tables out of the lock.
    pub fn snapshot(&self) -> KernelContext {
        self.inner.read().clone()
    }
}
