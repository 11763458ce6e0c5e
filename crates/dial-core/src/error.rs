//! Errors raised while building lookup tables.
//!
//! Kernels themselves are total; only constructors that take host-supplied
//! slices or grid sizes can fail.

/// Shape errors for host-supplied tables and palette grids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    #[error("lookup table needs {expected} entries, got {actual}")]
    TableLength { expected: usize, actual: usize },
    #[error(
        "palette grid {width}x{height} does not cover the {min_width}x{min_height} sampling domain"
    )]
    GridTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    #[error("palette grid {width}x{height} expects {expected} pixels, got {actual}")]
    GridLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
