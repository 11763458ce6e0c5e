use dial_core::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Kernel(#[from] KernelError),
    #[error("no palette prepared for the transform kernels")]
    MissingPalette,
    #[error("buffer of {len} bytes does not hold a {width}x{height} RGBA raster")]
    BufferSize { width: u32, height: u32, len: usize },
    #[error("invalid raster config: {0}")]
    Config(#[from] serde_json::Error),
}
