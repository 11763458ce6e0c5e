//! Per-pixel kernels — index mapping and palette transforms.

pub mod evaluate;
pub mod lut;
