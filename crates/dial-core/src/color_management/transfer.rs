//! Linear light → 8-bit-ready sRGB encoding.

use glam::Vec3;

/// Encoding applied to linear RGB before quantization.
pub trait TransferFunction: Send + Sync {
    /// Encode one linear component.
    fn to_encoded(&self, linear: f32) -> f32;

    fn encode_rgb(&self, linear: Vec3) -> [f32; 3] {
        linear.to_array().map(|c| self.to_encoded(c))
    }
}

/// The IEC 61966-2-1 curve: a 12.92 slope below 0.0031308, then a 1/2.4
/// power segment. Negative input stays on the slope and goes negative.
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl TransferFunction for SrgbTransfer {
    fn to_encoded(&self, linear: f32) -> f32 {
        if linear <= 0.003_130_8 {
            linear * 12.92
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        }
    }
}
