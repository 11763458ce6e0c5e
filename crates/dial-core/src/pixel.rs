//! Byte-quad pixel type shared by every kernel.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// One of the four 8-bit channels of a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// The three color channels in storage order.
    pub const COLOR: [Self; 3] = [Self::Red, Self::Green, Self::Blue];
}

/// A 4-channel RGBA pixel, one byte per channel.
///
/// Laid out as `[r, g, b, a]` so a `&mut [u8]` RGBA8 buffer can be viewed as
/// `&mut [Pixel]` without copying.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Opaque black, `{0, 0, 0, 255}`.
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white, `{255, 255, 255, 255}`.
    pub const OPAQUE_WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Unpack a 32-bit ARGB color: byte 3 → A, byte 2 → R, byte 1 → G, byte 0 → B.
    pub const fn from_argb(packed: u32) -> Self {
        Self {
            a: ((packed >> 24) & 0xff) as u8,
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Inverse of [`Pixel::from_argb`].
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Quantize a normalized sRGB triple to an opaque pixel.
    ///
    /// Each component is clamped to [0, 1], scaled by 255 and rounded. NaN
    /// components saturate to 0.
    pub fn from_unit_rgb(rgb: [f32; 3]) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Self::opaque(q(rgb[0]), q(rgb[1]), q(rgb[2]))
    }

    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    /// Copy of `self` with one channel replaced.
    #[must_use]
    pub const fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
            Channel::Alpha => self.a = value,
        }
        self
    }

    fn zip(self, other: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b), f(self.a, other.a))
    }

    /// Per-channel clamp into `[lo, hi]`.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    #[must_use]
    pub fn min(self, other: Self) -> Self {
        self.zip(other, u8::min)
    }

    #[must_use]
    pub fn max(self, other: Self) -> Self {
        self.zip(other, u8::max)
    }

    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        self.zip(other, u8::saturating_add)
    }

    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        self.zip(other, u8::saturating_sub)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(p: Pixel) -> Self {
        [p.r, p.g, p.b, p.a]
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}
