//! Sparkle — randomized per-pixel channel highlights and lowlights.

pub mod engine;
pub mod source;
pub mod tables;

pub use engine::{ChannelSet, Polarity, SparkleDecision, Tier};
