//! Sparkle decision and application.
//!
//! One random value `v` drives every choice, checked in this order:
//!
//! ```text
//! tier      v % 17 == 0 → Big
//!           v % 11 == 0 → Moderate
//!           v %  5 == 0 → Small
//!           otherwise   → no sparkle
//! polarity  v % 2  : 1 → Lowlight (A/B/C), 0 → Highlight (F/E/D)
//! count     v % 13 : 0..=6 → 1 channel, 7..=10 → 2, 11..=12 → 3
//! channels  v % 3  : one    0 → R, 1 → G, 2 → B
//!                    two    0 → R+G, 1 → G+B, 2 → R+B
//! ```
//!
//! The tier checks form a priority chain on the same value, so the rates are
//! not the sum of 1/17, 1/11 and 1/5. The "no sparkle" rate is
//! `(16/17)(10/11)(4/5) ≈ 0.685`.

use serde::{Deserialize, Serialize};

use super::source::SparkleSource;
use super::tables::SparkleTables;
use crate::pixel::{Channel, Pixel};

/// Sparkle intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Big,
    Moderate,
    Small,
}

/// Whether the perturbation darkens or brightens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Lowlight,
    Highlight,
}

/// Which color channels a sparkle touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelSet {
    One(Channel),
    Two(Channel, Channel),
    Three,
}

impl ChannelSet {
    pub fn count(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(..) => 2,
            Self::Three => 3,
        }
    }

    pub fn contains(&self, channel: Channel) -> bool {
        match *self {
            Self::One(c) => c == channel,
            Self::Two(a, b) => a == channel || b == channel,
            Self::Three => channel != Channel::Alpha,
        }
    }
}

/// Everything decided from one random value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SparkleDecision {
    pub tier: Tier,
    pub polarity: Polarity,
    pub channels: ChannelSet,
}

/// Decode a random value. `None` means the pixel is left alone.
pub fn decide(value: u32) -> Option<SparkleDecision> {
    let tier = if value % 17 == 0 {
        Tier::Big
    } else if value % 11 == 0 {
        Tier::Moderate
    } else if value % 5 == 0 {
        Tier::Small
    } else {
        return None;
    };

    let polarity = if value % 2 == 1 {
        Polarity::Lowlight
    } else {
        Polarity::Highlight
    };

    let channels = match value % 13 {
        0..=6 => match value % 3 {
            0 => ChannelSet::One(Channel::Red),
            1 => ChannelSet::One(Channel::Green),
            _ => ChannelSet::One(Channel::Blue),
        },
        7..=10 => match value % 3 {
            0 => ChannelSet::Two(Channel::Red, Channel::Green),
            1 => ChannelSet::Two(Channel::Green, Channel::Blue),
            _ => ChannelSet::Two(Channel::Red, Channel::Blue),
        },
        _ => ChannelSet::Three,
    };

    Some(SparkleDecision { tier, polarity, channels })
}

/// Apply a decision to `input` using the matching table.
///
/// Each touched channel is replaced by the table entry for that channel's own
/// intensity, reading the field pre-divided for the channel count. Alpha is
/// never touched.
pub fn apply(decision: &SparkleDecision, tables: &SparkleTables, input: Pixel) -> Pixel {
    let table = tables.select(decision.tier, decision.polarity);
    let field = match decision.channels.count() {
        1 => Channel::Red,
        2 => Channel::Green,
        _ => Channel::Blue,
    };

    Channel::COLOR
        .into_iter()
        .filter(|&c| decision.channels.contains(c))
        .fold(input, |out, c| {
            let entry = table.entry(input.channel(c));
            out.with_channel(c, entry.channel(field))
        })
}

/// Evaluate the sparkle effect for one pixel.
pub fn sparkle<S>(tables: &SparkleTables, source: &mut S, input: Pixel, x: u32, y: u32) -> Pixel
where
    S: SparkleSource + ?Sized,
{
    match decide(source.next_value(x, y)) {
        Some(decision) => apply(&decision, tables, input),
        None => input,
    }
}
