//! Random value sources for the sparkle engine.
//!
//! [`CoordinateHash`] derives each value from `(x, y, seed)` alone, so pixels
//! can be evaluated in any order or in parallel and still come out the same.
//! [`XorShiftStream`] is the chained xorshift128 generator with coordinate
//! mixing; its output depends on evaluation order and it must be driven from
//! one thread in a fixed pixel order.

/// Produces one 32-bit value per pixel evaluation.
pub trait SparkleSource {
    /// Draw the value for the pixel at `(x, y)`.
    fn next_value(&mut self, x: u32, y: u32) -> u32;

    /// Whether values depend only on coordinates (safe to evaluate in parallel).
    fn is_order_independent(&self) -> bool;
}

/// Stateless splitmix64-style hash of pixel coordinates and a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoordinateHash {
    seed: u64,
}

impl CoordinateHash {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Hash `(x, y)` under this seed.
    pub const fn value(&self, x: u32, y: u32) -> u32 {
        let key = ((x as u64) << 32) | y as u64;
        (splitmix64(self.seed ^ key.wrapping_mul(0x9E37_79B9_7F4A_7C15)) >> 32) as u32
    }
}

impl SparkleSource for CoordinateHash {
    fn next_value(&mut self, x: u32, y: u32) -> u32 {
        self.value(x, y)
    }

    fn is_order_independent(&self) -> bool {
        true
    }
}

/// splitmix64 finalizer (Steele, Lea & Flood 2014).
const fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Chained xorshift128 with pixel coordinates folded into each step.
///
/// ```text
/// t  = r0 ^ (r0 << 11)
/// t += (x << 23) + (y << 17)
/// r0 ← r1, r1 ← r2, r2 ← r3
/// r3 = r3 ^ (r3 >> 19) ^ t ^ (t >> 8)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftStream {
    state: [u32; 4],
}

impl XorShiftStream {
    /// Marsaglia's reference seed words.
    pub const DEFAULT_STATE: [u32; 4] = [123_456_789, 362_436_069, 521_288_629, 88_675_123];

    pub const fn from_state(state: [u32; 4]) -> Self {
        Self { state }
    }

    /// Expand a 64-bit seed into the four state words.
    ///
    /// Falls back to [`Self::DEFAULT_STATE`] in the (practically unreachable)
    /// all-zero case, which would otherwise lock the generator at zero.
    pub fn seeded(seed: u64) -> Self {
        let a = splitmix64(seed);
        let b = splitmix64(a);
        let state = [a as u32, (a >> 32) as u32, b as u32, (b >> 32) as u32];
        if state == [0; 4] {
            return Self::default();
        }
        Self { state }
    }

    pub const fn state(&self) -> [u32; 4] {
        self.state
    }
}

impl Default for XorShiftStream {
    fn default() -> Self {
        Self::from_state(Self::DEFAULT_STATE)
    }
}

impl SparkleSource for XorShiftStream {
    fn next_value(&mut self, x: u32, y: u32) -> u32 {
        let [r0, r1, r2, r3] = self.state;
        let mut t = r0 ^ (r0 << 11);
        t = t.wrapping_add((x << 23).wrapping_add(y << 17));
        let next = r3 ^ (r3 >> 19) ^ t ^ (t >> 8);
        self.state = [r1, r2, r3, next];
        next
    }

    fn is_order_independent(&self) -> bool {
        false
    }
}
