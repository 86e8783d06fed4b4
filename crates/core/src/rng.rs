//! RNG module - pluggable random source for spawns and particle jitter
//!
//! The session never reaches for global randomness. Everything random (shape,
//! color, particle speed/decay/size/color) is drawn from a [`RandomSource`]
//! handed to the session at construction, so tests can script exact sequences.
//!
//! Also provides a simple LCG as the default, seedable source.

/// A source of uniformly distributed `u32` values.
///
/// Only `next_u32` is required; the range and float helpers are derived from it.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a float in [0, 1)
    fn next_f32(&mut self) -> f32 {
        // 24 high bits fit the f32 mantissa exactly.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Generate a float in [lo, hi)
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low LCG bits have short periods; swap halves before callers reduce with `%`.
        self.state.rotate_right(16)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed sequence of values, cycling when it runs out
///
/// Used to script exact spawns in tests and replays.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}
