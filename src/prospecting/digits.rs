//! Randomness for the prospect generator

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Source of the random integers layered over the deterministic selection
pub trait DigitSource {
    /// Next integer within `range` (inclusive on both ends)
    fn next_in(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// [`DigitSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDigits<R> {
    rng: R,
}

pub type ThreadRngDigits = RngDigits<ThreadRng>;

impl RngDigits<ThreadRng> {
    pub fn thread() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RngDigits<StdRng> {
    /// Reproducible digits for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRngDigits {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> DigitSource for RngDigits<R> {
    fn next_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Replays a fixed sequence, cycling when exhausted
///
/// Values outside the requested range are clamped into it. An empty
/// sequence always yields the range start.
#[derive(Debug, Clone, Default)]
pub struct SequenceDigits {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceDigits {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl DigitSource for SequenceDigits {
    fn next_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        let Some(value) = self.values.get(self.cursor % self.values.len().max(1)) else {
            return *range.start();
        };
        self.cursor += 1;
        (*value).clamp(*range.start(), *range.end())
    }
}
