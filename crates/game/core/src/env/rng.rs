//! RNG oracle for combat randomness.
//!
//! Every random decision in the arena (damage variance, passive procs,
//! special hit counts, enemy generation, rewards) draws from an
//! [`RngOracle`] that the caller passes in explicitly. Nothing in the crate
//! touches process-wide random state.
//!
//! # Determinism
//!
//! [`PcgRng`] produces the same sequence for the same seed, so a seeded
//! session can be reproduced. [`SequenceRng`] replays hand-picked raw values
//! and is what the unit tests use to force specific rolls.

/// Source of random numbers for combat resolution.
///
/// Implementors only provide [`next_u32`](Self::next_u32); every other roll
/// is derived from it so that fixtures stay predictable.
pub trait RngOracle {
    /// Generate the next raw u32 value.
    fn next_u32(&mut self) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Used for all percentage-based procs.
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Returns true with the given percent probability.
    fn chance(&mut self, percent: u32) -> bool {
        self.roll_d100() <= percent
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32() % range)
    }

    /// Pick a uniform index into a collection of `len` elements.
    ///
    /// Returns 0 for empty collections; callers index non-empty tables only.
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32() as usize) % len
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64-bit LCG state, 32-bit output through an
/// xorshift-high + random-rotate permutation.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    ///
    /// The seed is avalanched first so that adjacent seeds (0, 1, 2, ...)
    /// start from unrelated states.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// SplitMix64 finalizer used to spread user seeds across the state space.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed.wrapping_add(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Fixture generator that replays a fixed list of raw values, cycling.
///
/// Raw values map onto rolls as follows:
/// - `range(min, max)` yields `min + value % (max - min + 1)`, so `0` is the
///   lowest value of any range.
/// - `chance(p)` rolls `value % 100 + 1`, so `0` always fires and `99` never
///   fires for `p < 100`.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
