//! Seedable race RNG.
//!
//! # Determinism strategy
//!
//! One race draws from one `SmallRng`, seeded from `RaceConfig::seed` and
//! consumed in a fixed order: once per unfinished competitor per tick, in
//! progress-array order.  Identical seed + identical field ⇒ identical race.
//!
//! Independent runs (batch simulation, roster generation) derive their seeds
//! with [`derive_seed`]:
//!
//!   seed_n = base_seed XOR (n * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive run numbers uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seed for the `n`-th independent run derived from `base`.
#[inline]
pub fn derive_seed(base: u64, n: u64) -> u64 {
    base ^ n.wrapping_add(1).wrapping_mul(MIXING_CONSTANT)
}

/// Race-level RNG.  Injected into the simulator so tests can pin the stream.
///
/// Single-threaded by construction; give each parallel run its own `RaceRng`.
#[derive(Clone, Debug)]
pub struct RaceRng(SmallRng);

impl RaceRng {
    pub fn new(seed: u64) -> Self {
        RaceRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `RaceRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> RaceRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        RaceRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform draw in `[-0.5, 0.5)`.
    #[inline]
    pub fn centered_unit(&mut self) -> f64 {
        self.random::<f64>() - 0.5
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
