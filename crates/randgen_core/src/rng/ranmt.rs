//! Mersenne Twister (MT19937) behind the uniform generator capability.

use std::fmt;

use rand_mt::Mt;

use super::uniform::UniformGenerator;

/// MT19937 generator seeded from one 32-bit value.
///
/// Draws use the 53-bit `genrand_res53` construction from two successive
/// 32-bit outputs, which matches `numpy.random.RandomState(seed).random()`.
///
/// # Examples
///
/// ```rust
/// use randgen_core::rng::{Ranmt, UniformGenerator};
///
/// let mut gen = Ranmt::new(42);
/// assert_eq!(gen.draw_one(), 0.3745401188473625);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Ranmt {
    seed: u32,
    mt: Mt,
}

impl Ranmt {
    /// Creates a generator with the standard `init_genrand` seeding.
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            mt: Mt::new(seed),
        }
    }

    /// Creates a generator from a signed seed, reinterpreting its bits.
    #[inline]
    pub fn from_signed(seed: i32) -> Self {
        Self::new(seed as u32)
    }

    /// Returns the seed the generator was created with.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Next raw 32-bit tempered output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    #[inline(always)]
    fn step(&mut self) -> f64 {
        let a = self.mt.next_u32() >> 5;
        let b = self.mt.next_u32() >> 6;
        (f64::from(a) * 67_108_864.0 + f64::from(b)) / 9_007_199_254_740_992.0
    }
}

impl fmt::Debug for Ranmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranmt")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl UniformGenerator for Ranmt {
    #[inline]
    fn draw_one(&mut self) -> f64 {
        self.step()
    }

    fn fill(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.step();
        }
    }
}
