//! RANECU combined multiplicative congruential generator.
//!
//! L'Ecuyer's combination of two multiplicative linear congruential
//! generators, in the form published as subroutine RANECU by F. James,
//! *Comp. Phys. Comm.* **60** (1990) 329-344. Period about 2.3 x 10^18.
//!
//! Both congruences are evaluated with Schrage's decomposition so every
//! intermediate value fits in an `i32`, for any pair of `i32` seeds.

use super::uniform::UniformGenerator;

const M1: i32 = 2_147_483_563;
const A1: i32 = 40_014;
const Q1: i32 = 53_668;
const R1: i32 = 12_211;

const M2: i32 = 2_147_483_399;
const A2: i32 = 40_692;
const Q2: i32 = 52_774;
const R2: i32 = 3_791;

/// Scale from the combined integer onto (0, 1).
const NORM: f64 = 4.656613e-10;

/// RANECU generator state: the two congruential seeds.
///
/// Recommended seeds are `seed1` in [1, 2147483562] and `seed2` in
/// [1, 2147483398]. Other values are accepted unchecked; a pair such as
/// (0, 0) yields a constant stream. Seeds emitted by
/// [`GeneratorFactory`](crate::factory::GeneratorFactory) are always in
/// range.
///
/// # Examples
///
/// ```rust
/// use randgen_core::rng::{Ranecu, UniformGenerator};
///
/// let mut gen = Ranecu::new(1, 1);
/// assert_eq!(gen.draw_one(), 0.9999996714911893);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ranecu {
    seed1: i32,
    seed2: i32,
}

impl Ranecu {
    /// Lowest recommended seed for either congruence.
    pub const SEED_MIN: i32 = 1;
    /// Highest recommended value for `seed1`.
    pub const SEED1_MAX: i32 = M1 - 1;
    /// Highest recommended value for `seed2`.
    pub const SEED2_MAX: i32 = M2 - 1;

    /// Creates a generator from its two seeds.
    #[inline]
    pub fn new(seed1: i32, seed2: i32) -> Self {
        Self { seed1, seed2 }
    }

    /// Returns the current `(seed1, seed2)` state.
    #[inline]
    pub fn seeds(&self) -> (i32, i32) {
        (self.seed1, self.seed2)
    }

    #[inline(always)]
    fn step(&mut self) -> f64 {
        let k = self.seed1 / Q1;
        self.seed1 = A1 * (self.seed1 - k * Q1) - k * R1;
        if self.seed1 < 0 {
            self.seed1 += M1;
        }

        let k = self.seed2 / Q2;
        self.seed2 = A2 * (self.seed2 - k * Q2) - k * R2;
        if self.seed2 < 0 {
            self.seed2 += M2;
        }

        let mut iz = self.seed1 - self.seed2;
        if iz < 1 {
            iz += M1 - 1;
        }
        f64::from(iz) * NORM
    }
}

impl UniformGenerator for Ranecu {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answer_unit_seeds() {
        let mut gen = Ranecu::new(1, 1);
        let expected = [
            0.9999996714911893,
            0.9745196211344023,
            0.6474839066616233,
            0.33308559027333073,
            0.0369445435528013,
        ];
        for (i, &exp) in expected.iter().enumerate() {
            assert_eq!(gen.draw_one(), exp, "mismatch at draw {}", i);
        }
        assert_eq!(gen.seeds(), (732_249_858, 652_912_057));
    }

    #[test]
    fn test_known_answer_distinct_seeds() {
        let mut gen = Ranecu::new(12345, 67890);
        assert_eq!(gen.draw_one(), 0.9435973904241444);
        assert_eq!(gen.draw_one(), 0.9083188493579499);
        assert_eq!(gen.draw_one(), 0.1466878273459326);
    }

    #[test]
    fn test_first_update_uses_schrage_form() {
        let mut gen = Ranecu::new(1, 1);
        gen.draw_one();
        assert_eq!(gen.seeds(), (40_014, 40_692));
    }

    #[test]
    fn test_top_recommended_seeds_stay_in_range() {
        // M - 1 is -1 modulo M, so the first update lands on M - A.
        let mut gen = Ranecu::new(Ranecu::SEED1_MAX, Ranecu::SEED2_MAX);
        gen.draw_one();
        assert_eq!(gen.seeds(), (2_147_443_549, 2_147_442_707));

        for _ in 0..10_000 {
            let value = gen.draw_one();
            assert!(value > 0.0 && value < 1.0, "{}", value);
            let (s1, s2) = gen.seeds();
            assert!((Ranecu::SEED_MIN..=Ranecu::SEED1_MAX).contains(&s1));
            assert!((Ranecu::SEED_MIN..=Ranecu::SEED2_MAX).contains(&s2));
        }
    }

    #[test]
    fn test_extreme_seeds_do_not_overflow() {
        for &(s1, s2) in &[
            (i32::MIN, i32::MIN),
            (i32::MAX, i32::MAX),
            (i32::MIN, i32::MAX),
            (-1, 1),
            (0, -7),
        ] {
            let mut gen = Ranecu::new(s1, s2);
            for _ in 0..1_000 {
                let value = gen.draw_one();
                assert!((0.0..1.0).contains(&value), "{} from ({}, {})", value, s1, s2);
            }
        }
    }

    #[test]
    fn test_extremes_of_combined_value_stay_below_one() {
        assert!(f64::from(M1 - 1) * NORM < 1.0);
        assert!(f64::from(1) * NORM > 0.0);
    }

    #[test]
    fn test_zero_seeds_are_degenerate() {
        let mut gen = Ranecu::new(0, 0);
        let first = gen.draw_one();
        for _ in 0..10 {
            assert_eq!(gen.draw_one(), first);
        }
        assert_eq!(gen.seeds(), (0, 0));
    }

    #[test]
    fn test_state_equality_tracks_draws() {
        let mut a = Ranecu::new(5, 9);
        let mut b = Ranecu::new(5, 9);
        assert_eq!(a, b);

        a.draw_one();
        assert_ne!(a, b);

        b.draw_one();
        assert_eq!(a, b);
    }
}
