//! # Seed Distribution
//!
//! Seed sources hand out the seeds from which independent generator
//! instances are built.
//!
//! A source must be:
//!
//! - **Deterministic**: a freshly configured source with the same
//!   configuration emits the same ordered sequence.
//! - **Collision-free**: no seed repeats within one run (up to the size of
//!   the seed space).
//! - **Atomic**: the cursor advance is safe under concurrent callers, so one
//!   factory can serve many rayon workers.
//!
//! ## Module Structure
//!
//! - [`SeedSource`]: the trait consumed by
//!   [`GeneratorFactory`](crate::factory::GeneratorFactory)
//! - [`SeedRange`]: inclusive range of legal seeds for one algorithm
//! - [`SeedSequence`]: counter-based source permuting a [`SeedRange`]

mod sequence;

pub use sequence::{Exhaustion, SeedOrder, SeedSequence};

use crate::error::{RandGenError, Result};

/// Emits a reproducible, collision-free sequence of `i32` seeds.
///
/// Implementations advance an internal cursor through `&self`, so they must
/// use interior mutability that is safe to share between threads.
pub trait SeedSource: Send + Sync {
    /// Emits `seeds.len()` consecutive seeds as a single cursor step.
    ///
    /// # Errors
    ///
    /// Returns [`RandGenError::SeedSpaceExhausted`] when a finite source
    /// cannot satisfy the whole request; nothing is emitted in that case.
    fn fill_seeds(&self, seeds: &mut [i32]) -> Result<()>;

    /// Emits the next seed.
    fn next_seed(&self) -> Result<i32> {
        let mut seed = [0];
        self.fill_seeds(&mut seed)?;
        Ok(seed[0])
    }

    /// Number of seeds emitted so far.
    fn emitted(&self) -> u64;
}

impl<S: SeedSource + ?Sized> SeedSource for std::sync::Arc<S> {
    fn fill_seeds(&self, seeds: &mut [i32]) -> Result<()> {
        (**self).fill_seeds(seeds)
    }

    fn emitted(&self) -> u64 {
        (**self).emitted()
    }
}

/// Inclusive range `[low, high]` of legal seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeedRange {
    low: i32,
    high: i32,
}

impl SeedRange {
    /// Every `i32`.
    pub const FULL: SeedRange = SeedRange {
        low: i32::MIN,
        high: i32::MAX,
    };

    /// Creates the range `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandGenError::InvalidConfig`] when `low > high`.
    pub fn new(low: i32, high: i32) -> Result<Self> {
        if low > high {
            return Err(RandGenError::InvalidConfig {
                name: "seed_range",
                reason: format!("low {} exceeds high {}", low, high),
            });
        }
        Ok(Self { low, high })
    }

    /// Range from bounds already known to be ordered.
    pub(crate) const fn from_bounds(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Lowest seed in the range.
    #[inline]
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Highest seed in the range.
    #[inline]
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Number of seeds in the range (at most 2^32).
    #[inline]
    pub fn size(&self) -> u64 {
        (i64::from(self.high) - i64::from(self.low) + 1) as u64
    }

    /// Whether `seed` lies in the range.
    #[inline]
    pub fn contains(&self, seed: i32) -> bool {
        (self.low..=self.high).contains(&seed)
    }

    /// Maps an offset in `[0, size)` onto the range.
    #[inline]
    pub(crate) fn at(&self, offset: u64) -> i32 {
        (i64::from(self.low) + offset as i64) as i32
    }
}
