//! # Generator Factory
//!
//! Binds one [`Algorithm`] to one [`SeedSource`] and hands out independently
//! seeded generator instances.
//!
//! The factory owns its seed source by value; there is no process-wide seed
//! state. The only mutable state is the source's cursor, which advances
//! atomically, so a shared `&GeneratorFactory` can serve many workers.
//!
//! # Example
//!
//! ```rust
//! use randgen_core::factory::GeneratorFactory;
//! use randgen_core::rng::{Algorithm, UniformGenerator};
//!
//! let factory = GeneratorFactory::new(Algorithm::Ranmar, 2024);
//!
//! let mut a = factory.create_generator().unwrap();
//! let mut b = factory.create_generator().unwrap();
//! assert_ne!(a.draw_one(), b.draw_one());
//!
//! // Streams can also be addressed by index, independent of the cursor.
//! let replay = GeneratorFactory::new(Algorithm::Ranmar, 2024);
//! let fresh = GeneratorFactory::new(Algorithm::Ranmar, 2024);
//! assert_eq!(replay.stream(0).unwrap(), fresh.create_generator().unwrap());
//! ```

mod config;

pub use config::{FactoryConfig, FactoryConfigBuilder};

use tracing::{debug, trace, warn};

use crate::error::{RandGenError, Result};
use crate::rng::{Algorithm, RandGen};
use crate::seed::{Exhaustion, SeedSequence, SeedSource};

/// Creates generator instances of one algorithm from one seed source.
#[derive(Debug)]
pub struct GeneratorFactory<S: SeedSource = SeedSequence> {
    algorithm: Algorithm,
    source: S,
}

impl GeneratorFactory<SeedSequence> {
    /// Creates a factory over a scrambled [`SeedSequence`] restricted to the
    /// algorithm's legal seed range.
    pub fn new(algorithm: Algorithm, master_seed: u64) -> Self {
        Self::with_source(
            algorithm,
            SeedSequence::new(master_seed, algorithm.seed_range()),
        )
    }

    /// Generator for stream `index`, independent of the cursor.
    ///
    /// Stream `i` is built from seeds `i * k .. (i + 1) * k` of the
    /// sequence, where `k` is [`Algorithm::seeds_per_generator`], so it
    /// equals the `i`-th generator a fresh factory would create. Workers
    /// that address streams by index get the same generators regardless of
    /// scheduling.
    ///
    /// # Errors
    ///
    /// Returns [`RandGenError::SeedSpaceExhausted`] when the stream's seeds
    /// lie past the end of the seed space and the sequence is configured
    /// with [`Exhaustion::Fail`]. Under [`Exhaustion::Wrap`] such streams
    /// repeat earlier seed sets and a warning is logged.
    pub fn stream(&self, index: u64) -> Result<RandGen> {
        let count = self.algorithm.seeds_per_generator();
        let per = count as u64;
        let space = self.source.range().size();

        let end = index.checked_mul(per).and_then(|base| base.checked_add(per));
        if end.map_or(true, |end| end > space) {
            match self.source.exhaustion() {
                Exhaustion::Fail => {
                    return Err(RandGenError::SeedSpaceExhausted {
                        space,
                        requested: per,
                    })
                }
                Exhaustion::Wrap => warn!(
                    space,
                    index,
                    "seed space wrapped; seeds repeat from here on"
                ),
            }
        }

        let base = index.wrapping_mul(per);
        let mut seeds = [0; 2];
        for (j, seed) in seeds[..count].iter_mut().enumerate() {
            *seed = self.source.seed_at(base.wrapping_add(j as u64));
        }
        trace!(algorithm = %self.algorithm, index, seeds = ?&seeds[..count], "built stream");
        Ok(self.algorithm.instantiate(seeds))
    }
}

impl<S: SeedSource> GeneratorFactory<S> {
    /// Creates a factory drawing seeds from `source`.
    pub fn with_source(algorithm: Algorithm, source: S) -> Self {
        debug!(
            algorithm = %algorithm,
            seeds_per_generator = algorithm.seeds_per_generator(),
            "generator factory ready"
        );
        Self { algorithm, source }
    }

    /// Algorithm of the generators this factory creates.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The bound seed source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the factory, returning its seed source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Draws the next seed(s) and returns a freshly seeded generator.
    ///
    /// The seeds of one generator are reserved in a single cursor step.
    ///
    /// # Errors
    ///
    /// - [`RandGenError::SeedSpaceExhausted`] from a finite seed source
    /// - [`RandGenError::SeedOutOfRange`] if the source emits a seed outside
    ///   [`Algorithm::seed_range`]
    pub fn create_generator(&self) -> Result<RandGen> {
        let count = self.algorithm.seeds_per_generator();
        let mut seeds = [0; 2];
        self.source.fill_seeds(&mut seeds[..count])?;

        let range = self.algorithm.seed_range();
        if let Some(&seed) = seeds[..count].iter().find(|&&seed| !range.contains(seed)) {
            return Err(RandGenError::SeedOutOfRange {
                algorithm: self.algorithm.name(),
                seed,
                low: range.low(),
                high: range.high(),
            });
        }

        trace!(algorithm = %self.algorithm, seeds = ?&seeds[..count], "created generator");
        Ok(self.algorithm.instantiate(seeds))
    }

    /// Creates `n` generators in sequence.
    ///
    /// # Errors
    ///
    /// Fails with the first error from [`create_generator`](Self::create_generator).
    pub fn create_generators(&self, n: usize) -> Result<Vec<RandGen>> {
        (0..n).map(|_| self.create_generator()).collect()
    }
}
