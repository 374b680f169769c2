//! # randgen_core
//!
//! Pluggable uniform pseudo-random number generation for Monte Carlo
//! simulation.
//!
//! Every generator exposes the same [`UniformGenerator`](rng::UniformGenerator)
//! capability: one draw uniformly distributed on [0, 1), or a batch of draws
//! into a caller-supplied buffer. Three algorithms are provided:
//!
//! - **RANECU**: L'Ecuyer's combined multiplicative congruential generator
//!   (two seeds, period about 2.3e18)
//! - **RANMAR**: Marsaglia-Zaman lagged-Fibonacci generator with a
//!   subtractive carry (one seed, period about 2^144)
//! - **RANMT**: Mersenne Twister MT19937 from `rand_mt`
//!
//! A [`GeneratorFactory`](factory::GeneratorFactory) binds one algorithm to a
//! [`SeedSource`](seed::SeedSource) and hands out independently seeded
//! instances, reproducibly and without seed collisions, so that parallel
//! workers each own one generator.
//!
//! ## Module Structure
//!
//! - [`rng`]: the capability, the three algorithms and the `rand` adapter
//! - [`seed`]: seed sources and seed ranges
//! - [`factory`]: generator factory and its configuration
//! - [`error`]: error type and result alias
//!
//! ## Usage Example
//!
//! ```rust
//! use randgen_core::factory::GeneratorFactory;
//! use randgen_core::rng::{Algorithm, UniformGenerator};
//!
//! let factory = GeneratorFactory::new(Algorithm::Ranecu, 42);
//! let mut gen = factory.create_generator()?;
//!
//! let mut buffer = [0.0; 64];
//! gen.draw_many(&mut buffer, 64)?;
//! assert!(buffer.iter().all(|x| (0.0..1.0).contains(x)));
//! # Ok::<(), randgen_core::RandGenError>(())
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod factory;
pub mod rng;
pub mod seed;

// Re-export commonly used items for convenience
pub use error::{RandGenError, Result};
pub use factory::{FactoryConfig, GeneratorFactory};
pub use rng::{Algorithm, RandGen, UniformGenerator};
