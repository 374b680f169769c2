//! # Uniform Generator Algorithms
//!
//! This module provides the uniform generator capability and its three
//! implementations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is a pure function of its seed(s)
//!   and the number of draws taken; outputs are bit-for-bit stable
//! - **Efficiency**: zero-allocation batch draws via `&mut [f64]` slices
//! - **Static dispatch**: the algorithm set is closed, so [`RandGen`] is an
//!   enum rather than a `Box<dyn UniformGenerator>`
//! - **Single owner**: draws take `&mut self`; parallel work uses one
//!   instance per worker
//!
//! ## Module Structure
//!
//! - [`UniformGenerator`]: the capability (`draw_one`, `draw_many`, derived
//!   draws)
//! - [`Ranecu`]: L'Ecuyer combined multiplicative congruential generator
//! - [`Ranmar`]: Marsaglia-Zaman lagged-Fibonacci generator
//! - [`Ranmt`]: Mersenne Twister MT19937
//! - [`Algorithm`] / [`RandGen`]: algorithm selector and instance enum
//! - [`RngAdapter`]: `rand::RngCore` view of any generator
//!
//! ## Usage Example
//!
//! ```rust
//! use randgen_core::rng::{Ranecu, Ranmar, UniformGenerator};
//!
//! let mut ecu = Ranecu::new(12345, 67890);
//! let value = ecu.draw_one();
//! assert!((0.0..1.0).contains(&value));
//!
//! // Batch generation into a pre-allocated buffer
//! let mut mar = Ranmar::new(54321);
//! let mut buffer = vec![0.0; 1000];
//! mar.draw_many(&mut buffer, 1000).unwrap();
//!
//! // Standard normal variates through rand_distr
//! let z = mar.gaussian();
//! assert!(z.is_finite());
//! ```

mod adapter;
mod algorithm;
mod ranecu;
mod ranmar;
mod ranmt;
mod uniform;

// Public re-exports
pub use adapter::RngAdapter;
pub use algorithm::{Algorithm, RandGen};
pub use ranecu::Ranecu;
pub use ranmar::{Ranmar, TABLE_LEN};
pub use ranmt::Ranmt;
pub use uniform::UniformGenerator;
