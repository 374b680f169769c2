//! Error types for generator construction, bulk draws and seed emission.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandGenError>;

/// Categorised failures of the random generation subsystem.
///
/// Drawing from a constructed generator never fails; errors only arise from
/// caller preconditions, seed-space limits and configuration.
///
/// # Examples
///
/// ```
/// use randgen_core::RandGenError;
///
/// let err = RandGenError::BufferTooSmall { requested: 10, capacity: 4 };
/// assert_eq!(
///     err.to_string(),
///     "Buffer too small: 10 draws requested but capacity is 4"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandGenError {
    /// `draw_many` was asked for more values than the buffer holds.
    #[error("Buffer too small: {requested} draws requested but capacity is {capacity}")]
    BufferTooSmall {
        /// Number of draws requested.
        requested: usize,
        /// Length of the supplied buffer.
        capacity: usize,
    },

    /// Every seed of a finite seed space has been emitted.
    #[error("Seed space exhausted: all {space} seeds emitted ({requested} more requested)")]
    SeedSpaceExhausted {
        /// Size of the seed space.
        space: u64,
        /// Number of seeds the failed request asked for.
        requested: u64,
    },

    /// A seed source produced a seed outside the algorithm's legal range.
    #[error("Seed {seed} out of range [{low}, {high}] for {algorithm}")]
    SeedOutOfRange {
        /// Algorithm name.
        algorithm: &'static str,
        /// The offending seed.
        seed: i32,
        /// Lowest legal seed.
        low: i32,
        /// Highest legal seed.
        high: i32,
    },

    /// Unrecognised algorithm name.
    #[error("Unknown algorithm: {0}. Supported: ranecu, ranmar, ranmt")]
    UnknownAlgorithm(String),

    /// Unrecognised seed order name.
    #[error("Unknown seed order: {0}. Supported: scrambled, sequential")]
    UnknownSeedOrder(String),

    /// Unrecognised exhaustion policy name.
    #[error("Unknown exhaustion policy: {0}. Supported: fail, wrap")]
    UnknownExhaustion(String),

    /// Configuration value rejected during validation.
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig {
        /// Name of the configuration field.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
