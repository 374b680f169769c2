//! Generator factory configuration.
//!
//! [`FactoryConfig`] deserialises from any serde format (the CLI feeds it
//! from a TOML file and the environment) or is assembled with
//! [`FactoryConfigBuilder`]. Either way [`FactoryConfig::build`] validates
//! before producing a [`GeneratorFactory`].

use serde::{Deserialize, Serialize};

use super::GeneratorFactory;
use crate::error::{RandGenError, Result};
use crate::rng::Algorithm;
use crate::seed::{Exhaustion, SeedOrder, SeedRange, SeedSequence};

/// Factory configuration.
///
/// # Examples
///
/// ```rust
/// use randgen_core::factory::FactoryConfig;
/// use randgen_core::rng::Algorithm;
///
/// let config = FactoryConfig::builder()
///     .algorithm(Algorithm::Ranmar)
///     .master_seed(42)
///     .build()
///     .expect("valid configuration");
///
/// let factory = config.build().unwrap();
/// assert_eq!(factory.algorithm(), Algorithm::Ranmar);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Generator algorithm.
    pub algorithm: Algorithm,
    /// Master seed of the seed sequence.
    pub master_seed: u64,
    /// Order in which seeds are emitted.
    pub order: SeedOrder,
    /// Behaviour once the seed space is used up.
    pub exhaustion: Exhaustion,
    /// Optional lower bound narrowing the algorithm's seed range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_low: Option<i32>,
    /// Optional upper bound narrowing the algorithm's seed range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_high: Option<i32>,
}

impl FactoryConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> FactoryConfigBuilder {
        FactoryConfigBuilder::default()
    }

    /// Effective seed range: the algorithm's legal range, narrowed by
    /// `seed_low` / `seed_high` where set.
    ///
    /// # Errors
    ///
    /// Returns [`RandGenError::InvalidConfig`] if a bound lies outside the
    /// legal range or the bounds are inverted.
    pub fn seed_range(&self) -> Result<SeedRange> {
        let legal = self.algorithm.seed_range();
        let low = self.seed_low.unwrap_or(legal.low());
        let high = self.seed_high.unwrap_or(legal.high());

        for (name, bound) in [("seed_low", low), ("seed_high", high)] {
            if !legal.contains(bound) {
                return Err(RandGenError::InvalidConfig {
                    name,
                    reason: format!(
                        "{} outside [{}, {}] for {}",
                        bound,
                        legal.low(),
                        legal.high(),
                        self.algorithm
                    ),
                });
            }
        }

        SeedRange::new(low, high)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandGenError::InvalidConfig`] if:
    /// - `seed_low` or `seed_high` lies outside the algorithm's legal range
    /// - `seed_low` is greater than `seed_high`
    /// - the narrowed range cannot seed a single generator
    pub fn validate(&self) -> Result<()> {
        let range = self.seed_range()?;
        let per_generator = self.algorithm.seeds_per_generator() as u64;
        if range.size() < per_generator {
            return Err(RandGenError::InvalidConfig {
                name: "seed_high",
                reason: format!(
                    "range of {} seed(s) cannot seed one {} generator",
                    range.size(),
                    self.algorithm
                ),
            });
        }
        Ok(())
    }

    /// Validates the configuration and builds the factory it describes.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn build(&self) -> Result<GeneratorFactory> {
        self.validate()?;
        let source = SeedSequence::with_options(
            self.master_seed,
            self.seed_range()?,
            self.order,
            self.exhaustion,
        );
        Ok(GeneratorFactory::with_source(self.algorithm, source))
    }
}

/// Builder for [`FactoryConfig`].
///
/// Provides a fluent API with validation at build time.
///
/// # Examples
///
/// ```rust
/// use randgen_core::factory::FactoryConfig;
/// use randgen_core::seed::{Exhaustion, SeedOrder};
///
/// let config = FactoryConfig::builder()
///     .master_seed(7)
///     .order(SeedOrder::Sequential)
///     .exhaustion(Exhaustion::Wrap)
///     .seed_range(1, 1_000)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.seed_range().unwrap().size(), 1_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FactoryConfigBuilder {
    config: FactoryConfig,
}

impl FactoryConfigBuilder {
    /// Sets the generator algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Sets the master seed.
    #[inline]
    pub fn master_seed(mut self, master_seed: u64) -> Self {
        self.config.master_seed = master_seed;
        self
    }

    /// Sets the seed emission order.
    #[inline]
    pub fn order(mut self, order: SeedOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Sets the exhaustion policy.
    #[inline]
    pub fn exhaustion(mut self, exhaustion: Exhaustion) -> Self {
        self.config.exhaustion = exhaustion;
        self
    }

    /// Narrows the seed range to `[low, high]`.
    ///
    /// # Arguments
    ///
    /// * `low` - Lowest seed, within the algorithm's legal range
    /// * `high` - Highest seed, within the algorithm's legal range
    #[inline]
    pub fn seed_range(mut self, low: i32, high: i32) -> Self {
        self.config.seed_low = Some(low);
        self.config.seed_high = Some(high);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandGenError::InvalidConfig`] if validation fails.
    pub fn build(self) -> Result<FactoryConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
