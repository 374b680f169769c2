//! CLI configuration management
//!
//! Layers the generator configuration from, lowest to highest priority:
//! 1. Default values
//! 2. TOML file (`randgen.toml`, or `--config <path>`)
//! 3. `RANDGEN_*` environment variables (e.g. `RANDGEN_MASTER_SEED`)
//! 4. Command-line overrides (`--algorithm`, `--seed`)

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use config::{Config, Environment, File};
use randgen_core::{Algorithm, FactoryConfig};

use crate::{CliError, Result};

/// Config file looked up when `--config` is not given. Optional.
pub const DEFAULT_CONFIG_FILE: &str = "randgen.toml";

/// Prefix of the environment variables read into the configuration.
pub const ENV_PREFIX: &str = "RANDGEN";

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidArgument(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Command-line overrides, highest priority
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Algorithm override
    pub algorithm: Option<Algorithm>,
    /// Master seed override
    pub master_seed: Option<u64>,
}

/// Resolved CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Generator factory configuration
    pub factory: FactoryConfig,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Load configuration from all sources
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let mut config = Self::from_settings(settings)?;
        config.apply(overrides);
        config.factory.validate()?;
        Ok(config)
    }

    fn from_settings(settings: Config) -> Result<Self> {
        let log_level = match settings.get_string("log_level") {
            Ok(level) => level.parse()?,
            Err(config::ConfigError::NotFound(_)) => LogLevel::default(),
            Err(e) => return Err(e.into()),
        };
        let factory: FactoryConfig = settings.try_deserialize()?;
        Ok(Self { factory, log_level })
    }

    /// Merge with command-line overrides (overrides take precedence)
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(algorithm) = overrides.algorithm {
            self.factory.algorithm = algorithm;
        }
        if let Some(seed) = overrides.master_seed {
            self.factory.master_seed = seed;
        }
    }
}
