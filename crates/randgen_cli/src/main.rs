//! randgen CLI - Command Line Front End for the Generator Library
//!
//! # Commands
//!
//! - `randgen draw` - Print draws from one generator stream
//! - `randgen streams` - Summarise many streams built in parallel
//! - `randgen check` - Run the known-answer self test
//!
//! # Configuration
//!
//! Generator settings come from `randgen.toml` (or `--config <file>`),
//! `RANDGEN_*` environment variables and the `--algorithm` / `--seed` flags,
//! in increasing order of priority. `RUST_LOG` overrides the configured log
//! level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use randgen_core::Algorithm;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use crate::config::{CliConfig, LogLevel, Overrides};

/// Pluggable uniform random generators CLI
#[derive(Parser)]
#[command(name = "randgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: randgen.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Generator algorithm (ranecu, ranmar, ranmt)
    #[arg(short, long, global = true)]
    algorithm: Option<Algorithm>,

    /// Master seed of the seed sequence
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print draws from one generator stream
    Draw {
        /// Stream index; defaults to the next generator of the sequence
        #[arg(long)]
        stream: Option<u64>,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Output format (plain, csv, json)
        #[arg(short, long, default_value = "plain")]
        format: String,
    },

    /// Summarise many streams built in parallel
    Streams {
        /// Number of streams
        #[arg(short = 'm', long, default_value = "16")]
        streams: u64,

        /// Draws per stream
        #[arg(short = 'n', long, default_value = "10000")]
        draws: usize,

        /// Worker threads [default: number of CPUs]
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Run the known-answer self test for every algorithm
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = Overrides {
        algorithm: cli.algorithm,
        master_seed: cli.seed,
    };
    let config = CliConfig::load(cli.config.as_deref(), &overrides)?;

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Draw {
            stream,
            count,
            format,
        } => {
            let factory = config.factory.build()?;
            commands::draw::run(&factory, stream, count, &format)
        }
        Commands::Streams {
            streams,
            draws,
            workers,
        } => {
            let factory = config.factory.build()?;
            commands::streams::run(&factory, streams, draws, workers)
        }
        Commands::Check => commands::check::run(),
    }
}

/// Initialise tracing; `RUST_LOG` wins over the configured level.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
