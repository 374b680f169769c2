//! Streams command implementation
//!
//! Builds many index-addressed streams on a rayon pool and prints a summary
//! per stream. Output does not depend on the number of workers.

use randgen_core::{GeneratorFactory, UniformGenerator};
use rayon::prelude::*;
use tracing::info;

use crate::{CliError, Result};

/// Summary of one stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamSummary {
    /// Stream index.
    pub index: u64,
    /// First draw of the stream.
    pub first: f64,
    /// Mean of all draws.
    pub mean: f64,
}

/// Run the streams command
pub fn run(
    factory: &GeneratorFactory,
    streams: u64,
    draws: usize,
    workers: Option<usize>,
) -> Result<()> {
    let workers = workers.unwrap_or_else(num_cpus::get);
    info!("Summarising streams...");
    info!("  Algorithm: {}", factory.algorithm());
    info!("  Streams: {}", streams);
    info!("  Draws per stream: {}", draws);
    info!("  Workers: {}", workers);

    let summaries = summarise(factory, streams, draws, workers)?;

    println!("{:>8}  {:>20}  {:>20}", "stream", "first", "mean");
    for summary in &summaries {
        println!(
            "{:>8}  {:>20.17}  {:>20.17}",
            summary.index, summary.first, summary.mean
        );
    }

    if !summaries.is_empty() {
        let overall = summaries.iter().map(|s| s.mean).sum::<f64>() / summaries.len() as f64;
        info!("Mean over all streams: {:.6}", overall);
    }
    Ok(())
}

/// Summarises streams `0..streams` on a pool of `workers` threads.
pub fn summarise(
    factory: &GeneratorFactory,
    streams: u64,
    draws: usize,
    workers: usize,
) -> Result<Vec<StreamSummary>> {
    if draws == 0 {
        return Err(CliError::InvalidArgument(
            "draws per stream must be at least 1".to_string(),
        ));
    }
    if workers == 0 {
        return Err(CliError::InvalidArgument(
            "workers must be at least 1".to_string(),
        ));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    pool.install(|| {
        (0..streams)
            .into_par_iter()
            .map(|index| -> Result<StreamSummary> {
                let mut gen = factory.stream(index)?;
                let mut buffer = vec![0.0; draws];
                gen.fill(&mut buffer);
                Ok(StreamSummary {
                    index,
                    first: buffer[0],
                    mean: buffer.iter().sum::<f64>() / draws as f64,
                })
            })
            .collect()
    })
}
