//! Draw command implementation
//!
//! Prints uniform draws from one generator stream.

use std::io::{self, Write};

use randgen_core::{Algorithm, GeneratorFactory, UniformGenerator};
use serde::Serialize;
use tracing::info;

use crate::{CliError, Result};

#[derive(Serialize)]
struct DrawOutput<'a> {
    algorithm: Algorithm,
    stream: Option<u64>,
    draws: &'a [f64],
}

/// Run the draw command
pub fn run(factory: &GeneratorFactory, stream: Option<u64>, count: usize, format: &str) -> Result<()> {
    info!("Drawing...");
    info!("  Algorithm: {}", factory.algorithm());
    info!("  Stream: {}", stream.map_or("next".to_string(), |i| i.to_string()));
    info!("  Count: {}", count);

    let values = draws(factory, stream, count)?;

    let stdout = io::stdout();
    write_draws(stdout.lock(), factory.algorithm(), stream, &values, format)
}

/// Draws `count` values from stream `stream`, or from the next generator
/// the factory creates.
pub fn draws(factory: &GeneratorFactory, stream: Option<u64>, count: usize) -> Result<Vec<f64>> {
    let mut gen = match stream {
        Some(index) => factory.stream(index)?,
        None => factory.create_generator()?,
    };
    let mut values = vec![0.0; count];
    gen.draw_many(&mut values, count)?;
    Ok(values)
}

/// Writes draws in `format` (plain, csv or json).
pub fn write_draws<W: Write>(
    mut out: W,
    algorithm: Algorithm,
    stream: Option<u64>,
    values: &[f64],
    format: &str,
) -> Result<()> {
    match format {
        "plain" => {
            for value in values {
                writeln!(out, "{}", value)?;
            }
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["index", "value"])?;
            for (index, value) in values.iter().enumerate() {
                writer.serialize((index, value))?;
            }
            writer.flush()?;
        }
        "json" => {
            let output = DrawOutput {
                algorithm,
                stream,
                draws: values,
            };
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: plain, csv, json",
                other
            )));
        }
    }
    Ok(())
}
