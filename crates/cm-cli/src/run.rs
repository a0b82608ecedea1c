use std::io::{self, Write};
use std::time::Instant;

use cm_matrix::{multiply_blocked, multiply_naive, MatmulConfig, Matrix, MatrixError};
use cm_tune::{autotune, random_matrix, TuneError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::info;

use crate::args::{Cli, Mode};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Tune(#[from] TuneError),
}

/// Build operands, run the selected mode, and write the report to `out`.
///
/// Returns the checksum of the product.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<f64, CliError> {
    writeln!(out, "Matrix dimensions: M={}, N={}, K={}", cli.m, cli.n, cli.k)?;
    writeln!(out, "Mode: {}", cli.mode.name())?;

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let a = random_matrix(cli.m, cli.k, &mut rng)?;
    let b = random_matrix(cli.k, cli.n, &mut rng)?;

    let config = match cli.mode {
        Mode::Naive => None,
        Mode::Blocked => Some(MatmulConfig::new(cli.block_m, cli.block_n, cli.block_k)?),
        Mode::Autotune => {
            let best = autotune(cli.m, cli.n, cli.k, cli.trials)?;
            writeln!(out, "Autotuned config: {}", best)?;
            Some(best)
        }
    };

    let start = Instant::now();
    let c = multiply(&a, &b, config.as_ref())?;
    let elapsed = start.elapsed();
    info!(mode = ?cli.mode, elapsed = ?elapsed, "multiply finished");

    writeln!(
        out,
        "{} multiplication time: {} seconds",
        cli.mode.label(),
        elapsed.as_secs_f64()
    )?;

    // Summing every element keeps the product observable.
    let checksum = c.sum();
    writeln!(out, "Result checksum: {}", checksum)?;
    Ok(checksum)
}

fn multiply(a: &Matrix, b: &Matrix, config: Option<&MatmulConfig>) -> Result<Matrix, MatrixError> {
    match config {
        Some(config) => multiply_blocked(a, b, config),
        None => multiply_naive(a, b),
    }
}
