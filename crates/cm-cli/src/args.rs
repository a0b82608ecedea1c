use clap::{Parser, ValueEnum};
use cm_matrix::DEFAULT_BLOCK;
use cm_tune::{DEFAULT_SEED, DEFAULT_TRIALS};

/// Which multiply path to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Reference triple loop
    Naive,
    /// Cache-tiled kernel with explicit block sizes
    Blocked,
    /// Search block sizes first, then run the tiled kernel
    Autotune,
}

impl Mode {
    /// The flag value as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Naive => "naive",
            Mode::Blocked => "blocked",
            Mode::Autotune => "autotune",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Naive => "Naive",
            Mode::Blocked => "Blocked",
            Mode::Autotune => "Autotuned blocked",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cachemat", version, about = "Cache-blocked matrix multiply with block-size autotuning")]
pub struct Cli {
    /// Rows of A and C
    #[arg(long, default_value_t = 1024)]
    pub m: usize,

    /// Columns of B and C
    #[arg(long, default_value_t = 1024)]
    pub n: usize,

    /// Columns of A / rows of B (reduction dimension)
    #[arg(long, default_value_t = 1024)]
    pub k: usize,

    #[arg(long, value_enum, default_value_t = Mode::Naive)]
    pub mode: Mode,

    /// Timed runs per candidate in autotune mode
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Block size along M for blocked mode
    #[arg(long, default_value_t = DEFAULT_BLOCK)]
    pub block_m: usize,

    /// Block size along N for blocked mode
    #[arg(long, default_value_t = DEFAULT_BLOCK)]
    pub block_n: usize,

    /// Block size along K for blocked mode
    #[arg(long, default_value_t = DEFAULT_BLOCK)]
    pub block_k: usize,

    /// Seed for the random operands
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}
