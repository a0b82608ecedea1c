//! `cm-tune` - Empirical block-size search for the cachemat blocked kernel.
//!
//! Every combination of a fixed candidate list is timed against synthetic
//! operands of the requested shape and the fastest configuration wins.

pub mod bench;
pub mod error;
pub mod operands;
pub mod tuner;

pub use error::{Result, TuneError};
pub use operands::random_matrix;
pub use tuner::{
    autotune, Autotuner, CandidateTiming, TuneReport, DEFAULT_CANDIDATES, DEFAULT_SEED,
    DEFAULT_TRIALS,
};
