//! `cm-matrix` - Dense matrices and CPU multiply kernels for cachemat.
//!
//! This crate provides:
//! - A `Matrix` type: row-major f64 storage with bounds-checked access
//! - A `MatmulKernel` trait for pluggable multiply strategies
//! - A reference `NaiveKernel` (i-j-k triple loop)
//! - A cache-tiled `BlockedKernel` driven by a `MatmulConfig`

pub mod config;
pub mod cpu;
pub mod error;
pub mod kernel;
pub mod matrix;

// Re-export primary types at the crate root for convenience.
pub use config::{MatmulConfig, DEFAULT_BLOCK};
pub use cpu::{multiply_blocked, multiply_naive, BlockedKernel, NaiveKernel};
pub use error::{MatrixError, Result};
pub use kernel::MatmulKernel;
pub use matrix::Matrix;
