use std::fmt::Debug;

use crate::error::Result;
use crate::matrix::Matrix;

/// Trait for pluggable matrix multiply strategies (naive, blocked, ...).
///
/// Operands are borrowed and the product is returned as a freshly
/// allocated `Matrix`; no kernel keeps a reference into its inputs.
pub trait MatmulKernel: Send + Sync + Debug {
    /// Returns the name of this kernel (e.g., "naive", "blocked").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: shape [m, k]
    /// - `b`: shape [k, n]
    /// - Returns: shape [m, n]
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `a.cols() != b.rows()`. No partial
    /// result is produced in that case.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
