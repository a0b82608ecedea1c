use crate::error::{MatrixError, Result};
use crate::kernel::MatmulKernel;

/// A dense, row-major matrix of f64 values.
///
/// Element `(row, col)` lives at `data[row * cols + col]`. Dimensions are
/// fixed at construction; only the values can change afterwards. Every
/// public accessor checks bounds and reports `MatrixError::OutOfRange`
/// instead of panicking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Number of elements in a `rows x cols` matrix.
    ///
    /// # Errors
    /// Returns `ShapeOverflow` if `rows * cols` does not fit in `usize`.
    pub fn numel(rows: usize, cols: usize) -> Result<usize> {
        rows.checked_mul(cols).ok_or(MatrixError::ShapeOverflow { rows, cols })
    }

    /// Create a zero-filled matrix with the given dimensions.
    ///
    /// Zero rows or columns are valid and yield an empty matrix.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`. Use `try_new` to get an
    /// error instead.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a zero-filled matrix, reporting `ShapeOverflow` instead of
    /// panicking.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let n = Self::numel(rows, cols)?;
        Ok(Matrix {
            rows,
            cols,
            data: vec![0.0; n],
        })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `ShapeOverflow` if `rows * cols` overflows and `DataLength`
    /// if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != Self::numel(rows, cols)? {
            return Err(MatrixError::DataLength {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Read the element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Mutable reference to the element at `(row, col)`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Write `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Row-major view of the backing store.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    // Kernels write through this after validating shapes up front.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Multiply `self` (m x k) by `other` (k x n) with the given kernel.
    pub fn matmul(&self, other: &Matrix, kernel: &dyn MatmulKernel) -> Result<Matrix> {
        kernel.multiply(self, other)
    }
}
