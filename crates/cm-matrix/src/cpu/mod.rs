mod blocked;
mod naive;

use tracing::trace;

use crate::config::MatmulConfig;
use crate::error::{MatrixError, Result};
use crate::kernel::MatmulKernel;
use crate::matrix::Matrix;

/// Validate `a @ b` and return `(m, k, n)`.
fn check_dims(a: &Matrix, b: &Matrix) -> Result<(usize, usize, usize)> {
    let (m, k) = a.shape();
    let (k2, n) = b.shape();
    if k != k2 {
        return Err(MatrixError::DimensionMismatch { m, k, k2, n });
    }
    Ok((m, k, n))
}

/// Reference triple-loop kernel.
///
/// Straightforward i-j-k loops with a scalar accumulator per output
/// element. Used as the correctness baseline for the blocked kernel.
#[derive(Debug, Clone)]
pub struct NaiveKernel;

impl NaiveKernel {
    pub fn new() -> Self {
        NaiveKernel
    }
}

impl Default for NaiveKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulKernel for NaiveKernel {
    fn name(&self) -> &str {
        "naive"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let (m, k, n) = check_dims(a, b)?;
        trace!(m, n, k, "naive matmul");

        let mut c = Matrix::try_new(m, n)?;
        naive::matmul_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, k);
        Ok(c)
    }
}

/// Cache-tiled kernel parameterized by a `MatmulConfig`.
#[derive(Debug, Clone, Default)]
pub struct BlockedKernel {
    config: MatmulConfig,
}

impl BlockedKernel {
    pub fn new(config: MatmulConfig) -> Self {
        BlockedKernel { config }
    }

    pub fn config(&self) -> &MatmulConfig {
        &self.config
    }
}

impl MatmulKernel for BlockedKernel {
    fn name(&self) -> &str {
        "blocked"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let (m, k, n) = check_dims(a, b)?;
        trace!(m, n, k, config = %self.config, "blocked matmul");

        let mut c = Matrix::try_new(m, n)?;
        blocked::matmul_tiled(
            a.as_slice(),
            b.as_slice(),
            c.as_mut_slice(),
            m,
            n,
            k,
            &self.config,
        );
        Ok(c)
    }
}

/// C = A @ B with the reference triple loop.
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    NaiveKernel::new().multiply(a, b)
}

/// C = A @ B with the cache-tiled kernel.
pub fn multiply_blocked(a: &Matrix, b: &Matrix, config: &MatmulConfig) -> Result<Matrix> {
    BlockedKernel::new(*config).multiply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn example_a() -> Matrix {
        Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    fn example_b() -> Matrix {
        Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap()
    }

    // Deterministic values in [-1, 1) with non-trivial fractional parts.
    fn patterned(rows: usize, cols: usize, salt: usize) -> Matrix {
        let data = (0..rows * cols)
            .map(|i| ((i * 37 + salt * 11) % 101) as f64 / 50.5 - 1.0)
            .collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    fn assert_close(expected: &Matrix, actual: &Matrix) {
        assert_eq!(expected.shape(), actual.shape());
        for (e, a) in expected.as_slice().iter().zip(actual.as_slice()) {
            assert_relative_eq!(*e, *a, epsilon = 1e-12, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_naive_example() {
        let c = multiply_naive(&example_a(), &example_b()).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_blocked_example_any_block_size() {
        for bs in [1, 2, 3, 4, 32] {
            let cfg = MatmulConfig::new(bs, bs, bs).unwrap();
            let c = multiply_blocked(&example_a(), &example_b(), &cfg).unwrap();
            assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0], "block size {}", bs);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(2, 2);
        let expected = MatrixError::DimensionMismatch {
            m: 2,
            k: 3,
            k2: 2,
            n: 2,
        };
        assert_eq!(multiply_naive(&a, &b).unwrap_err(), expected);
        assert_eq!(
            multiply_blocked(&a, &b, &MatmulConfig::default()).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_blocked_matches_naive_non_divisor_blocks() {
        let shapes = [(7, 5, 3), (17, 13, 11), (33, 31, 65), (40, 1, 9)];
        let blocks = [(1, 1, 1), (2, 3, 5), (4, 7, 16), (16, 16, 16), (5, 64, 3)];
        for &(m, n, k) in &shapes {
            let a = patterned(m, k, 1);
            let b = patterned(k, n, 2);
            let reference = multiply_naive(&a, &b).unwrap();
            for &(bm, bn, bk) in &blocks {
                let cfg = MatmulConfig::new(bm, bn, bk).unwrap();
                let c = multiply_blocked(&a, &b, &cfg).unwrap();
                assert_close(&reference, &c);
            }
        }
    }

    #[test]
    fn test_blocks_larger_than_matrix() {
        let a = patterned(5, 6, 3);
        let b = patterned(6, 4, 4);
        let cfg = MatmulConfig::new(128, 128, 128).unwrap();
        let c = multiply_blocked(&a, &b, &cfg).unwrap();
        assert_close(&multiply_naive(&a, &b).unwrap(), &c);
    }

    #[test]
    fn test_shape_independent_of_config() {
        let a = patterned(9, 4, 0);
        let b = patterned(4, 6, 0);
        for cfg in [
            MatmulConfig::default(),
            MatmulConfig::new(1, 2, 3).unwrap(),
            MatmulConfig::new(100, 1, 1).unwrap(),
        ] {
            assert_eq!(multiply_blocked(&a, &b, &cfg).unwrap().shape(), (9, 6));
        }
    }

    #[test]
    fn test_empty_reduction_yields_zeros() {
        let a = Matrix::new(3, 0);
        let b = Matrix::new(0, 2);
        let c = multiply_blocked(&a, &b, &MatmulConfig::default()).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_eq!(c.as_slice(), &[0.0; 6]);
        assert_eq!(multiply_naive(&a, &b).unwrap(), c);
    }

    #[test]
    fn test_empty_outer_dimensions() {
        let a = Matrix::new(0, 4);
        let b = Matrix::new(4, 0);
        let c = multiply_blocked(&a, &b, &MatmulConfig::default()).unwrap();
        assert_eq!(c.shape(), (0, 0));
    }

    #[test]
    fn test_output_shape_overflow() {
        let a = Matrix::new(usize::MAX, 0);
        let b = Matrix::new(0, 2);
        let expected = MatrixError::ShapeOverflow {
            rows: usize::MAX,
            cols: 2,
        };
        assert_eq!(multiply_naive(&a, &b).unwrap_err(), expected);
        assert_eq!(
            multiply_blocked(&a, &b, &MatmulConfig::default()).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_kernel_names() {
        assert_eq!(NaiveKernel::new().name(), "naive");
        assert_eq!(BlockedKernel::default().name(), "blocked");
        assert_eq!(*BlockedKernel::default().config(), MatmulConfig::default());
    }

    #[test]
    fn test_dyn_dispatch() {
        let kernels: Vec<Box<dyn MatmulKernel>> = vec![
            Box::new(NaiveKernel::new()),
            Box::new(BlockedKernel::new(MatmulConfig::new(1, 1, 1).unwrap())),
        ];
        for kernel in &kernels {
            let c = example_a().matmul(&example_b(), kernel.as_ref()).unwrap();
            assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0], "{}", kernel.name());
        }
    }
}
