use cm_matrix::{Matrix, Result};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Build a `rows x cols` matrix with values drawn uniformly from [-1.0, 1.0].
///
/// Values are drawn in row-major order, so two calls with identically
/// seeded generators produce identical matrices.
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
    let dist = Uniform::new_inclusive(-1.0f64, 1.0f64);
    let n = Matrix::numel(rows, cols)?;
    let data = (0..n).map(|_| dist.sample(rng)).collect();
    Matrix::from_vec(rows, cols, data)
}
