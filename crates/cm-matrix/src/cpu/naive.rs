/// Reference i-j-k multiply over row-major slices.
///
/// Each `c[i][j]` is accumulated into a scalar with `p` ascending, then
/// stored once. `c` must already have length `m * n`.
pub(crate) fn matmul_ijk(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f64;
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
