use crate::config::MatmulConfig;

/// Cache-tiled multiply: C += A @ B over row-major slices.
///
/// Tiles are walked row-tile (block_m), then reduction-tile (block_k), then
/// column-tile (block_n). Inside a tile, `a[i][p]` is loaded once and
/// streamed across a contiguous run of B's row `p` and C's row `i`. Tile
/// ends are clamped to the matrix extent, so block sizes need not divide
/// the dimensions.
///
/// For a fixed `(i, j)` the reduction still visits `p` in ascending order,
/// but the partial sum round-trips through `c` between k-tiles rather than
/// staying in one scalar, so results are only guaranteed to agree with
/// the naive kernel within floating-point tolerance.
pub(crate) fn matmul_tiled(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    config: &MatmulConfig,
) {
    let bm = config.block_m();
    let bn = config.block_n();
    let bk = config.block_k();

    for i0 in (0..m).step_by(bm) {
        let i_max = i0.saturating_add(bm).min(m);

        for k0 in (0..k).step_by(bk) {
            let k_max = k0.saturating_add(bk).min(k);

            for j0 in (0..n).step_by(bn) {
                let j_max = j0.saturating_add(bn).min(n);

                for i in i0..i_max {
                    let c_row = &mut c[i * n + j0..i * n + j_max];
                    for p in k0..k_max {
                        let a_ip = a[i * k + p];
                        let b_row = &b[p * n + j0..p * n + j_max];
                        for (c_ij, &b_pj) in c_row.iter_mut().zip(b_row) {
                            *c_ij += a_ip * b_pj;
                        }
                    }
                }
            }
        }
    }
}
