use std::hint::black_box;
use std::time::{Duration, Instant};

use cm_matrix::{MatmulKernel, Matrix, Result};

/// Time `kernel` on `a @ b` and return the fastest of `trials` runs.
///
/// One untimed warm-up run happens first. `trials` below 1 is treated as 1.
pub fn min_time(
    kernel: &dyn MatmulKernel,
    a: &Matrix,
    b: &Matrix,
    trials: usize,
) -> Result<Duration> {
    black_box(kernel.multiply(a, b)?);

    let mut best = Duration::MAX;
    for _ in 0..trials.max(1) {
        let start = Instant::now();
        let c = kernel.multiply(black_box(a), black_box(b))?;
        let elapsed = start.elapsed();
        black_box(c);
        if elapsed < best {
            best = elapsed;
        }
    }
    Ok(best)
}
