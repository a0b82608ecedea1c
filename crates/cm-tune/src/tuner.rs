use std::time::Duration;

use cm_matrix::{BlockedKernel, MatmulConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::bench;
use crate::error::{Result, TuneError};
use crate::operands::random_matrix;

/// Block sizes tried along each dimension.
pub const DEFAULT_CANDIDATES: [usize; 4] = [16, 32, 64, 128];
/// Seed for the synthetic operands.
pub const DEFAULT_SEED: u64 = 42;
/// Timed runs per candidate.
pub const DEFAULT_TRIALS: usize = 3;

/// The best observed time for one candidate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateTiming {
    pub config: MatmulConfig,
    pub best: Duration,
}

/// Outcome of a tuning run.
#[derive(Debug, Clone)]
pub struct TuneReport {
    /// The winning configuration.
    pub best: MatmulConfig,
    /// Its minimum time across trials.
    pub best_time: Duration,
    /// Every candidate in evaluation order.
    pub timings: Vec<CandidateTiming>,
}

/// Exhaustive grid search over block sizes for the blocked kernel.
///
/// Every `(block_m, block_n, block_k)` drawn from the candidate list is
/// evaluated, with `block_m` in the outer loop, `block_n` in the middle and
/// `block_k` innermost. The lowest minimum time wins; on a tie the first
/// candidate in that order is kept.
///
/// Cost is `candidates^3 * (trials + 1)` full multiplies of the requested
/// size, so large shapes with the default candidate list take a while.
#[derive(Debug, Clone)]
pub struct Autotuner {
    candidates: Vec<usize>,
    trials: usize,
    seed: u64,
}

impl Autotuner {
    /// Create a tuner with the default candidates, trial count and seed.
    pub fn new() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.to_vec(),
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
        }
    }

    /// Replace the candidate block sizes.
    ///
    /// # Errors
    /// Returns `EmptyCandidates` for an empty list and `InvalidCandidate`
    /// for a zero block size.
    pub fn with_candidates(mut self, candidates: &[usize]) -> Result<Self> {
        if candidates.is_empty() {
            return Err(TuneError::EmptyCandidates);
        }
        if let Some(&bad) = candidates.iter().find(|&&c| c == 0) {
            return Err(TuneError::InvalidCandidate(bad));
        }
        self.candidates = candidates.to_vec();
        Ok(self)
    }

    /// Number of timed runs per candidate. Zero is treated as one.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    /// Seed for the synthetic operands.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All candidate configurations in evaluation order.
    pub fn configs(&self) -> Result<Vec<MatmulConfig>> {
        let mut configs = Vec::with_capacity(self.candidates.len().pow(3));
        for &bm in &self.candidates {
            for &bn in &self.candidates {
                for &bk in &self.candidates {
                    configs.push(MatmulConfig::new(bm, bn, bk)?);
                }
            }
        }
        Ok(configs)
    }

    /// Time every candidate on seeded `m x k` and `k x n` operands.
    pub fn tune(&self, m: usize, n: usize, k: usize) -> Result<TuneReport> {
        // Local generator: every call sees the same operands.
        let mut rng = StdRng::seed_from_u64(self.seed);
        let a = random_matrix(m, k, &mut rng)?;
        let b = random_matrix(k, n, &mut rng)?;

        info!(
            m,
            n,
            k,
            candidates = ?self.candidates,
            trials = self.trials,
            "autotuning blocked matmul"
        );

        self.search_with(|config| {
            debug!(%config, "testing config");
            let kernel = BlockedKernel::new(*config);
            Ok(bench::min_time(&kernel, &a, &b, self.trials)?)
        })
    }

    /// Run the grid search with a caller-supplied scoring function.
    ///
    /// `score` is called once per candidate in evaluation order; lower is
    /// better. The first error aborts the search.
    pub fn search_with<F>(&self, mut score: F) -> Result<TuneReport>
    where
        F: FnMut(&MatmulConfig) -> Result<Duration>,
    {
        let configs = self.configs()?;
        let mut timings = Vec::with_capacity(configs.len());
        let mut winner: Option<CandidateTiming> = None;

        for config in configs {
            let timing = CandidateTiming {
                config,
                best: score(&config)?,
            };
            timings.push(timing);
            // Strict comparison keeps the earliest candidate on ties.
            if winner.map_or(true, |w| timing.best < w.best) {
                winner = Some(timing);
            }
        }

        // Only reachable if the candidate list is empty, which
        // `with_candidates` already rejects.
        let winner = winner.ok_or(TuneError::EmptyCandidates)?;
        info!(config = %winner.config, time = ?winner.best, "selected config");

        Ok(TuneReport {
            best: winner.config,
            best_time: winner.best,
            timings,
        })
    }
}

impl Default for Autotuner {
    fn default() -> Self {
        Self::new()
    }
}

/// Tune an `m x k` @ `k x n` multiply with the default candidates and seed.
pub fn autotune(m: usize, n: usize, k: usize, trials: usize) -> Result<MatmulConfig> {
    Ok(Autotuner::new().with_trials(trials).tune(m, n, k)?.best)
}
