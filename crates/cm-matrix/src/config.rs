use crate::error::{MatrixError, Result};
use std::fmt;

/// Block extent used for every dimension when no tuning result is supplied.
pub const DEFAULT_BLOCK: usize = 32;

/// Tile extents for the blocked multiply kernel.
///
/// - `block_m`: rows of A / rows of C per tile
/// - `block_n`: columns of B / columns of C per tile
/// - `block_k`: reduction-dimension extent per tile
///
/// All extents are positive; the only way to build a config is through
/// `new` (which checks) or `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatmulConfig {
    block_m: usize,
    block_n: usize,
    block_k: usize,
}

impl MatmulConfig {
    /// Create a config from explicit block extents.
    ///
    /// # Errors
    /// Returns `InvalidBlockSize` if any extent is zero.
    pub fn new(block_m: usize, block_n: usize, block_k: usize) -> Result<Self> {
        for (dim, value) in [("blockM", block_m), ("blockN", block_n), ("blockK", block_k)] {
            if value == 0 {
                return Err(MatrixError::InvalidBlockSize { dim, value });
            }
        }
        Ok(MatmulConfig {
            block_m,
            block_n,
            block_k,
        })
    }

    pub fn block_m(&self) -> usize {
        self.block_m
    }

    pub fn block_n(&self) -> usize {
        self.block_n
    }

    pub fn block_k(&self) -> usize {
        self.block_k
    }
}

impl Default for MatmulConfig {
    fn default() -> Self {
        MatmulConfig {
            block_m: DEFAULT_BLOCK,
            block_n: DEFAULT_BLOCK,
            block_k: DEFAULT_BLOCK,
        }
    }
}

impl fmt::Display for MatmulConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "blockM={}, blockN={}, blockK={}",
            self.block_m, self.block_n, self.block_k
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = MatmulConfig::default();
        assert_eq!((c.block_m(), c.block_n(), c.block_k()), (32, 32, 32));
    }

    #[test]
    fn test_new() {
        let c = MatmulConfig::new(16, 64, 128).unwrap();
        assert_eq!(c.block_m(), 16);
        assert_eq!(c.block_n(), 64);
        assert_eq!(c.block_k(), 128);
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(
            MatmulConfig::new(16, 0, 16).unwrap_err(),
            MatrixError::InvalidBlockSize {
                dim: "blockN",
                value: 0
            }
        );
        assert!(MatmulConfig::new(0, 1, 1).is_err());
        assert!(MatmulConfig::new(1, 1, 0).is_err());
    }

    #[test]
    fn test_display() {
        let c = MatmulConfig::new(16, 32, 64).unwrap();
        assert_eq!(c.to_string(), "blockM=16, blockN=32, blockK=64");
    }
}
