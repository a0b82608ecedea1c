use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("data length {len} does not match {rows}x{cols} matrix")]
    DataLength { len: usize, rows: usize, cols: usize },
    #[error("matrix shape {rows}x{cols} overflows the addressable element count")]
    ShapeOverflow { rows: usize, cols: usize },
    #[error("invalid block size {value} for {dim}: block sizes must be positive")]
    InvalidBlockSize { dim: &'static str, value: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
