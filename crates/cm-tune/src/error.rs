use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TuneError {
    #[error("candidate block size list is empty")]
    EmptyCandidates,
    #[error("invalid candidate block size: {0}")]
    InvalidCandidate(usize),
    #[error("matrix error: {0}")]
    Matrix(#[from] cm_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, TuneError>;
