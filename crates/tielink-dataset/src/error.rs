//! Dataset error types

use thiserror::Error;

/// Errors that can occur while assembling, splitting or writing a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Train fraction outside (0, 1), or one side of the split would be empty
    #[error("Invalid split: train fraction {fraction} over {rows} rows")]
    InvalidSplit {
        /// Requested train fraction
        fraction: f64,
        /// Rows in the dataset
        rows: usize,
    },

    /// Candidates and heuristic vectors do not pair up
    #[error("Length mismatch: {candidates} candidates but {vectors} heuristic vectors")]
    LengthMismatch {
        /// Number of candidate pairs
        candidates: usize,
        /// Number of heuristic vectors
        vectors: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
