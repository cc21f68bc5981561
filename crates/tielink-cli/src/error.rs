//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed table row
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        /// Table file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// Required column absent from a table header
    #[error("{}: missing column '{column}'", .path.display())]
    MissingColumn {
        /// Table file
        path: PathBuf,
        /// Expected column name
        column: String,
    },

    /// Graph construction error
    #[error("Graph error: {0}")]
    Graph(#[from] tielink_graph::GraphError),

    /// Dataset export error
    #[error("Dataset error: {0}")]
    Dataset(#[from] tielink_dataset::DatasetError),

    /// Pipeline error
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] tielink_pipeline::PipelineError),
}
