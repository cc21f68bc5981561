//! Sampler error types

use thiserror::Error;
use tielink_graph::GraphError;

/// Errors that can occur during edge sampling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// Negative sampling could not reach its target
    ///
    /// Recoverable: retry with a lower degree threshold or a smaller target.
    #[error(
        "Sampling exhausted: collected {collected} of {target} negative pairs \
         after {attempts} attempts ({eligible_nodes} eligible nodes)"
    )]
    SamplingExhausted {
        /// Number of negative pairs requested
        target: usize,
        /// Number collected before giving up
        collected: usize,
        /// Draws spent
        attempts: u64,
        /// Nodes above the degree threshold
        eligible_nodes: usize,
    },

    /// Graph query error
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
