//! Error types for heuristic computation

use thiserror::Error;
use tielink_domain::NodeId;

/// Errors that can occur while scoring candidate pairs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeuristicError {
    /// Candidate endpoint is not part of the reference graph
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// Shared neighbor of degree 1 under `DegenerateDegreePolicy::Fail`
    #[error("Degenerate degree: shared neighbor {node} of pair {from}-{to} has degree 1")]
    DegenerateDegree {
        /// The degree-1 shared neighbor
        node: NodeId,
        /// First endpoint of the pair
        from: NodeId,
        /// Second endpoint of the pair
        to: NodeId,
    },

    /// Error reported by the underlying topology
    #[error("Topology error: {0}")]
    Topology(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
