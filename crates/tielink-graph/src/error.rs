//! Error types for graph operations

use thiserror::Error;
use tielink_domain::NodeId;

/// Errors that can occur during graph queries and derivations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node is not part of the graph
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// Edge scheduled for removal does not exist
    #[error("Edge not found: {0}-{1}")]
    EdgeNotFound(NodeId, NodeId),
}
