//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates.

use crate::{FeatureRow, NodeId};

/// Read-only neighborhood queries over an undirected graph
///
/// Implemented by the graph layer (tielink-graph) and consumed by the
/// heuristic layer (tielink-heuristics).
pub trait Topology {
    /// Error type for topology queries
    type Error;

    /// Whether the node is part of the graph
    fn contains_node(&self, node: NodeId) -> bool;

    /// Neighbors of a node, sorted ascending
    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], Self::Error>;

    /// Number of neighbors of a node
    fn degree(&self, node: NodeId) -> Result<usize, Self::Error> {
        self.neighbors(node).map(<[NodeId]>::len)
    }

    /// Whether two nodes share an edge
    fn are_adjacent(&self, u: NodeId, v: NodeId) -> Result<bool, Self::Error>;
}

/// Binary classifier consuming heuristic feature rows
///
/// Implemented by the evaluation layer (tielink-evaluator) and by any
/// external model family that can score a feature matrix.
pub trait BinaryClassifier {
    /// Trained model produced by `fit`
    type Model;

    /// Error type for training and scoring
    type Error;

    /// Train on feature rows with 0/1 labels
    fn fit(&self, features: &[FeatureRow], labels: &[u8]) -> Result<Self::Model, Self::Error>;

    /// Probability of label 1 for each feature row
    fn predict_proba(
        &self,
        model: &Self::Model,
        features: &[FeatureRow],
    ) -> Result<Vec<f64>, Self::Error>;
}
