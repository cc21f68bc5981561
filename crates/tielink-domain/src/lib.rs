//! Tielink Domain Layer
//!
//! This crate contains the value objects and trait interfaces shared by every
//! other Tielink crate. It has ZERO runtime dependencies and knows nothing
//! about storage, randomness or parallelism.
//!
//! ## Key Concepts
//!
//! - **NodeId**: Opaque, stable identifier of an entity in the communication graph
//! - **Edge**: Canonical (unordered) pair of nodes
//! - **CandidateEdge**: A labeled pair, positive (removed tie) or negative (sampled non-tie)
//! - **HeuristicVector**: The four topological similarity scores of a candidate pair
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - `Topology` and `BinaryClassifier` are the seams implemented by outer crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edge;
pub mod heuristic;
pub mod node;
pub mod traits;

// Re-exports for convenience
pub use edge::{CandidateEdge, Edge, EdgeLabel};
pub use heuristic::{FeatureRow, HeuristicVector, FEATURE_COUNT, FEATURE_NAMES};
pub use node::NodeId;
pub use traits::{BinaryClassifier, Topology};
