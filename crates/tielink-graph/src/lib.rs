//! Tielink Graph Layer
//!
//! Immutable, simplified, undirected graph implementing the `Topology` trait.
//!
//! # Architecture
//!
//! - Adjacency lists kept sorted for two-pointer intersections and
//!   binary-search adjacency tests
//! - Simplification (self-loop and parallel edge removal) runs once, at
//!   construction
//! - Edge removal produces a new graph; the source is never mutated
//!
//! # Examples
//!
//! ```
//! use tielink_domain::{Edge, NodeId, Topology};
//! use tielink_graph::{Graph, MissingEdgePolicy};
//!
//! let n = NodeId::new;
//! let graph = Graph::from_edges([(n(1), n(2)), (n(2), n(3)), (n(2), n(1))]);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.simplify_report().duplicate_edges, 1);
//!
//! let reference = graph
//!     .remove_edges(&[Edge::new(n(1), n(2))], MissingEdgePolicy::Fail)
//!     .unwrap();
//! assert!(!reference.are_adjacent(n(1), n(2)).unwrap());
//! assert!(graph.are_adjacent(n(1), n(2)).unwrap());
//! ```

#![warn(missing_docs)]

mod error;
mod graph;
mod stats;

pub use error::GraphError;
pub use graph::{Graph, MissingEdgePolicy, SimplifyReport};
pub use stats::GraphSummary;
