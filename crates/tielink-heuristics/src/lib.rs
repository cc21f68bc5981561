//! Tielink Heuristic Engine
//!
//! Computes topological similarity scores for candidate pairs against a
//! reference graph (the graph with positive ties removed).
//!
//! # Metrics
//!
//! | Metric | Formula | Empty case |
//! |--------|---------|------------|
//! | Common neighbors | `|N(u) ∩ N(v)|` | 0 |
//! | Jaccard | `|N(u) ∩ N(v)| / |N(u) ∪ N(v)|` | 0 when the union is empty |
//! | Adamic-Adar | `Σ 1 / ln d(w)` over shared neighbors `w` | 0 |
//! | Preferential attachment | `d(u) · d(v)` | 0 |
//!
//! A shared neighbor of degree 1 would divide by `ln 1 = 0`; what happens
//! instead is chosen by [`DegenerateDegreePolicy`].
//!
//! # Example Usage
//!
//! ```
//! use tielink_domain::{CandidateEdge, NodeId};
//! use tielink_graph::Graph;
//! use tielink_heuristics::HeuristicEngine;
//!
//! let n = NodeId::new;
//! // Square 1-2-3-4 with diagonal 2-4
//! let graph = Graph::from_edges([
//!     (n(1), n(2)), (n(2), n(3)), (n(3), n(4)), (n(4), n(1)), (n(2), n(4)),
//! ]);
//!
//! let engine = HeuristicEngine::default_config();
//! let vectors = engine
//!     .compute_batch(&graph, &[CandidateEdge::negative(n(1), n(3))])
//!     .unwrap();
//!
//! assert_eq!(vectors[0].common_neighbors, 2);
//! assert_eq!(vectors[0].jaccard, 1.0);
//! assert_eq!(vectors[0].pref_attachment, 4);
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod engine;
mod error;
pub mod metrics;

pub use cache::{CacheMiss, CachedTopology};
pub use config::{DegenerateDegreePolicy, HeuristicConfig};
pub use engine::HeuristicEngine;
pub use error::HeuristicError;
