//! Tielink Dataset
//!
//! Flat, labeled rows ready for a binary classifier.
//!
//! This crate provides:
//! - `Dataset`: one row per candidate pair (endpoints, four heuristics, label)
//! - `split`: a seeded, exact train/test partition
//! - JSON Lines export of the rows
//!
//! # Examples
//!
//! ```
//! use tielink_dataset::{split, Dataset};
//! use tielink_domain::{CandidateEdge, Edge, HeuristicVector, NodeId};
//!
//! let n = NodeId::new;
//! let candidates: Vec<_> = (0..10)
//!     .map(|i| CandidateEdge::positive(Edge::new(n(i), n(i + 100))))
//!     .collect();
//! let vectors = vec![HeuristicVector::default(); candidates.len()];
//!
//! let dataset = Dataset::from_rows(&candidates, &vectors).unwrap();
//! let parts = split(&dataset, 0.8, 42).unwrap();
//! assert_eq!(parts.train.len(), 8);
//! assert_eq!(parts.test.len(), 2);
//! ```

#![warn(missing_docs)]

mod dataset;
mod error;
mod split;

pub use dataset::{Dataset, DatasetRow, LabelBalance};
pub use error::DatasetError;
pub use split::{split, Split};
