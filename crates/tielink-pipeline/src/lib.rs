//! Tielink Pipeline
//!
//! Runs the whole link-prediction experiment on one graph: sample the two
//! classes, score every candidate against the reference graph, assemble and
//! split the dataset, then fit and evaluate a classifier.
//!
//! One `seed` in [`PipelineConfig`] drives every random draw, so a run is
//! reproducible from its configuration alone.
//!
//! # Examples
//!
//! ```
//! use tielink_domain::NodeId;
//! use tielink_evaluator::LogisticRegression;
//! use tielink_graph::Graph;
//! use tielink_pipeline::{Pipeline, PipelineConfig};
//!
//! let n = NodeId::new;
//! // Two 6-cliques joined by a bridge
//! let mut pairs = Vec::new();
//! for base in [0u64, 10] {
//!     for i in 1..=6 {
//!         for j in (i + 1)..=6 {
//!             pairs.push((n(base + i), n(base + j)));
//!         }
//!     }
//! }
//! pairs.push((n(1), n(11)));
//! let graph = Graph::from_edges(pairs);
//!
//! let mut config = PipelineConfig::small_graph();
//! config.sampler.positive_fraction = 0.3;
//!
//! let output = Pipeline::new(config).run(&graph, LogisticRegression::new()).unwrap();
//! assert_eq!(output.dataset.len(), 2 * output.report.sampling.positives);
//! assert_eq!(output.confusion.total(), output.split.test.len());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;
mod report;

pub use config::PipelineConfig;
pub use error::{PipelineError, Stage};
pub use pipeline::{Pipeline, PipelineOutput, PreparedData};
pub use report::PipelineReport;
