//! Tielink Edge Sampler
//!
//! Builds the two classes of the link-prediction dataset from one graph.
//!
//! The sampler provides:
//! - Positive sampling: a uniform random fraction of real edges, removed to
//!   form the reference graph
//! - Negative sampling: bounded rejection sampling of non-adjacent pairs
//!   among high-degree nodes, deduplicated on the unordered pair
//! - Sampling statistics (attempts and rejections per reason)
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tielink_domain::NodeId;
//! use tielink_graph::Graph;
//! use tielink_sampler::{EdgeSampler, SamplerConfig};
//!
//! let n = NodeId::new;
//! let ring = Graph::from_edges([
//!     (n(1), n(2)), (n(2), n(3)), (n(3), n(4)), (n(4), n(5)), (n(5), n(1)),
//! ]);
//!
//! let config = SamplerConfig { positive_fraction: 0.2, ..SamplerConfig::small_graph() };
//! let sampler = EdgeSampler::new(config);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let sampled = sampler.sample(&ring, &mut rng).unwrap();
//! assert_eq!(sampled.positives.len(), 1);
//! assert_eq!(sampled.negatives.len(), 1);
//! assert_eq!(sampled.reference.edge_count(), 4);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod sampler;

pub use config::SamplerConfig;
pub use error::SamplerError;
pub use sampler::{EdgeSampler, RejectionReason, SampledEdges, SamplingStats};
