//! Batch scoring of candidate pairs

use crate::metrics::heuristic_vector;
use crate::{CachedTopology, HeuristicConfig, HeuristicError};
use rayon::prelude::*;
use std::fmt::Display;
use tielink_domain::{CandidateEdge, HeuristicVector, Topology};

/// Scores candidate pairs against a reference graph
///
/// Rows are independent: each reads the shared, immutable topology and
/// writes only its own output, so they are scored in parallel when
/// `HeuristicConfig::parallel` is set. Output order always matches input
/// order.
pub struct HeuristicEngine {
    config: HeuristicConfig,
}

impl HeuristicEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(HeuristicConfig::default())
    }

    /// Get the engine configuration
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Score every candidate, reporting failures per row
    ///
    /// The outer `Result` fails only when the batch cannot start (invalid
    /// configuration or an endpoint missing from `graph`). Row-level
    /// failures such as `DegenerateDegree` are returned in place.
    pub fn compute_rows<G>(
        &self,
        graph: &G,
        candidates: &[CandidateEdge],
    ) -> Result<Vec<Result<HeuristicVector, HeuristicError>>, HeuristicError>
    where
        G: Topology,
        G::Error: Display,
    {
        self.config.validate().map_err(HeuristicError::Config)?;

        let cache = CachedTopology::build(graph, candidates)?;
        let policy = self.config.degenerate_degree;
        let score = |candidate: &CandidateEdge| {
            heuristic_vector(&cache, candidate.from, candidate.to, policy)
        };

        let rows: Vec<_> = if self.config.parallel {
            candidates.par_iter().map(score).collect()
        } else {
            candidates.iter().map(score).collect()
        };

        let failed = rows.iter().filter(|row| row.is_err()).count();
        tracing::info!(
            "Scored {} candidate pairs ({} failed)",
            rows.len(),
            failed
        );

        Ok(rows)
    }

    /// Score every candidate, failing on the first row error
    ///
    /// Never returns a partially computed batch.
    pub fn compute_batch<G>(
        &self,
        graph: &G,
        candidates: &[CandidateEdge],
    ) -> Result<Vec<HeuristicVector>, HeuristicError>
    where
        G: Topology,
        G::Error: Display,
    {
        self.compute_rows(graph, candidates)?.into_iter().collect()
    }
}
