//! Positive and negative edge sampling

use crate::{SamplerConfig, SamplerError};
use rand::seq::index;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use tielink_domain::{CandidateEdge, Edge, NodeId};
use tielink_graph::{Graph, GraphError, MissingEdgePolicy};

/// Why a drawn negative pair was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Both draws picked the same node
    SameNode,

    /// The pair is a tie in the original graph
    Adjacent,

    /// The unordered pair was already accepted
    Duplicate,
}

/// Counters collected while sampling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SamplingStats {
    /// Edges removed and labeled positive
    pub positives: usize,

    /// Pairs accepted as negatives
    pub negatives: usize,

    /// Nodes whose original degree exceeds the threshold
    pub eligible_nodes: usize,

    /// Pair draws spent on negative sampling
    pub attempts: u64,

    /// Draws rejected because both endpoints were the same node
    pub rejected_same_node: u64,

    /// Draws rejected because the pair is an original tie
    pub rejected_adjacent: u64,

    /// Draws rejected because the pair was already accepted
    pub rejected_duplicate: u64,
}

impl SamplingStats {
    /// Record a rejected draw
    pub fn record_rejection(&mut self, reason: RejectionReason) {
        match reason {
            RejectionReason::SameNode => self.rejected_same_node += 1,
            RejectionReason::Adjacent => self.rejected_adjacent += 1,
            RejectionReason::Duplicate => self.rejected_duplicate += 1,
        }
    }

    /// Total rejected draws
    pub fn total_rejected(&self) -> u64 {
        self.rejected_same_node + self.rejected_adjacent + self.rejected_duplicate
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let lines = vec![
            "Sampling Summary".to_string(),
            "================".to_string(),
            format!("Positives: {}", self.positives),
            format!("Negatives: {}", self.negatives),
            format!("Eligible nodes: {}", self.eligible_nodes),
            format!("Attempts: {}", self.attempts),
            format!(
                "Rejected: {} (same node {}, adjacent {}, duplicate {})",
                self.total_rejected(),
                self.rejected_same_node,
                self.rejected_adjacent,
                self.rejected_duplicate
            ),
        ];
        lines.join("\n")
    }
}

/// Both classes of candidate pairs plus the reference graph
#[derive(Debug, Clone)]
pub struct SampledEdges {
    /// Removed ties, label 1
    pub positives: Vec<CandidateEdge>,

    /// Sampled non-ties, label 0
    pub negatives: Vec<CandidateEdge>,

    /// Original graph with every positive edge removed
    pub reference: Graph,

    /// Sampling counters
    pub stats: SamplingStats,
}

impl SampledEdges {
    /// All candidates, positives first
    pub fn candidates(&self) -> Vec<CandidateEdge> {
        self.positives
            .iter()
            .chain(&self.negatives)
            .copied()
            .collect()
    }
}

/// Draws the positive and negative classes from a graph
///
/// Every draw comes from the random source passed in, so a seeded source
/// makes the whole sample reproducible.
pub struct EdgeSampler {
    config: SamplerConfig,
}

impl EdgeSampler {
    /// Create a new sampler with the given configuration
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Create a sampler with default configuration
    pub fn default_config() -> Self {
        Self::new(SamplerConfig::default())
    }

    /// Get the sampler configuration
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Sample both classes and derive the reference graph
    ///
    /// The negative class has exactly as many pairs as the positive class.
    ///
    /// # Errors
    ///
    /// - `SamplerError::Config` for an invalid configuration
    /// - `SamplerError::SamplingExhausted` if negatives cannot be completed
    pub fn sample<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        rng: &mut R,
    ) -> Result<SampledEdges, SamplerError> {
        self.sample_with_policy(graph, MissingEdgePolicy::Fail, rng)
    }

    /// Like [`EdgeSampler::sample`], with an explicit policy for removing
    /// positives that are not in `graph`
    pub fn sample_with_policy<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        policy: MissingEdgePolicy,
        rng: &mut R,
    ) -> Result<SampledEdges, SamplerError> {
        self.config.validate().map_err(SamplerError::Config)?;

        let removed = self.sample_positive(graph, rng);
        let reference = graph.remove_edges(&removed, policy)?;
        tracing::info!(
            "Removed {} of {} edges as positives",
            removed.len(),
            graph.edge_count()
        );

        let mut stats = SamplingStats {
            positives: removed.len(),
            ..SamplingStats::default()
        };
        let negatives = self.sample_negative(graph, removed.len(), rng, &mut stats)?;

        Ok(SampledEdges {
            positives: removed.into_iter().map(CandidateEdge::positive).collect(),
            negatives,
            reference,
            stats,
        })
    }

    /// Select `⌊fraction · |E|⌋` distinct edges uniformly at random
    pub fn sample_positive<R: Rng + ?Sized>(&self, graph: &Graph, rng: &mut R) -> Vec<Edge> {
        let edges = graph.edges();
        let count = positive_count(edges.len(), self.config.positive_fraction);

        index::sample(rng, edges.len(), count)
            .into_iter()
            .map(|i| edges[i])
            .collect()
    }

    /// Rejection-sample `target` non-adjacent pairs among high-degree nodes
    ///
    /// Degrees and adjacency are read from `graph`, which must be the
    /// original graph (positives still present).
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::SamplingExhausted` without drawing when fewer
    /// than `target` valid pairs exist, and after `max_attempts` draws
    /// otherwise.
    pub fn sample_negative<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        target: usize,
        rng: &mut R,
        stats: &mut SamplingStats,
    ) -> Result<Vec<CandidateEdge>, SamplerError> {
        let threshold = self.config.degree_threshold;
        let eligible: Vec<NodeId> = graph
            .degrees()
            .filter(|&(_, degree)| degree > threshold)
            .map(|(node, _)| node)
            .collect();
        stats.eligible_nodes = eligible.len();

        if target == 0 {
            return Ok(Vec::new());
        }

        let capacity = non_adjacent_pairs(graph, &eligible);
        if capacity < target as u64 {
            tracing::warn!(
                "Only {} valid negative pairs among {} nodes with degree > {}, {} requested",
                capacity,
                eligible.len(),
                threshold,
                target
            );
            return Err(SamplerError::SamplingExhausted {
                target,
                collected: 0,
                attempts: 0,
                eligible_nodes: eligible.len(),
            });
        }

        let mut accepted = HashSet::with_capacity(target);
        let mut negatives = Vec::with_capacity(target);

        while negatives.len() < target {
            if stats.attempts >= self.config.max_attempts {
                return Err(SamplerError::SamplingExhausted {
                    target,
                    collected: negatives.len(),
                    attempts: stats.attempts,
                    eligible_nodes: eligible.len(),
                });
            }
            stats.attempts += 1;

            let u = eligible[rng.gen_range(0..eligible.len())];
            let v = eligible[rng.gen_range(0..eligible.len())];

            match check_pair(graph, u, v, &accepted)? {
                Some(reason) => stats.record_rejection(reason),
                None => {
                    accepted.insert(Edge::new(u, v));
                    negatives.push(CandidateEdge::negative(u, v));
                }
            }
        }
        stats.negatives = negatives.len();

        tracing::info!(
            "Sampled {} negatives in {} attempts ({} rejected)",
            negatives.len(),
            stats.attempts,
            stats.total_rejected()
        );

        Ok(negatives)
    }
}

/// Number of positives for an edge count and fraction
fn positive_count(edges: usize, fraction: f64) -> usize {
    ((fraction * edges as f64).floor() as usize).min(edges)
}

/// Unordered non-adjacent pairs among `eligible` in `graph`
fn non_adjacent_pairs(graph: &Graph, eligible: &[NodeId]) -> u64 {
    let k = eligible.len() as u64;
    if k < 2 {
        return 0;
    }

    let members: HashSet<NodeId> = eligible.iter().copied().collect();
    let internal = graph
        .edges()
        .iter()
        .filter(|edge| members.contains(&edge.low()) && members.contains(&edge.high()))
        .count() as u64;

    k * (k - 1) / 2 - internal
}

/// Acceptance test for a drawn pair
fn check_pair(
    graph: &Graph,
    u: NodeId,
    v: NodeId,
    accepted: &HashSet<Edge>,
) -> Result<Option<RejectionReason>, GraphError> {
    if u == v {
        return Ok(Some(RejectionReason::SameNode));
    }
    if graph.are_adjacent(u, v)? {
        return Ok(Some(RejectionReason::Adjacent));
    }
    if accepted.contains(&Edge::new(u, v)) {
        return Ok(Some(RejectionReason::Duplicate));
    }
    Ok(None)
}
