//! End-to-end pipeline scenarios

use proptest::prelude::*;
use std::collections::HashSet;
use tielink_domain::{CandidateEdge, Edge, HeuristicVector, NodeId};
use tielink_evaluator::LogisticRegression;
use tielink_graph::{Graph, MissingEdgePolicy};
use tielink_heuristics::HeuristicEngine;
use tielink_pipeline::{Pipeline, PipelineConfig, PipelineError, Stage};
use tielink_sampler::SamplerError;

fn n(v: u64) -> NodeId {
    NodeId::new(v)
}

fn ring(size: u64) -> Graph {
    Graph::from_edges((1..=size).map(|i| (n(i), n(i % size + 1))))
}

/// Two 6-cliques joined by a bridge
fn clusters() -> Graph {
    let mut pairs = Vec::new();
    for base in [0u64, 10] {
        for i in 1..=6 {
            for j in (i + 1)..=6 {
                pairs.push((n(base + i), n(base + j)));
            }
        }
    }
    pairs.push((n(1), n(11)));
    Graph::from_edges(pairs)
}

fn ring_config() -> PipelineConfig {
    let mut config = PipelineConfig::small_graph();
    config.sampler.positive_fraction = 0.2;
    config
}

fn cluster_config(seed: u64) -> PipelineConfig {
    let mut config = PipelineConfig::small_graph();
    config.seed = seed;
    config.sampler.positive_fraction = 0.3;
    config
}

#[test]
fn test_ring_removed_edge_scores() {
    let prepared = Pipeline::new(ring_config()).prepare(&ring(5)).unwrap();

    assert_eq!(prepared.dataset.len(), 2);
    let positive = prepared.dataset.rows()[0];
    assert_eq!(positive.label, 1);
    // Both endpoints lose their shared tie and keep one other neighbor
    assert_eq!(positive.common_neighbors, 0);
    assert_eq!(positive.pref_attachment, 1);
    assert_eq!(positive.jaccard, 0.0);
    assert_eq!(positive.adamic_adar, 0.0);

    assert_eq!(prepared.split.train.len(), 1);
    assert_eq!(prepared.split.test.len(), 1);
    assert_eq!(prepared.report.reference_edges, 4);
}

#[test]
fn test_isolated_pair_scores_zero() {
    let graph = Graph::from_tables([n(1), n(2), n(3), n(4)], [(n(3), n(4))]).unwrap();
    let vectors = HeuristicEngine::default_config()
        .compute_batch(&graph, &[CandidateEdge::negative(n(1), n(2))])
        .unwrap();
    assert_eq!(vectors, vec![HeuristicVector::default()]);
}

#[test]
fn test_threshold_above_max_degree_exhausts() {
    let mut config = ring_config();
    config.sampler.degree_threshold = 15;

    let error = Pipeline::new(config).prepare(&ring(5)).unwrap_err();
    assert_eq!(error.stage(), Stage::Sampling);
    assert!(matches!(
        error,
        PipelineError::Sampling(SamplerError::SamplingExhausted {
            eligible_nodes: 0,
            ..
        })
    ));
    assert!(error.to_string().contains("sampling stage failed"));
}

#[test]
fn test_same_seed_same_run() {
    let graph = clusters();
    let first = Pipeline::new(cluster_config(11)).prepare(&graph).unwrap();
    let second = Pipeline::new(cluster_config(11)).prepare(&graph).unwrap();

    assert_eq!(first.dataset, second.dataset);
    assert_eq!(first.split, second.split);
    assert_eq!(first.report.split_seed, second.report.split_seed);
}

#[test]
fn test_full_run_with_logistic_regression() {
    let graph = clusters();
    let output = Pipeline::new(cluster_config(42))
        .run(&graph, LogisticRegression::new())
        .unwrap();

    let positives = output.report.sampling.positives;
    assert_eq!(positives, 9);
    assert_eq!(output.report.sampling.negatives, positives);
    assert_eq!(output.dataset.len(), 2 * positives);
    assert_eq!(
        output.split.train.len() + output.split.test.len(),
        output.dataset.len()
    );
    assert_eq!(output.confusion.total(), output.split.test.len());
    assert_eq!(output.report.confusion, Some(output.confusion));

    let json = serde_json::to_value(&output.report).unwrap();
    assert_eq!(json["seed"], 42);
    assert_eq!(json["sampling"]["positives"], 9);
    assert!(json["confusion"].is_object());
    assert!(output.report.summary().contains("Confusion Matrix"));
}

#[test]
fn test_missing_edge_policy_does_not_change_output() {
    let graph = clusters();
    let strict = Pipeline::new(cluster_config(5)).prepare(&graph).unwrap();

    let mut config = cluster_config(5);
    config.missing_edge_policy = MissingEdgePolicy::Ignore;
    let lenient = Pipeline::new(config).prepare(&graph).unwrap();

    assert_eq!(strict.dataset, lenient.dataset);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: classes are disjoint, correctly labeled and split exactly
    #[test]
    fn test_sample_properties(seed in any::<u64>()) {
        let graph = clusters();
        let original: HashSet<Edge> = graph.edges().iter().copied().collect();
        let prepared = Pipeline::new(cluster_config(seed)).prepare(&graph).unwrap();

        let mut seen = HashSet::new();
        for row in prepared.dataset.rows() {
            let edge = Edge::new(n(row.from), n(row.to));
            prop_assert!(seen.insert(edge));
            prop_assert_eq!(original.contains(&edge), row.label == 1);
            prop_assert!(row.heuristics().is_well_formed());
        }

        prop_assert_eq!(
            prepared.split.train.len() + prepared.split.test.len(),
            prepared.dataset.len()
        );
    }
}
