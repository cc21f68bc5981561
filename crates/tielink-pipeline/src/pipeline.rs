//! Stage orchestration

use crate::{PipelineConfig, PipelineError, PipelineReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Display;
use std::time::Instant;
use tielink_dataset::{split, Dataset, LabelBalance, Split};
use tielink_domain::BinaryClassifier;
use tielink_evaluator::{ConfusionMatrix, Evaluator};
use tielink_graph::Graph;
use tielink_heuristics::HeuristicEngine;
use tielink_sampler::EdgeSampler;

/// Minority-class share below which a split part is reported as imbalanced
const IMBALANCE_WARNING_SHARE: f64 = 0.25;

/// Dataset and split, ready for a classifier
#[derive(Debug, Clone)]
pub struct PreparedData {
    /// Every labeled row, positives first
    pub dataset: Dataset,

    /// Train/test partition of `dataset`
    pub split: Split,

    /// Report with every field but `confusion` filled in
    pub report: PipelineReport,
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Every labeled row, positives first
    pub dataset: Dataset,

    /// Train/test partition of `dataset`
    pub split: Split,

    /// Test-set results
    pub confusion: ConfusionMatrix,

    /// Run report
    pub report: PipelineReport,
}

/// Link-prediction pipeline
///
/// Runs, in order:
/// 1. Sampling: positives removed from the graph, negatives drawn from
///    high-degree non-adjacent pairs
/// 2. Heuristics: four scores per candidate against the reference graph
/// 3. Dataset: rows assembled and split into train and test parts
/// 4. Evaluation: classifier fitted on train, scored on test
///
/// The first failing stage aborts the run; no partial output is returned.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline with default configuration
    pub fn default_config() -> Self {
        Self::new(PipelineConfig::default())
    }

    /// Get the pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage up to and including the split
    pub fn prepare(&self, graph: &Graph) -> Result<PreparedData, PipelineError> {
        let start = Instant::now();
        self.config.validate().map_err(PipelineError::Config)?;

        let mut rng = StdRng::seed_from_u64(self.config.seed);

        tracing::info!(
            "Sampling candidates from {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        let sampler = EdgeSampler::new(self.config.sampler.clone());
        let sampled =
            sampler.sample_with_policy(graph, self.config.missing_edge_policy, &mut rng)?;
        let split_seed: u64 = rng.gen();

        let candidates = sampled.candidates();
        tracing::info!(
            "Scoring {} candidates against the reference graph ({} edges)",
            candidates.len(),
            sampled.reference.edge_count()
        );
        let engine = HeuristicEngine::new(self.config.heuristics.clone());
        let vectors = engine.compute_batch(&sampled.reference, &candidates)?;

        let dataset = Dataset::from_rows(&candidates, &vectors)?;
        let split = split(&dataset, self.config.train_fraction, split_seed)?;

        let train_balance = split.train.label_balance();
        let test_balance = split.test.label_balance();
        warn_if_imbalanced("train", &train_balance);
        warn_if_imbalanced("test", &test_balance);
        tracing::info!(
            "Dataset has {} rows: {} train, {} test",
            dataset.len(),
            split.train.len(),
            split.test.len()
        );

        let report = PipelineReport {
            seed: self.config.seed,
            split_seed,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            reference_edges: sampled.reference.edge_count(),
            simplified: graph.simplify_report(),
            sampling: sampled.stats,
            rows: dataset.len(),
            train_balance,
            test_balance,
            confusion: None,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        Ok(PreparedData {
            dataset,
            split,
            report,
        })
    }

    /// Run every stage and evaluate `classifier` on the held-out rows
    pub fn run<C>(&self, graph: &Graph, classifier: C) -> Result<PipelineOutput, PipelineError>
    where
        C: BinaryClassifier,
        C::Error: Display,
    {
        let start = Instant::now();
        let PreparedData {
            dataset,
            split,
            mut report,
        } = self.prepare(graph)?;

        let confusion = Evaluator::new(classifier).evaluate(&split.train, &split.test)?;

        report.confusion = Some(confusion);
        report.elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!("Pipeline finished in {}ms", report.elapsed_ms);

        Ok(PipelineOutput {
            dataset,
            split,
            confusion,
            report,
        })
    }
}

fn warn_if_imbalanced(part: &str, balance: &LabelBalance) {
    match balance.minority_share() {
        Some(share) if share < IMBALANCE_WARNING_SHARE => tracing::warn!(
            "Imbalanced {} part: {} positive, {} negative",
            part,
            balance.positives,
            balance.negatives
        ),
        _ => {}
    }
}
