//! Run report

use serde::Serialize;
use tielink_dataset::LabelBalance;
use tielink_evaluator::ConfusionMatrix;
use tielink_graph::SimplifyReport;
use tielink_sampler::SamplingStats;

/// What a pipeline run did, stage by stage
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineReport {
    /// Seed the run started from
    pub seed: u64,

    /// Seed drawn for the train/test split
    pub split_seed: u64,

    /// Nodes in the input graph
    pub nodes: usize,

    /// Edges in the input graph
    pub edges: usize,

    /// Edges left in the reference graph
    pub reference_edges: usize,

    /// Rows dropped while building the input graph
    pub simplified: SimplifyReport,

    /// Sampling counters
    pub sampling: SamplingStats,

    /// Rows in the dataset
    pub rows: usize,

    /// Class counts of the training part
    pub train_balance: LabelBalance,

    /// Class counts of the test part
    pub test_balance: LabelBalance,

    /// Test-set results, once evaluation has run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confusion: Option<ConfusionMatrix>,

    /// Wall-clock time of the run in milliseconds
    pub elapsed_ms: u64,
}

impl PipelineReport {
    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Pipeline Summary".to_string(),
            "================".to_string(),
            format!("Seed: {} (split seed {})", self.seed, self.split_seed),
            format!("Graph: {} nodes, {} edges", self.nodes, self.edges),
            format!("Reference graph: {} edges", self.reference_edges),
        ];

        if self.simplified.total_dropped() > 0 {
            lines.push(format!(
                "Dropped on load: {} self-loops, {} duplicate edges, {} duplicate nodes",
                self.simplified.self_loops,
                self.simplified.duplicate_edges,
                self.simplified.duplicate_nodes
            ));
        }

        lines.push(format!(
            "Candidates: {} positive, {} negative ({} attempts, {} rejected)",
            self.sampling.positives,
            self.sampling.negatives,
            self.sampling.attempts,
            self.sampling.total_rejected()
        ));
        lines.push(format!(
            "Dataset: {} rows; train {} (+{} / -{}), test {} (+{} / -{})",
            self.rows,
            self.train_balance.total(),
            self.train_balance.positives,
            self.train_balance.negatives,
            self.test_balance.total(),
            self.test_balance.positives,
            self.test_balance.negatives
        ));
        lines.push(format!("Total runtime: {}ms", self.elapsed_ms));

        if let Some(confusion) = &self.confusion {
            lines.push(String::new());
            lines.push(confusion.summary());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_sections() {
        let report = PipelineReport {
            seed: 42,
            split_seed: 7,
            nodes: 10,
            edges: 20,
            reference_edges: 18,
            rows: 4,
            ..Default::default()
        };
        let summary = report.summary();
        assert!(summary.contains("Seed: 42 (split seed 7)"));
        assert!(summary.contains("Graph: 10 nodes, 20 edges"));
        assert!(!summary.contains("Dropped on load"));
        assert!(!summary.contains("Confusion Matrix"));

        let report = PipelineReport {
            simplified: SimplifyReport {
                self_loops: 1,
                ..Default::default()
            },
            confusion: Some(ConfusionMatrix::default()),
            ..report
        };
        let summary = report.summary();
        assert!(summary.contains("1 self-loops"));
        assert!(summary.contains("Confusion Matrix"));
    }
}
