//! Integration tests for dataset assembly, splitting and export

use proptest::prelude::*;
use std::fs;
use tielink_dataset::{split, Dataset, DatasetRow};
use tielink_domain::{CandidateEdge, Edge, HeuristicVector, NodeId};

fn mixed(positives: u64, negatives: u64) -> Dataset {
    let n = NodeId::new;
    let candidates: Vec<_> = (0..positives)
        .map(|i| CandidateEdge::positive(Edge::new(n(i), n(i + 1))))
        .chain((0..negatives).map(|i| CandidateEdge::negative(n(i), n(i + 500))))
        .collect();
    let vectors: Vec<_> = (0..candidates.len() as u64)
        .map(|i| HeuristicVector {
            common_neighbors: i % 3,
            jaccard: 0.1,
            adamic_adar: 0.2,
            pref_attachment: i,
        })
        .collect();
    Dataset::from_rows(&candidates, &vectors).unwrap()
}

#[test]
fn test_save_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.jsonl");

    let dataset = mixed(3, 4);
    dataset.save_json_lines(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let rows: Vec<DatasetRow> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows, dataset.rows());
}

#[test]
fn test_split_keeps_labels_with_rows() {
    let dataset = mixed(20, 20);
    let parts = split(&dataset, 0.8, 42).unwrap();

    let train = parts.train.label_balance();
    let test = parts.test.label_balance();
    assert_eq!(train.positives + test.positives, 20);
    assert_eq!(train.negatives + test.negatives, 20);
    assert_eq!(parts.train.labels().len(), parts.train.features().len());
}

proptest! {
    /// Property: the split is an exact partition of the rows
    #[test]
    fn test_split_partition(
        positives in 1u64..40,
        negatives in 1u64..40,
        fraction in 0.1f64..0.9,
        seed in any::<u64>(),
    ) {
        let dataset = mixed(positives, negatives);
        let rows = dataset.len();
        let train_len = (fraction * rows as f64).floor() as usize;
        prop_assume!(train_len > 0 && train_len < rows);

        let parts = split(&dataset, fraction, seed).unwrap();
        prop_assert_eq!(parts.train.len() + parts.test.len(), rows);
        prop_assert_eq!(parts.train.len(), train_len);

        let mut seen = vec![false; rows];
        for &i in parts.train_indices.iter().chain(&parts.test_indices) {
            prop_assert!(!seen[i]);
            seen[i] = true;
        }
        prop_assert!(seen.iter().all(|&s| s));
    }
}
