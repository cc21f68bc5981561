//! Labeled candidate rows

use crate::DatasetError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tielink_domain::{CandidateEdge, EdgeLabel, FeatureRow, HeuristicVector};

/// One candidate pair with its heuristics and class label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// First endpoint
    pub from: u64,

    /// Second endpoint
    pub to: u64,

    /// Shared neighbors in the reference graph
    pub common_neighbors: u64,

    /// Jaccard coefficient in the reference graph
    pub jaccard: f64,

    /// Adamic-Adar index in the reference graph
    pub adamic_adar: f64,

    /// Degree product in the reference graph
    pub pref_attachment: u64,

    /// 1 for a real tie, 0 for a sampled non-tie
    pub label: u8,
}

impl DatasetRow {
    /// Combine a candidate and its heuristics
    pub fn new(candidate: &CandidateEdge, vector: &HeuristicVector) -> Self {
        Self {
            from: candidate.from.value(),
            to: candidate.to.value(),
            common_neighbors: vector.common_neighbors,
            jaccard: vector.jaccard,
            adamic_adar: vector.adamic_adar,
            pref_attachment: vector.pref_attachment,
            label: candidate.label.as_u8(),
        }
    }

    /// The heuristics as a feature row
    pub fn features(&self) -> FeatureRow {
        self.heuristics().features()
    }

    /// The heuristics as a vector
    pub fn heuristics(&self) -> HeuristicVector {
        HeuristicVector {
            common_neighbors: self.common_neighbors,
            jaccard: self.jaccard,
            adamic_adar: self.adamic_adar,
            pref_attachment: self.pref_attachment,
        }
    }

    /// Whether the row belongs to the positive class
    pub fn is_positive(&self) -> bool {
        EdgeLabel::from_u8(self.label) == Some(EdgeLabel::Positive)
    }
}

/// Class counts of a set of rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelBalance {
    /// Rows labeled 1
    pub positives: usize,

    /// Rows labeled 0
    pub negatives: usize,
}

impl LabelBalance {
    /// Total rows counted
    pub fn total(&self) -> usize {
        self.positives + self.negatives
    }

    /// Share of the smaller class, `None` for an empty set
    pub fn minority_share(&self) -> Option<f64> {
        if self.total() == 0 {
            return None;
        }
        Some(self.positives.min(self.negatives) as f64 / self.total() as f64)
    }

    /// Whether both classes are present
    pub fn has_both_classes(&self) -> bool {
        self.positives > 0 && self.negatives > 0
    }
}

/// Ordered collection of labeled rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Pair each candidate with its heuristic vector
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::LengthMismatch` when the slices differ in length.
    pub fn from_rows(
        candidates: &[CandidateEdge],
        vectors: &[HeuristicVector],
    ) -> Result<Self, DatasetError> {
        if candidates.len() != vectors.len() {
            return Err(DatasetError::LengthMismatch {
                candidates: candidates.len(),
                vectors: vectors.len(),
            });
        }

        let rows: Vec<_> = candidates
            .iter()
            .zip(vectors)
            .map(|(candidate, vector)| DatasetRow::new(candidate, vector))
            .collect();

        tracing::debug!("Assembled dataset with {} rows", rows.len());
        Ok(Self { rows })
    }

    /// Rows in order
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Feature matrix, one row per dataset row
    pub fn features(&self) -> Vec<FeatureRow> {
        self.rows.iter().map(DatasetRow::features).collect()
    }

    /// Label vector, aligned with [`Dataset::features`]
    pub fn labels(&self) -> Vec<u8> {
        self.rows.iter().map(|row| row.label).collect()
    }

    /// Count rows per class
    pub fn label_balance(&self) -> LabelBalance {
        let positives = self.rows.iter().filter(|row| row.is_positive()).count();
        LabelBalance {
            positives,
            negatives: self.rows.len() - positives,
        }
    }

    /// Rows at the given positions, in the given order
    ///
    /// Positions past the end are skipped.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).copied())
            .collect();
        Dataset { rows }
    }

    /// Write one JSON object per row
    pub fn write_json_lines<W: Write>(&self, mut writer: W) -> Result<(), DatasetError> {
        for row in &self.rows {
            serde_json::to_writer(&mut writer, row)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the rows as JSON Lines to a file, replacing it
    pub fn save_json_lines(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_json_lines(BufWriter::new(file))?;
        tracing::info!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}

impl From<Vec<DatasetRow>> for Dataset {
    fn from(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }
}
