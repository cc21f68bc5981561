//! Seeded train/test partition

use crate::{Dataset, DatasetError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Disjoint train and test parts of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Rows used to fit the classifier
    pub train: Dataset,

    /// Held-out rows used for evaluation
    pub test: Dataset,

    /// Source positions of the train rows
    pub train_indices: Vec<usize>,

    /// Source positions of the test rows
    pub test_indices: Vec<usize>,
}

/// Partition `dataset` at random into train and test parts
///
/// The rows are permuted with a `StdRng` seeded from `seed`; the first
/// `floor(train_fraction * len)` positions of the permutation form the
/// training part and the rest the test part. Same seed, same split.
///
/// # Errors
///
/// Returns `DatasetError::InvalidSplit` if `train_fraction` is not strictly
/// between 0 and 1, or if either part would be empty.
pub fn split(dataset: &Dataset, train_fraction: f64, seed: u64) -> Result<Split, DatasetError> {
    let rows = dataset.len();
    let invalid = DatasetError::InvalidSplit {
        fraction: train_fraction,
        rows,
    };

    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(invalid);
    }

    let train_len = (train_fraction * rows as f64).floor() as usize;
    if train_len == 0 || train_len >= rows {
        return Err(invalid);
    }

    let mut indices: Vec<usize> = (0..rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_indices = indices.split_off(train_len);
    let train_indices = indices;

    tracing::debug!(
        "Split {} rows into {} train and {} test (seed {})",
        rows,
        train_indices.len(),
        test_indices.len(),
        seed
    );

    Ok(Split {
        train: dataset.select(&train_indices),
        test: dataset.select(&test_indices),
        train_indices,
        test_indices,
    })
}
