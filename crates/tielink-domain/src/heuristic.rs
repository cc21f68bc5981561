//! Heuristic feature vector

/// Number of features in a [`HeuristicVector`]
pub const FEATURE_COUNT: usize = 4;

/// Column names of [`HeuristicVector::features`], in order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "common_neighbors",
    "jaccard",
    "adamic_adar",
    "pref_attachment",
];

/// One row of the classifier's feature matrix
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Topological similarity scores of a candidate pair
///
/// Computed against the reference graph (positive ties already removed).
/// All values are finite: the undefined cases of Jaccard and Adamic-Adar are
/// resolved before a vector is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicVector {
    /// Number of shared neighbors
    pub common_neighbors: u64,

    /// Shared neighbors over the union of neighbors, in [0, 1]
    pub jaccard: f64,

    /// Sum of inverse log degree over shared neighbors, non-negative
    pub adamic_adar: f64,

    /// Product of the two degrees
    pub pref_attachment: u64,
}

impl HeuristicVector {
    /// Feature row in [`FEATURE_NAMES`] order
    ///
    /// # Examples
    ///
    /// ```
    /// use tielink_domain::HeuristicVector;
    ///
    /// let vector = HeuristicVector {
    ///     common_neighbors: 2,
    ///     jaccard: 0.5,
    ///     adamic_adar: 1.25,
    ///     pref_attachment: 9,
    /// };
    /// assert_eq!(vector.features(), [2.0, 0.5, 1.25, 9.0]);
    /// ```
    pub fn features(&self) -> FeatureRow {
        [
            self.common_neighbors as f64,
            self.jaccard,
            self.adamic_adar,
            self.pref_attachment as f64,
        ]
    }

    /// Whether every score is finite and inside its documented range
    pub fn is_well_formed(&self) -> bool {
        (0.0..=1.0).contains(&self.jaccard)
            && self.adamic_adar.is_finite()
            && self.adamic_adar >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let vector = HeuristicVector::default();
        assert_eq!(vector.features(), [0.0; FEATURE_COUNT]);
        assert!(vector.is_well_formed());
    }

    #[test]
    fn test_ill_formed_values() {
        let nan = HeuristicVector { jaccard: f64::NAN, ..Default::default() };
        assert!(!nan.is_well_formed());

        let inf = HeuristicVector { adamic_adar: f64::INFINITY, ..Default::default() };
        assert!(!inf.is_well_formed());
    }
}
