//! Fit, predict and tabulate

use crate::{ConfusionMatrix, EvaluatorError};
use std::fmt::Display;
use tielink_dataset::Dataset;
use tielink_domain::BinaryClassifier;

/// Probability above which a pair is predicted to be a tie
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Turn a positive-class probability into a label
pub fn classify(probability: f64) -> u8 {
    u8::from(probability > DECISION_THRESHOLD)
}

/// Evaluates a classifier on a train/test split
pub struct Evaluator<C> {
    classifier: C,
}

impl<C> Evaluator<C>
where
    C: BinaryClassifier,
    C::Error: Display,
{
    /// Create an evaluator around a classifier
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Get the wrapped classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Fit on `train`, predict on `test`, and tabulate the results
    ///
    /// # Errors
    ///
    /// - `EmptyTestSet` if `test` has no rows
    /// - `Classifier` if fitting or prediction fails
    /// - `InvalidProbabilities` unless exactly one finite probability in
    ///   `[0, 1]` comes back per test row
    pub fn evaluate(&self, train: &Dataset, test: &Dataset) -> Result<ConfusionMatrix, EvaluatorError> {
        if test.is_empty() {
            return Err(EvaluatorError::EmptyTestSet);
        }

        let model = self
            .classifier
            .fit(&train.features(), &train.labels())
            .map_err(|e| EvaluatorError::Classifier(e.to_string()))?;

        let probabilities = self
            .classifier
            .predict_proba(&model, &test.features())
            .map_err(|e| EvaluatorError::Classifier(e.to_string()))?;

        validate_probabilities(&probabilities, test.len())?;

        let predicted: Vec<u8> = probabilities.iter().map(|&p| classify(p)).collect();
        let confusion = ConfusionMatrix::from_labels(&predicted, &test.labels());

        tracing::info!(
            "Evaluated on {} test rows (train {}): accuracy {:?}",
            test.len(),
            train.len(),
            confusion.accuracy()
        );

        Ok(confusion)
    }
}

fn validate_probabilities(probabilities: &[f64], expected: usize) -> Result<(), EvaluatorError> {
    if probabilities.len() != expected {
        return Err(EvaluatorError::InvalidProbabilities(format!(
            "expected {} probabilities, got {}",
            expected,
            probabilities.len()
        )));
    }
    if let Some((row, p)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && (0.0..=1.0).contains(*p)))
    {
        return Err(EvaluatorError::InvalidProbabilities(format!(
            "probability {} at row {} is outside [0, 1]",
            p, row
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tielink_domain::{CandidateEdge, Edge, FeatureRow, HeuristicVector, NodeId};

    /// Returns each row's Jaccard feature as its probability
    struct Echo;

    impl BinaryClassifier for Echo {
        type Model = ();
        type Error = String;

        fn fit(&self, features: &[FeatureRow], _labels: &[u8]) -> Result<(), String> {
            if features.is_empty() {
                return Err("nothing to fit".to_string());
            }
            Ok(())
        }

        fn predict_proba(&self, _model: &(), features: &[FeatureRow]) -> Result<Vec<f64>, String> {
            Ok(features.iter().map(|row| row[1]).collect())
        }
    }

    /// Returns a fixed probability list whatever the input
    struct Fixed(Vec<f64>);

    impl BinaryClassifier for Fixed {
        type Model = ();
        type Error = String;

        fn fit(&self, _features: &[FeatureRow], _labels: &[u8]) -> Result<(), String> {
            Ok(())
        }

        fn predict_proba(&self, _model: &(), _features: &[FeatureRow]) -> Result<Vec<f64>, String> {
            Ok(self.0.clone())
        }
    }

    /// Rows whose Jaccard column carries the probability `Echo` returns
    fn dataset(rows: &[(f64, bool)]) -> Dataset {
        let n = NodeId::new;
        let candidates: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(i, &(_, positive))| {
                let i = i as u64;
                if positive {
                    CandidateEdge::positive(Edge::new(n(i), n(i + 100)))
                } else {
                    CandidateEdge::negative(n(i), n(i + 100))
                }
            })
            .collect();
        let vectors: Vec<_> = rows
            .iter()
            .map(|&(p, _)| HeuristicVector {
                jaccard: p,
                ..Default::default()
            })
            .collect();
        Dataset::from_rows(&candidates, &vectors).unwrap()
    }

    #[test]
    fn test_classify_threshold() {
        assert_eq!(classify(0.5), 0);
        assert_eq!(classify(0.500001), 1);
        assert_eq!(classify(0.0), 0);
        assert_eq!(classify(1.0), 1);
    }

    #[test]
    fn test_evaluate_tabulates() {
        let train = dataset(&[(0.9, true), (0.1, false)]);
        let test = dataset(&[(0.9, true), (0.2, true), (0.7, false), (0.5, false)]);

        let confusion = Evaluator::new(Echo).evaluate(&train, &test).unwrap();
        assert_eq!(
            confusion,
            ConfusionMatrix {
                true_positives: 1,
                true_negatives: 1,
                false_positives: 1,
                false_negatives: 1,
            }
        );
        assert_eq!(confusion.total(), test.len());
    }

    #[test]
    fn test_empty_test_set() {
        let train = dataset(&[(0.9, true)]);
        let result = Evaluator::new(Echo).evaluate(&train, &Dataset::default());
        assert_eq!(result.unwrap_err(), EvaluatorError::EmptyTestSet);
    }

    #[test]
    fn test_classifier_failure() {
        let test = dataset(&[(0.9, true)]);
        let result = Evaluator::new(Echo).evaluate(&Dataset::default(), &test);
        assert_eq!(
            result.unwrap_err(),
            EvaluatorError::Classifier("nothing to fit".to_string())
        );
    }

    #[test]
    fn test_invalid_probabilities() {
        let train = dataset(&[(0.9, true)]);
        let test = dataset(&[(0.9, true), (0.1, false)]);

        for bad in [vec![0.5], vec![0.5, f64::NAN], vec![0.5, 1.5], vec![-0.1, 0.5]] {
            let result = Evaluator::new(Fixed(bad)).evaluate(&train, &test);
            assert!(matches!(
                result,
                Err(EvaluatorError::InvalidProbabilities(_))
            ));
        }
    }
}
