//! Binary confusion matrix

use serde::Serialize;

/// Counts of predicted versus actual classes on the test set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// Predicted 1, actual 1
    pub true_positives: usize,

    /// Predicted 0, actual 0
    pub true_negatives: usize,

    /// Predicted 1, actual 0
    pub false_positives: usize,

    /// Predicted 0, actual 1
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// Tabulate predicted against actual labels
    ///
    /// Pairs beyond the shorter slice are ignored.
    pub fn from_labels(predicted: &[u8], actual: &[u8]) -> Self {
        let mut matrix = Self::default();
        for (&p, &a) in predicted.iter().zip(actual) {
            matrix.record(p == 1, a == 1);
        }
        matrix
    }

    /// Add one prediction
    pub fn record(&mut self, predicted_positive: bool, actually_positive: bool) {
        match (predicted_positive, actually_positive) {
            (true, true) => self.true_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_positives += 1,
            (false, true) => self.false_negatives += 1,
        }
    }

    /// Number of predictions tabulated
    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    /// `(TP + TN) / total`
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_positives + self.true_negatives, self.total())
    }

    /// `TP / (TP + FP)`, undefined when nothing was predicted positive
    pub fn precision(&self) -> Option<f64> {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    /// `TP / (TP + FN)` (sensitivity), undefined when the test set has no positives
    pub fn recall(&self) -> Option<f64> {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    /// `TN / (TN + FP)`, undefined when the test set has no negatives
    pub fn specificity(&self) -> Option<f64> {
        ratio(
            self.true_negatives,
            self.true_negatives + self.false_positives,
        )
    }

    /// Harmonic mean of precision and recall
    pub fn f1(&self) -> Option<f64> {
        let precision = self.precision()?;
        let recall = self.recall()?;
        if precision + recall == 0.0 {
            return None;
        }
        Some(2.0 * precision * recall / (precision + recall))
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let lines = vec![
            "Confusion Matrix".to_string(),
            "================".to_string(),
            "              predicted 1  predicted 0".to_string(),
            format!(
                "actual 1      {:>11}  {:>11}",
                self.true_positives, self.false_negatives
            ),
            format!(
                "actual 0      {:>11}  {:>11}",
                self.false_positives, self.true_negatives
            ),
            String::new(),
            format!("Accuracy:    {}", format_ratio(self.accuracy())),
            format!("Precision:   {}", format_ratio(self.precision())),
            format!("Recall:      {}", format_ratio(self.recall())),
            format!("Specificity: {}", format_ratio(self.specificity())),
            format!("F1:          {}", format_ratio(self.f1())),
        ];

        lines.join("\n")
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "undefined".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels() {
        let predicted = [1, 1, 0, 0, 1, 0];
        let actual = [1, 0, 0, 1, 1, 0];
        let matrix = ConfusionMatrix::from_labels(&predicted, &actual);

        assert_eq!(matrix.true_positives, 2);
        assert_eq!(matrix.false_positives, 1);
        assert_eq!(matrix.true_negatives, 2);
        assert_eq!(matrix.false_negatives, 1);
        assert_eq!(matrix.total(), 6);
    }

    #[test]
    fn test_ratios() {
        let matrix = ConfusionMatrix {
            true_positives: 3,
            true_negatives: 4,
            false_positives: 1,
            false_negatives: 2,
        };
        assert_eq!(matrix.accuracy(), Some(0.7));
        assert_eq!(matrix.precision(), Some(0.75));
        assert_eq!(matrix.recall(), Some(0.6));
        assert_eq!(matrix.specificity(), Some(0.8));
        let f1 = matrix.f1().unwrap();
        assert!((f1 - 2.0 * 0.75 * 0.6 / 1.35).abs() < 1e-12);
    }

    #[test]
    fn test_undefined_ratios() {
        // No positive predictions and no actual positives
        let matrix = ConfusionMatrix {
            true_negatives: 5,
            ..Default::default()
        };
        assert_eq!(matrix.accuracy(), Some(1.0));
        assert_eq!(matrix.specificity(), Some(1.0));
        assert_eq!(matrix.precision(), None);
        assert_eq!(matrix.recall(), None);
        assert_eq!(matrix.f1(), None);
        assert_eq!(ConfusionMatrix::default().accuracy(), None);

        // Precision and recall both zero
        let matrix = ConfusionMatrix {
            false_positives: 2,
            false_negatives: 2,
            ..Default::default()
        };
        assert_eq!(matrix.precision(), Some(0.0));
        assert_eq!(matrix.f1(), None);
    }

    #[test]
    fn test_summary() {
        let matrix = ConfusionMatrix {
            true_positives: 1,
            true_negatives: 1,
            ..Default::default()
        };
        let summary = matrix.summary();
        assert!(summary.contains("Confusion Matrix"));
        assert!(summary.contains("Accuracy:    1.0000"));
        assert!(summary.contains("F1:          1.0000"));
    }
}
