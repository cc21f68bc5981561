//! Reference logistic regression

use crate::LogisticError;
use serde::Serialize;
use tielink_domain::{BinaryClassifier, FeatureRow, FEATURE_COUNT};

/// Fitted logistic regression parameters
///
/// Weights apply to standardized features; the per-column means and scales
/// are kept so raw rows can be scored directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticModel {
    /// Coefficient per standardized feature
    pub weights: FeatureRow,

    /// Bias term
    pub intercept: f64,

    /// Column means of the training features
    pub means: FeatureRow,

    /// Column standard deviations of the training features (1 for constant columns)
    pub scales: FeatureRow,

    /// Gradient steps taken
    pub iterations: usize,
}

impl LogisticModel {
    /// Probability of the positive class for one raw feature row
    pub fn probability(&self, row: &FeatureRow) -> f64 {
        let mut z = self.intercept;
        for j in 0..FEATURE_COUNT {
            z += self.weights[j] * (row[j] - self.means[j]) / self.scales[j];
        }
        sigmoid(z)
    }
}

/// Binary logistic regression fitted by batch gradient descent
///
/// Features are standardized per column before fitting, which keeps the raw
/// degree products and neighbor counts on a scale gradient descent handles.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    learning_rate: f64,
    max_iter: usize,
    tolerance: f64,
    l2: f64,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LogisticRegression {
    /// Create a classifier with default hyperparameters
    ///
    /// Learning rate 0.1, at most 1000 iterations, tolerance 1e-6, no L2.
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            max_iter: 1000,
            tolerance: 1e-6,
            l2: 0.0,
        }
    }

    /// Set the gradient descent step size
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the maximum number of gradient steps
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the gradient magnitude below which fitting stops
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the L2 penalty on the weights (not the intercept)
    #[must_use]
    pub fn with_l2(mut self, l2: f64) -> Self {
        self.l2 = l2;
        self
    }

    fn validate(&self) -> Result<(), LogisticError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(LogisticError::InvalidHyperparameter(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.max_iter == 0 {
            return Err(LogisticError::InvalidHyperparameter(
                "max_iter must be greater than 0".to_string(),
            ));
        }
        if !(self.l2.is_finite() && self.l2 >= 0.0) {
            return Err(LogisticError::InvalidHyperparameter(format!(
                "l2 must be non-negative, got {}",
                self.l2
            )));
        }
        Ok(())
    }
}

impl BinaryClassifier for LogisticRegression {
    type Model = LogisticModel;
    type Error = LogisticError;

    fn fit(&self, features: &[FeatureRow], labels: &[u8]) -> Result<LogisticModel, LogisticError> {
        self.validate()?;

        if features.len() != labels.len() {
            return Err(LogisticError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        if features.is_empty() {
            return Err(LogisticError::EmptyTrainingSet);
        }
        for (row, &label) in labels.iter().enumerate() {
            if label > 1 {
                return Err(LogisticError::InvalidLabel { row, label });
            }
        }
        check_finite(features)?;

        let (means, scales) = standardization(features);
        let standardized: Vec<FeatureRow> = features
            .iter()
            .map(|row| {
                let mut scaled = [0.0; FEATURE_COUNT];
                for j in 0..FEATURE_COUNT {
                    scaled[j] = (row[j] - means[j]) / scales[j];
                }
                scaled
            })
            .collect();

        let n = standardized.len() as f64;
        let mut weights = [0.0; FEATURE_COUNT];
        let mut intercept = 0.0;
        let mut iterations = 0;

        for _ in 0..self.max_iter {
            iterations += 1;

            let mut weight_grad = [0.0; FEATURE_COUNT];
            let mut intercept_grad = 0.0;
            for (row, &label) in standardized.iter().zip(labels) {
                let z = intercept + dot(&weights, row);
                let error = sigmoid(z) - f64::from(label);
                intercept_grad += error;
                for j in 0..FEATURE_COUNT {
                    weight_grad[j] += error * row[j];
                }
            }

            intercept_grad /= n;
            for j in 0..FEATURE_COUNT {
                weight_grad[j] = weight_grad[j] / n + self.l2 * weights[j];
            }

            intercept -= self.learning_rate * intercept_grad;
            for j in 0..FEATURE_COUNT {
                weights[j] -= self.learning_rate * weight_grad[j];
            }

            if intercept_grad.abs() < self.tolerance
                && weight_grad.iter().all(|g| g.abs() < self.tolerance)
            {
                break;
            }
        }

        tracing::debug!(
            "Fitted logistic regression on {} rows in {} iterations",
            features.len(),
            iterations
        );

        Ok(LogisticModel {
            weights,
            intercept,
            means,
            scales,
            iterations,
        })
    }

    fn predict_proba(
        &self,
        model: &LogisticModel,
        features: &[FeatureRow],
    ) -> Result<Vec<f64>, LogisticError> {
        check_finite(features)?;
        Ok(features.iter().map(|row| model.probability(row)).collect())
    }
}

/// Numerically stable logistic function
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn dot(a: &FeatureRow, b: &FeatureRow) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn check_finite(features: &[FeatureRow]) -> Result<(), LogisticError> {
    match features
        .iter()
        .position(|row| row.iter().any(|v| !v.is_finite()))
    {
        Some(row) => Err(LogisticError::NonFiniteFeature { row }),
        None => Ok(()),
    }
}

/// Column means and population standard deviations
fn standardization(features: &[FeatureRow]) -> (FeatureRow, FeatureRow) {
    let n = features.len() as f64;
    let mut means = [0.0; FEATURE_COUNT];
    let mut scales = [0.0; FEATURE_COUNT];

    for row in features {
        for j in 0..FEATURE_COUNT {
            means[j] += row[j];
        }
    }
    for mean in &mut means {
        *mean /= n;
    }

    for row in features {
        for j in 0..FEATURE_COUNT {
            scales[j] += (row[j] - means[j]).powi(2);
        }
    }
    for scale in &mut scales {
        *scale = (*scale / n).sqrt();
        // Constant column
        if !(scale.is_finite() && *scale > f64::EPSILON) {
            *scale = 1.0;
        }
    }

    (means, scales)
}
