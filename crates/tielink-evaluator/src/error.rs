//! Evaluator error types

use thiserror::Error;

/// Errors that can occur during evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    /// The classifier failed to fit or predict
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// The classifier returned unusable probabilities
    #[error("Invalid probabilities: {0}")]
    InvalidProbabilities(String),

    /// There is nothing to evaluate on
    #[error("Test set is empty")]
    EmptyTestSet,
}

/// Errors raised by the reference logistic regression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogisticError {
    /// No training rows
    #[error("Cannot fit with zero samples")]
    EmptyTrainingSet,

    /// Feature and label counts differ
    #[error("Got {features} feature rows but {labels} labels")]
    LengthMismatch {
        /// Feature rows supplied
        features: usize,
        /// Labels supplied
        labels: usize,
    },

    /// A label other than 0 or 1
    #[error("Label {label} at row {row} is not 0 or 1")]
    InvalidLabel {
        /// Offending row
        row: usize,
        /// Offending value
        label: u8,
    },

    /// NaN or infinite feature value
    #[error("Non-finite feature at row {row}")]
    NonFiniteFeature {
        /// Offending row
        row: usize,
    },

    /// Hyperparameter out of range
    #[error("Invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),
}
