//! Pipeline error types

use std::fmt;
use thiserror::Error;
use tielink_dataset::DatasetError;
use tielink_evaluator::EvaluatorError;
use tielink_heuristics::HeuristicError;
use tielink_sampler::SamplerError;

/// Pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Configuration validation
    Config,
    /// Positive and negative sampling
    Sampling,
    /// Heuristic scoring
    Heuristics,
    /// Dataset assembly and splitting
    Dataset,
    /// Classifier fit and evaluation
    Evaluation,
}

impl Stage {
    /// Lowercase stage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Config => "config",
            Stage::Sampling => "sampling",
            Stage::Heuristics => "heuristics",
            Stage::Dataset => "dataset",
            Stage::Evaluation => "evaluation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid configuration
    #[error("config stage failed: {0}")]
    Config(String),

    /// Sampling failed
    #[error("sampling stage failed: {0}")]
    Sampling(#[from] SamplerError),

    /// Heuristic scoring failed
    #[error("heuristics stage failed: {0}")]
    Heuristics(#[from] HeuristicError),

    /// Dataset assembly or splitting failed
    #[error("dataset stage failed: {0}")]
    Dataset(#[from] DatasetError),

    /// Classifier fit or evaluation failed
    #[error("evaluation stage failed: {0}")]
    Evaluation(#[from] EvaluatorError),
}

impl PipelineError {
    /// The stage that failed
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Config(_) => Stage::Config,
            PipelineError::Sampling(_) => Stage::Sampling,
            PipelineError::Heuristics(_) => Stage::Heuristics,
            PipelineError::Dataset(_) => Stage::Dataset,
            PipelineError::Evaluation(_) => Stage::Evaluation,
        }
    }
}
