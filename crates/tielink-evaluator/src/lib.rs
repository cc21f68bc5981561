//! Tielink Evaluator
//!
//! Fits a binary classifier on the training rows and scores it on the
//! held-out rows.
//!
//! This crate provides:
//! - `Evaluator`: fit, predict, threshold, tabulate for any `BinaryClassifier`
//! - `ConfusionMatrix` with accuracy, precision, recall and F1
//! - `LogisticRegression`: a reference classifier (gradient descent on
//!   standardized features, optional L2 penalty)
//!
//! A predicted probability strictly above [`DECISION_THRESHOLD`] is a
//! positive prediction.
//!
//! # Examples
//!
//! ```
//! use tielink_dataset::Dataset;
//! use tielink_domain::{CandidateEdge, Edge, HeuristicVector, NodeId};
//! use tielink_evaluator::{Evaluator, LogisticRegression};
//!
//! let n = NodeId::new;
//! let row = |cn: u64| HeuristicVector { common_neighbors: cn, ..Default::default() };
//!
//! let candidates = [
//!     CandidateEdge::positive(Edge::new(n(1), n(2))),
//!     CandidateEdge::positive(Edge::new(n(3), n(4))),
//!     CandidateEdge::negative(n(1), n(4)),
//!     CandidateEdge::negative(n(2), n(3)),
//! ];
//! let train = Dataset::from_rows(&candidates, &[row(5), row(4), row(0), row(1)]).unwrap();
//! let test = Dataset::from_rows(&candidates[1..3], &[row(6), row(0)]).unwrap();
//!
//! let evaluator = Evaluator::new(LogisticRegression::new());
//! let confusion = evaluator.evaluate(&train, &test).unwrap();
//! assert_eq!(confusion.total(), 2);
//! assert_eq!(confusion.accuracy(), Some(1.0));
//! ```

#![warn(missing_docs)]

mod confusion;
mod error;
mod evaluator;
mod logistic;

pub use confusion::ConfusionMatrix;
pub use error::{EvaluatorError, LogisticError};
pub use evaluator::{classify, Evaluator, DECISION_THRESHOLD};
pub use logistic::{LogisticModel, LogisticRegression};
