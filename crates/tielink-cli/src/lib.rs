//! Tielink CLI library.
//!
//! Loads node and edge tables, runs the link-prediction pipeline and
//! renders its results as tables or JSON.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod tables;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
