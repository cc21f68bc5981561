//! Command implementations.

pub mod config;
pub mod run;
pub mod stats;

pub use self::config::execute_config;
pub use self::run::execute_run;
pub use self::stats::execute_stats;
