//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tielink - predict ties in an email graph from topological heuristics.
#[derive(Debug, Parser)]
#[command(name = "tielink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full link-prediction pipeline
    Run(RunArgs),

    /// Print summary statistics of a graph
    Stats(StatsArgs),

    /// Print a pipeline configuration as TOML
    Config(ConfigArgs),
}

/// Node and edge table locations.
#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Edge table (CSV with `source` and `target` columns)
    #[arg(short, long)]
    pub edges: PathBuf,

    /// Node table (CSV with an `id` column); defaults to every edge endpoint
    #[arg(short, long)]
    pub nodes: Option<PathBuf>,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Pipeline configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Negatives are drawn only from nodes with degree above this
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Fraction of edges removed as positives
    #[arg(long)]
    pub fraction: Option<f64>,

    /// Share of rows used for training
    #[arg(long)]
    pub train_fraction: Option<f64>,

    /// Negative sampling attempt budget
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Write the dataset as JSON Lines to this path
    #[arg(long)]
    pub dataset_out: Option<PathBuf>,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Configuration preset
    #[arg(short, long, value_enum, default_value = "default")]
    pub preset: Preset,
}

/// Pipeline configuration presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Preset {
    /// Defaults for real email graphs
    Default,
    /// Low degree threshold for toy graphs
    SmallGraph,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from([
            "tielink",
            "--format",
            "json",
            "run",
            "--edges",
            "edges.csv",
            "--seed",
            "7",
            "--threshold",
            "2",
            "--fraction",
            "0.2",
        ]);

        assert!(matches!(cli.format, CliFormat::Json));
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.graph.edges, PathBuf::from("edges.csv"));
                assert!(args.graph.nodes.is_none());
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.threshold, Some(2));
                assert_eq!(args.fraction, Some(0.2));
                assert!(args.max_attempts.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_preset() {
        let cli = Cli::parse_from(["tielink", "config", "--preset", "small-graph"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                preset: Preset::SmallGraph
            })
        ));
    }

    #[test]
    fn test_edges_required() {
        assert!(Cli::try_parse_from(["tielink", "stats"]).is_err());
    }
}
