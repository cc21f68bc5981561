//! Run command implementation.

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::tables;
use std::fs;
use std::path::Path;
use tielink_evaluator::LogisticRegression;
use tielink_pipeline::{Pipeline, PipelineConfig};

/// Load a pipeline configuration file.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let contents = fs::read_to_string(path)?;
    PipelineConfig::from_toml(&contents)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}

/// Apply command-line overrides on top of a configuration.
pub fn apply_overrides(config: &mut PipelineConfig, args: &RunArgs) {
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(threshold) = args.threshold {
        config.sampler.degree_threshold = threshold;
    }
    if let Some(fraction) = args.fraction {
        config.sampler.positive_fraction = fraction;
    }
    if let Some(train_fraction) = args.train_fraction {
        config.train_fraction = train_fraction;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.sampler.max_attempts = max_attempts;
    }
}

/// Execute the run command.
pub fn execute_run(args: RunArgs, formatter: &Formatter) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };
    apply_overrides(&mut config, &args);
    config.validate().map_err(CliError::Config)?;

    let graph = tables::load_graph(&args.graph.edges, args.graph.nodes.as_deref())?;
    let output = Pipeline::new(config).run(&graph, LogisticRegression::new())?;

    if let Some(path) = &args.dataset_out {
        output.dataset.save_json_lines(path)?;
        eprintln!(
            "{}",
            formatter.info(&format!(
                "Wrote {} rows to {}",
                output.dataset.len(),
                path.display()
            ))
        );
    }

    println!("{}", formatter.format_report(&output.report)?);

    Ok(())
}
