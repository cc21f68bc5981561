//! Config command implementation.

use crate::cli::{ConfigArgs, Preset};
use crate::error::Result;
use crate::output::Formatter;
use tielink_pipeline::PipelineConfig;

/// Build the configuration for a preset.
pub fn preset_config(preset: Preset) -> PipelineConfig {
    match preset {
        Preset::Default => PipelineConfig::default(),
        Preset::SmallGraph => PipelineConfig::small_graph(),
    }
}

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, formatter: &Formatter) -> Result<()> {
    let config = preset_config(args.preset);
    println!("{}", formatter.format_config(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(preset_config(Preset::Default), PipelineConfig::default());
        assert_eq!(
            preset_config(Preset::SmallGraph).sampler.degree_threshold,
            1
        );
    }
}
