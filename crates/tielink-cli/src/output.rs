//! Output formatting for the CLI.

use crate::error::{CliError, Result};
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tielink_evaluator::ConfusionMatrix;
use tielink_graph::GraphSummary;
use tielink_pipeline::{PipelineConfig, PipelineReport};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format graph statistics.
    pub fn format_summary(&self, summary: &GraphSummary) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(summary);
        }

        let mut builder = Builder::default();
        builder.push_record(["Statistic", "Value"]);
        builder.push_record(["Nodes".to_string(), summary.nodes.to_string()]);
        builder.push_record(["Edges".to_string(), summary.edges.to_string()]);
        builder.push_record(["Density".to_string(), format!("{:.6}", summary.density)]);
        builder.push_record(["Min degree".to_string(), summary.min_degree.to_string()]);
        builder.push_record(["Max degree".to_string(), summary.max_degree.to_string()]);
        builder.push_record(["Mean degree".to_string(), format!("{:.3}", summary.mean_degree)]);
        builder.push_record(["Isolated nodes".to_string(), summary.isolated_nodes.to_string()]);

        let mut histogram = Builder::default();
        histogram.push_record(["Degree", "Nodes"]);
        for (degree, count) in &summary.degree_histogram {
            histogram.push_record([degree.to_string(), count.to_string()]);
        }

        Ok(format!(
            "{}\n\n{}\n{}",
            render(builder),
            self.colorize("Degree distribution", "cyan"),
            render(histogram)
        ))
    }

    /// Format a pipeline run report.
    pub fn format_report(&self, report: &PipelineReport) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(report);
        }

        let mut builder = Builder::default();
        builder.push_record(["Stage", "Result"]);
        builder.push_record([
            "Graph".to_string(),
            format!("{} nodes, {} edges", report.nodes, report.edges),
        ]);
        builder.push_record([
            "Sampling".to_string(),
            format!(
                "{} positive, {} negative ({} attempts)",
                report.sampling.positives, report.sampling.negatives, report.sampling.attempts
            ),
        ]);
        builder.push_record([
            "Reference graph".to_string(),
            format!("{} edges", report.reference_edges),
        ]);
        builder.push_record([
            "Train".to_string(),
            format!(
                "{} rows (+{} / -{})",
                report.train_balance.total(),
                report.train_balance.positives,
                report.train_balance.negatives
            ),
        ]);
        builder.push_record([
            "Test".to_string(),
            format!(
                "{} rows (+{} / -{})",
                report.test_balance.total(),
                report.test_balance.positives,
                report.test_balance.negatives
            ),
        ]);
        builder.push_record([
            "Seed".to_string(),
            format!("{} (split {})", report.seed, report.split_seed),
        ]);
        builder.push_record(["Runtime".to_string(), format!("{}ms", report.elapsed_ms)]);

        let mut output = render(builder);
        if let Some(confusion) = &report.confusion {
            output.push_str("\n\n");
            output.push_str(&self.colorize("Test set", "cyan"));
            output.push('\n');
            output.push_str(&self.format_confusion_table(confusion));
        }
        Ok(output)
    }

    /// Format a pipeline configuration.
    ///
    /// Table output is the TOML document itself.
    pub fn format_config(&self, config: &PipelineConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Table => config.to_toml().map_err(CliError::Config),
        }
    }

    fn format_confusion_table(&self, confusion: &ConfusionMatrix) -> String {
        let mut matrix = Builder::default();
        matrix.push_record(["", "Predicted 1", "Predicted 0"]);
        matrix.push_record([
            "Actual 1".to_string(),
            confusion.true_positives.to_string(),
            confusion.false_negatives.to_string(),
        ]);
        matrix.push_record([
            "Actual 0".to_string(),
            confusion.false_positives.to_string(),
            confusion.true_negatives.to_string(),
        ]);

        let mut ratios = Builder::default();
        ratios.push_record(["Metric", "Value"]);
        for (name, value) in [
            ("Accuracy", confusion.accuracy()),
            ("Precision", confusion.precision()),
            ("Recall", confusion.recall()),
            ("Specificity", confusion.specificity()),
            ("F1", confusion.f1()),
        ] {
            let value = match value {
                Some(v) => format!("{:.4}", v),
                None => self.colorize("undefined", "yellow"),
            };
            ratios.push_record([name.to_string(), value]);
        }

        format!("{}\n{}", render(matrix), render(ratios))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
