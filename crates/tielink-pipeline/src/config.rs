//! Pipeline configuration
//!
//! One TOML document configures every stage.

use serde::{Deserialize, Serialize};
use tielink_graph::MissingEdgePolicy;
use tielink_heuristics::HeuristicConfig;
use tielink_sampler::SamplerConfig;

/// Configuration for a full pipeline run
///
/// # Examples
///
/// ```
/// use tielink_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.train_fraction, 0.8);
///
/// let config = PipelineConfig::from_toml("seed = 7\n[sampler]\ndegree_threshold = 3").unwrap();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.sampler.degree_threshold, 3);
/// assert_eq!(config.sampler.positive_fraction, 0.10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Seed for every random draw in the run
    /// Default: 42
    pub seed: u64,

    /// Share of rows used for training, in (0, 1)
    /// Default: 0.8
    pub train_fraction: f64,

    /// What removing a positive that is not in the graph does
    /// Default: fail
    pub missing_edge_policy: MissingEdgePolicy,

    /// Positive and negative sampling
    pub sampler: SamplerConfig,

    /// Heuristic scoring
    pub heuristics: HeuristicConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            train_fraction: 0.8,
            missing_edge_policy: MissingEdgePolicy::Fail,
            sampler: SamplerConfig::default(),
            heuristics: HeuristicConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Preset for toy and test graphs (low degree threshold, small attempt budget)
    pub fn small_graph() -> Self {
        Self {
            sampler: SamplerConfig::small_graph(),
            ..Self::default()
        }
    }

    /// Validate the configuration and every stage configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(format!(
                "train_fraction must be in (0, 1), got {}",
                self.train_fraction
            ));
        }
        self.sampler
            .validate()
            .map_err(|e| format!("sampler: {}", e))?;
        self.heuristics
            .validate()
            .map_err(|e| format!("heuristics: {}", e))?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
