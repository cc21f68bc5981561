//! Sampler configuration

use serde::{Deserialize, Serialize};

/// Configuration for positive and negative sampling
///
/// # Examples
///
/// ```
/// use tielink_sampler::SamplerConfig;
///
/// let config = SamplerConfig::default();
/// assert_eq!(config.positive_fraction, 0.10);
/// assert_eq!(config.degree_threshold, 15);
///
/// let config = SamplerConfig::small_graph();
/// assert_eq!(config.degree_threshold, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Fraction of edges removed and labeled positive, in (0, 1]
    /// Default: 0.10
    pub positive_fraction: f64,

    /// Nodes must have a degree strictly above this to be drawn as negatives
    /// Default: 15
    pub degree_threshold: usize,

    /// Maximum number of draws before negative sampling gives up
    /// Default: 1,000,000
    pub max_attempts: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            positive_fraction: 0.10,
            degree_threshold: 15,
            max_attempts: 1_000_000,
        }
    }
}

impl SamplerConfig {
    /// Preset for toy and test graphs where few nodes exceed degree 15
    pub fn small_graph() -> Self {
        Self {
            positive_fraction: 0.10,
            degree_threshold: 1,
            max_attempts: 10_000,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.positive_fraction > 0.0 && self.positive_fraction <= 1.0) {
            return Err(format!(
                "positive_fraction must be in (0, 1], got {}",
                self.positive_fraction
            ));
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(SamplerConfig::default().validate().is_ok());
        assert!(SamplerConfig::small_graph().validate().is_ok());
    }

    #[test]
    fn test_invalid_fraction() {
        for fraction in [0.0, -0.5, 1.5, f64::NAN] {
            let config = SamplerConfig {
                positive_fraction: fraction,
                ..SamplerConfig::default()
            };
            assert!(config.validate().is_err(), "fraction {} should fail", fraction);
        }
    }

    #[test]
    fn test_zero_attempts() {
        let config = SamplerConfig {
            max_attempts: 0,
            ..SamplerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SamplerConfig::from_toml("degree_threshold = 3").unwrap();
        assert_eq!(config.degree_threshold, 3);
        assert_eq!(config.positive_fraction, 0.10);
        assert_eq!(config.max_attempts, 1_000_000);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SamplerConfig::small_graph();
        let parsed = SamplerConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
