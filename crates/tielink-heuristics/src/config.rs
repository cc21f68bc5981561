//! Heuristic engine configuration

use serde::{Deserialize, Serialize};

/// Handling of shared neighbors with degree 1 in Adamic-Adar
///
/// `1 / ln(1)` is a division by zero. In a simple graph a shared neighbor of
/// two distinct nodes has degree at least 2, so this only matters for
/// self-pairs and for topologies that are not simple.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DegenerateDegreePolicy {
    /// Leave the term out of the sum
    #[default]
    Exclude,

    /// Add a fixed finite term instead
    Clamp {
        /// Term added per degree-1 shared neighbor
        value: f64,
    },

    /// Fail the row with `HeuristicError::DegenerateDegree`
    Fail,
}

/// Configuration for the heuristic engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Score rows on the rayon thread pool
    /// Default: true
    pub parallel: bool,

    /// Adamic-Adar handling of degree-1 shared neighbors
    /// Default: exclude
    pub degenerate_degree: DegenerateDegreePolicy,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            degenerate_degree: DegenerateDegreePolicy::Exclude,
            parallel: true,
        }
    }
}

impl HeuristicConfig {
    /// Strict preset: degree-1 shared neighbors fail the row
    pub fn strict() -> Self {
        Self {
            degenerate_degree: DegenerateDegreePolicy::Fail,
            parallel: true,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let DegenerateDegreePolicy::Clamp { value } = self.degenerate_degree {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "clamp value must be finite and non-negative, got {}",
                    value
                ));
            }
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
    fn test_default_config() {
        let config = HeuristicConfig::default();
        assert_eq!(config.degenerate_degree, DegenerateDegreePolicy::Exclude);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_clamp() {
        for value in [f64::INFINITY, f64::NAN, -1.0] {
            let config = HeuristicConfig {
                degenerate_degree: DegenerateDegreePolicy::Clamp { value },
                parallel: false,
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_policy_from_toml() {
        let config = HeuristicConfig::from_toml(
            r#"
            parallel = false

            [degenerate_degree]
            policy = "clamp"
            value = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(
            config.degenerate_degree,
            DegenerateDegreePolicy::Clamp { value: 5.0 }
        );
        assert!(!config.parallel);

        let strict = HeuristicConfig::from_toml("[degenerate_degree]\npolicy = \"fail\"").unwrap();
        assert_eq!(strict, HeuristicConfig::strict());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = HeuristicConfig {
            degenerate_degree: DegenerateDegreePolicy::Clamp { value: 2.5 },
            parallel: false,
        };
        let parsed = HeuristicConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
