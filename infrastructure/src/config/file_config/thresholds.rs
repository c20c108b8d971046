//! Circuit-breaker thresholds from TOML (`[thresholds]` section)

use serde::{Deserialize, Serialize};
use tribunal_domain::{CircuitBreakerThresholds, ConfigIssue, validate_thresholds};

/// Raw threshold configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileThresholdsConfig {
    /// Escalate when any final-vote confidence falls below this
    pub min_confidence: f64,
    /// Escalate when agreement on the modal stance falls below this
    pub consensus: f64,
    /// Risk Officer DENY above this is a veto
    pub veto_confidence: f64,
}

impl Default for FileThresholdsConfig {
    fn default() -> Self {
        let defaults = CircuitBreakerThresholds::default();
        Self {
            min_confidence: defaults.min_confidence,
            consensus: defaults.consensus,
            veto_confidence: defaults.veto_confidence,
        }
    }
}

impl FileThresholdsConfig {
    pub fn to_thresholds(&self) -> CircuitBreakerThresholds {
        CircuitBreakerThresholds {
            min_confidence: self.min_confidence,
            consensus: self.consensus,
            veto_confidence: self.veto_confidence,
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        validate_thresholds(&self.to_thresholds())
    }
}
