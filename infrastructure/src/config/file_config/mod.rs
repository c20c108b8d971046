//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod enrichment;
mod history;
mod output;
mod thresholds;

pub use enrichment::FileEnrichmentConfig;
pub use history::FileHistoryConfig;
pub use output::FileOutputConfig;
pub use thresholds::FileThresholdsConfig;

use serde::{Deserialize, Serialize};
use tribunal_application::DeliberationParams;
use tribunal_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Circuit-breaker thresholds
    pub thresholds: FileThresholdsConfig,
    /// Optional text-generation enrichment
    pub enrichment: FileEnrichmentConfig,
    /// JSONL verdict history
    pub history: FileHistoryConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.thresholds.validate());
        issues.extend(self.enrichment.validate());
        issues.extend(self.history.validate());
        issues
    }

    /// Deliberation parameters for the use case
    pub fn deliberation_params(&self) -> DeliberationParams {
        DeliberationParams::default()
            .with_thresholds(self.thresholds.to_thresholds())
            .with_enrichment_enabled(self.enrichment.enabled)
            .with_enrichment_timeout(self.enrichment.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tribunal_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[thresholds]
min_confidence = 45.0
consensus = 65.0
veto_confidence = 85.0

[enrichment]
enabled = false
model = "gpt-4.1-mini"
timeout_secs = 5

[history]
path = "/var/lib/tribunal/history.jsonl"

[output]
format = "verdict"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.thresholds.min_confidence, 45.0);
        assert_eq!(config.thresholds.veto_confidence, 85.0);
        assert_eq!(config.enrichment.model, "gpt-4.1-mini");
        assert_eq!(config.enrichment.timeout_secs, 5);
        assert!(config.history.enabled);
        assert_eq!(
            config.history.path.to_string_lossy(),
            "/var/lib/tribunal/history.jsonl"
        );
        assert_eq!(config.output.format, Some(OutputFormat::Verdict));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_section() {
        let config: FileConfig = toml::from_str(
            r#"
[thresholds]
consensus = 120.0

[enrichment]
timeout_secs = 0

[history]
path = ""
"#,
        )
        .unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_deliberation_params() {
        let config: FileConfig = toml::from_str(
            r#"
[thresholds]
veto_confidence = 90.0

[enrichment]
enabled = true
timeout_secs = 7
"#,
        )
        .unwrap();
        let params = config.deliberation_params();
        assert_eq!(params.thresholds.veto_confidence, 90.0);
        assert!(params.enrichment_enabled);
        assert_eq!(params.enrichment_timeout, Duration::from_secs(7));
    }
}
