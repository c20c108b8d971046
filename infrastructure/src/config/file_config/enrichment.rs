//! Enrichment configuration from TOML (`[enrichment]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tribunal_domain::{ConfigIssue, ConfigIssueCode};

/// Raw enrichment configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEnrichmentConfig {
    /// Off unless explicitly enabled
    pub enabled: bool,
    /// OpenAI-compatible base URL
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for FileEnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.3,
            timeout_secs: 20,
        }
    }
}

impl FileEnrichmentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured variable (empty counts as unset)
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroEnrichmentTimeout,
                "enrichment.timeout_secs cannot be 0",
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::TemperatureOutOfRange,
                format!(
                    "enrichment.temperature = {} is outside 0.0-2.0",
                    self.temperature
                ),
            ));
        }

        if !self.enabled {
            return issues;
        }

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingEnrichmentModel,
                "enrichment.model cannot be empty when enrichment is enabled",
            ));
        }

        if self.api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey,
                format!(
                    "enrichment is enabled but ${} is not set, arguments stay deterministic",
                    self.api_key_env
                ),
            ));
        }

        issues
    }
}
