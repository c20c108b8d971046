//! Verdict history configuration from TOML (`[history]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tribunal_domain::{ConfigIssue, ConfigIssueCode};

/// Raw history configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    pub enabled: bool,
    /// JSONL file, relative to the working directory unless absolute
    pub path: PathBuf,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("tribunal-history.jsonl"),
        }
    }
}

impl FileHistoryConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.enabled && self.path.as_os_str().is_empty() {
            vec![ConfigIssue::error(
                ConfigIssueCode::EmptyHistoryPath,
                "history.path cannot be empty when history is enabled",
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_error_only_when_enabled() {
        let mut config = FileHistoryConfig {
            enabled: true,
            path: PathBuf::new(),
        };
        assert!(ConfigIssue::has_errors(&config.validate()));

        config.enabled = false;
        assert!(config.validate().is_empty());
    }
}
