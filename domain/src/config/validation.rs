//! Configuration validation issues.
//!
//! Validation never fails hard by itself: callers collect [`ConfigIssue`]s,
//! print warnings, and refuse to start only when [`ConfigIssue::has_errors`].

use crate::verdict::policy::CircuitBreakerThresholds;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A threshold lies outside 0-100.
    ThresholdOutOfRange,
    /// A consensus threshold of 50 or less lets a split two-role vote through.
    PermissiveConsensus,
    /// Enrichment timeout of zero seconds: every call would time out.
    ZeroEnrichmentTimeout,
    /// Enrichment temperature outside 0.0-2.0.
    TemperatureOutOfRange,
    /// Enrichment enabled without a model name.
    MissingEnrichmentModel,
    /// Enrichment enabled but the API key variable is unset.
    MissingApiKey,
    /// History enabled with an empty file path.
    EmptyHistoryPath,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// Check circuit-breaker thresholds
pub fn validate_thresholds(thresholds: &CircuitBreakerThresholds) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    for (name, value) in [
        ("min_confidence", thresholds.min_confidence),
        ("consensus", thresholds.consensus),
        ("veto_confidence", thresholds.veto_confidence),
    ] {
        if !(0.0..=100.0).contains(&value) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ThresholdOutOfRange,
                format!("thresholds.{name} = {value} is outside 0-100"),
            ));
        }
    }

    if (0.0..=50.0).contains(&thresholds.consensus) {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::PermissiveConsensus,
            format!(
                "thresholds.consensus = {} accepts a split vote between the two roles",
                thresholds.consensus
            ),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_valid() {
        assert!(validate_thresholds(&CircuitBreakerThresholds::default()).is_empty());
    }

    #[test]
    fn out_of_range_is_error() {
        let issues = validate_thresholds(&CircuitBreakerThresholds {
            min_confidence: -1.0,
            veto_confidence: 120.0,
            ..Default::default()
        });
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.code == ConfigIssueCode::ThresholdOutOfRange));
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn permissive_consensus_warns() {
        let issues = validate_thresholds(&CircuitBreakerThresholds {
            consensus: 50.0,
            ..Default::default()
        });
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!ConfigIssue::has_errors(&[]));
    }
}
