//! How a tribunal outcome is rendered.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fact sheet, every round and the verdict
    #[default]
    Full,
    /// Verdict line, confidence and reason
    Verdict,
    /// Machine-readable outcome on stdout
    Json,
}

impl OutputFormat {
    /// Whether stdout must stay machine-readable
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }

    /// Whether the rendered outcome walks through the debate rounds
    pub fn includes_debate(&self) -> bool {
        !matches!(self, OutputFormat::Verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_is_default_and_shows_rounds() {
        let format = OutputFormat::default();
        assert_eq!(format, OutputFormat::Full);
        assert!(format.includes_debate());
        assert!(!format.is_machine_readable());
    }

    #[test]
    fn test_verdict_only_skips_rounds() {
        assert!(!OutputFormat::Verdict.includes_debate());
    }

    #[test]
    fn test_toml_style_names() {
        assert_eq!(serde_json::to_string(&OutputFormat::Verdict).unwrap(), "\"verdict\"");
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert!(format.is_machine_readable());
        assert!(serde_json::from_str::<OutputFormat>("\"synthesis\"").is_err());
    }
}
