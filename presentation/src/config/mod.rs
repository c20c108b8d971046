//! Presentation-level configuration
//!
//! Resolves how results are rendered from the config file and CLI flags.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use tribunal_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Print round-by-round progress to stderr
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Settings from the `[output]` section
    pub fn from_file(format: Option<OutputFormat>, color: bool, progress: bool) -> Self {
        Self {
            format: format.unwrap_or_default(),
            color,
            show_progress: progress,
        }
    }

    /// Apply CLI flags. Machine-readable output never shows progress.
    pub fn with_cli(mut self, format: Option<CliOutputFormat>, quiet: bool) -> Self {
        if let Some(format) = format {
            self.format = format.into();
        }
        self.show_progress = self.show_progress && !quiet && !self.format.is_machine_readable();
        self
    }
}
