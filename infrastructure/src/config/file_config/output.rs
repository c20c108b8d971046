//! `[output]` section: format, color and progress lines

use serde::{Deserialize, Serialize};
use tribunal_domain::OutputFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Unset means `full` unless `--output` says otherwise
    pub format: Option<OutputFormat>,
    pub color: bool,
    /// Round-by-round progress on stderr
    pub progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            progress: true,
        }
    }
}
