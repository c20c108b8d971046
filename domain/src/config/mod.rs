//! Configuration value objects shared by every layer: the output format
//! and structured validation issues.

mod output_format;
pub mod validation;

pub use output_format::OutputFormat;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity, validate_thresholds};
