//! Output formatter trait

use tribunal_application::TribunalOutcome;
use tribunal_domain::{OutputFormat, Verdict};

/// Trait for formatting tribunal outcomes
pub trait OutputFormatter {
    /// Format the fact sheet, every round and the verdict
    fn format(&self, outcome: &TribunalOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &TribunalOutcome) -> String;

    /// Format the verdict only (concise output)
    fn format_verdict_only(&self, verdict: &Verdict) -> String;

    fn render(&self, format: OutputFormat, outcome: &TribunalOutcome) -> String {
        if format.is_machine_readable() {
            self.format_json(outcome)
        } else if format.includes_debate() {
            self.format(outcome)
        } else {
            self.format_verdict_only(&outcome.deliberation.verdict)
        }
    }
}
