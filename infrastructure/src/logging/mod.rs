//! Verdict history: JSONL persistence of completed deliberations.
//!
//! Provides [`JsonlVerdictRecorder`], a JSONL file writer that implements
//! the [`VerdictRecorder`](tribunal_application::VerdictRecorder) port, and
//! [`read_history`] for the `stats` command.

mod history;
mod jsonl_recorder;

pub use history::{HistoryError, read_history};
pub use jsonl_recorder::JsonlVerdictRecorder;
