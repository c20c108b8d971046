//! JSONL file writer for completed deliberations.
//!
//! Each [`DeliberationRecord`] is serialized as a single JSON line and
//! appended to the history file via a buffered writer.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tribunal_application::{DeliberationRecord, VerdictRecorder};

/// JSONL verdict recorder that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record
/// and on `Drop`.
pub struct JsonlVerdictRecorder {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlVerdictRecorder {
    /// Open the history file for appending.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create verdict history directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open verdict history {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VerdictRecorder for JsonlVerdictRecorder {
    fn record(&self, record: &DeliberationRecord) {
        let line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize verdict {}: {}", record.transaction_id, e);
                return;
            }
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!(
                    "Could not append verdict {} to {}: {}",
                    record.transaction_id,
                    self.path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for JsonlVerdictRecorder {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribunal_domain::{CircuitBreakerThresholds, Scenario, deliberate};

    fn record(scenario: Scenario) -> DeliberationRecord {
        let outcome = deliberate(scenario.signal(), CircuitBreakerThresholds::default());
        DeliberationRecord::from_outcome(&outcome)
    }

    #[test]
    fn test_writes_one_flat_record_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let recorder = JsonlVerdictRecorder::new(&path).unwrap();

        recorder.record(&record(Scenario::HappyPath));
        recorder.record(&record(Scenario::CircuitBreaker));
        drop(recorder);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["bank_status"], "FAILED");
        assert_eq!(first["verdict"]["decision"], "RELIEF");
        assert!(first["transcript"].as_array().unwrap().len() >= 8);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["verdict"]["decision"], "ESCALATE");
        assert_eq!(second["verdict"]["circuit_breaker_triggered"], true);
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.jsonl");

        JsonlVerdictRecorder::new(&path)
            .unwrap()
            .record(&record(Scenario::Adversarial));
        JsonlVerdictRecorder::new(&path)
            .unwrap()
            .record(&record(Scenario::Pending));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_returns_none_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlVerdictRecorder::new(dir.path()).is_none());
    }
}
