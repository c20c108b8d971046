//! Reader for the JSONL verdict history.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tribunal_application::DeliberationRecord;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Could not read history {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at {path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read every record in `path`.
///
/// A missing file is an empty history. Blank lines are skipped.
pub fn read_history(path: &Path) -> Result<Vec<DeliberationRecord>, HistoryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(HistoryError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| HistoryError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::JsonlVerdictRecorder;
    use tribunal_application::VerdictRecorder;
    use tribunal_domain::{CircuitBreakerThresholds, Scenario, deliberate};

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let records = read_history(&dir.path().join("absent.jsonl")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_reads_back_what_the_recorder_wrote() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let recorder = JsonlVerdictRecorder::new(&path).unwrap();

        let written: Vec<_> = Scenario::ALL
            .iter()
            .map(|s| {
                let outcome = deliberate(s.signal(), CircuitBreakerThresholds::default());
                DeliberationRecord::from_outcome(&outcome)
            })
            .collect();
        for record in &written {
            recorder.record(record);
        }
        drop(recorder);

        let read = read_history(&path).unwrap();
        assert_eq!(read.len(), written.len());
        assert_eq!(read[2].transaction_id, written[2].transaction_id);
        assert_eq!(read[2].verdict.decision, written[2].verdict.decision);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        std::fs::write(&path, "\n{not json}\n").unwrap();

        match read_history(&path) {
            Err(HistoryError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
