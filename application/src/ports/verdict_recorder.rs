//! Port for recording completed deliberations.
//!
//! Defines the [`VerdictRecorder`] trait for appending each completed
//! deliberation to an external history (one flat record per verdict).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! signal, verdict and transcript in a machine-readable format (JSONL).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tribunal_domain::{
    BankStatus, DataConsistency, DeliberationOutcome, LedgerStatus, TranscriptEntry, Verdict,
};

/// Flat history record: the signal fields, the verdict and the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliberationRecord {
    pub transaction_id: String,
    pub user_claim: String,
    pub bank_status: BankStatus,
    pub ledger_status: LedgerStatus,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
    pub data_consistency: DataConsistency,
    pub verdict: Verdict,
    pub transcript: Vec<TranscriptEntry>,
}

impl DeliberationRecord {
    pub fn from_outcome(outcome: &DeliberationOutcome) -> Self {
        let signal = outcome.facts.signal();
        Self {
            transaction_id: signal.transaction_id.clone(),
            user_claim: signal.user_claim.clone(),
            bank_status: signal.bank_status,
            ledger_status: signal.ledger_status,
            amount: signal.amount,
            timestamp: signal.timestamp,
            data_consistency: outcome.facts.data_consistency(),
            verdict: outcome.verdict.clone(),
            transcript: outcome.transcript.entries().to_vec(),
        }
    }
}

/// Port for appending deliberation records to a history.
///
/// The `record` method is intentionally synchronous and non-fallible: a
/// storage failure must never change or withhold a verdict. Writes are
/// append-only and the engine never reads them back.
pub trait VerdictRecorder: Send + Sync {
    fn record(&self, record: &DeliberationRecord);
}

/// No-op implementation for tests and when history is disabled.
pub struct NoVerdictRecorder;

impl VerdictRecorder for NoVerdictRecorder {
    fn record(&self, _record: &DeliberationRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribunal_domain::{CircuitBreakerThresholds, Scenario, deliberate};

    #[test]
    fn test_record_flattens_signal_and_verdict() {
        let outcome = deliberate(
            Scenario::CircuitBreaker.signal(),
            CircuitBreakerThresholds::default(),
        );
        let record = DeliberationRecord::from_outcome(&outcome);

        assert_eq!(record.transaction_id, "TXN-AMBIGUOUS-003");
        assert_eq!(record.bank_status, BankStatus::Timeout);
        assert_eq!(record.amount, 1299.99);
        assert_eq!(record.data_consistency, DataConsistency::Indeterminate);
        assert!(record.verdict.circuit_breaker_triggered);
        assert_eq!(record.transcript.len(), outcome.transcript.len());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["verdict"]["decision"], "ESCALATE");
        assert_eq!(json["transcript"][0]["role"], "Signal Analyst");
        let back: DeliberationRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
