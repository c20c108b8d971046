//! Dispute intake
//!
//! Validates inbound dispute payloads before any deliberation starts.
//! A payload that fails validation never reaches the engine: it gets a
//! deterministic DENY with the circuit breaker untouched.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use tribunal_domain::{BankStatus, DomainError, LedgerStatus, TransactionSignal, Verdict};
use uuid::Uuid;

/// Errors raised while admitting a dispute
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Malformed dispute event: {0}")]
    Malformed(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Loosely-typed inbound dispute payload.
///
/// Accepts snake_case and camelCase keys. Statuses stay strings until
/// [`admit`] so an unknown value is a validation error, not a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisputeEvent {
    #[serde(default, alias = "transactionId")]
    pub transaction_id: Option<String>,
    #[serde(default, alias = "userClaim")]
    pub user_claim: String,
    #[serde(alias = "bankStatus")]
    pub bank_status: String,
    #[serde(alias = "ledgerStatus")]
    pub ledger_status: String,
    pub amount: f64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl DisputeEvent {
    pub fn from_json(json: &str) -> Result<Self, IntakeError> {
        serde_json::from_str(json).map_err(|e| IntakeError::Malformed(e.to_string()))
    }
}

/// Result of screening a dispute
#[derive(Debug, Clone)]
pub enum IntakeDecision {
    /// Well-formed: ready for deliberation
    Admitted(TransactionSignal),
    /// Rejected at the boundary with a deterministic DENY
    Rejected { verdict: Verdict, reason: String },
}

/// Generate a transaction id of the form `TX-HHMMSS-XXXX`
pub fn generate_transaction_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string()[..4].to_uppercase();
    format!("TX-{}-{}", now.format("%H%M%S"), suffix)
}

/// Validate `event` into a signal, generating an id if absent
pub fn admit(event: DisputeEvent, now: DateTime<Utc>) -> Result<TransactionSignal, IntakeError> {
    let amount = TransactionSignal::validate_amount(event.amount)?;
    let bank_status: BankStatus = event.bank_status.parse()?;
    let ledger_status: LedgerStatus = event.ledger_status.parse()?;

    let transaction_id = event
        .transaction_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| generate_transaction_id(now));

    Ok(TransactionSignal::new(
        transaction_id,
        event.user_claim,
        bank_status,
        ledger_status,
        amount,
    )
    .with_timestamp(event.timestamp.unwrap_or(now)))
}

/// Screen a dispute: admit it, or reject it with a deterministic DENY
pub fn screen(event: DisputeEvent, now: DateTime<Utc>) -> IntakeDecision {
    let fallback_id = event
        .transaction_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| "UNKNOWN".to_string());

    match admit(event, now) {
        Ok(signal) => IntakeDecision::Admitted(signal),
        Err(e) => {
            warn!("Rejected dispute {} at intake: {}", fallback_id, e);
            let reason = e.to_string();
            IntakeDecision::Rejected {
                verdict: Verdict::rejected_input(
                    fallback_id,
                    format!("Rejected at intake: {reason}"),
                ),
                reason,
            }
        }
    }
}
