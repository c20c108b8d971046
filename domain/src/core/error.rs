//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These only arise at the boundary (parsing and validating inbound data).
/// Once a [`TransactionSignal`](crate::TransactionSignal) exists, deliberation
/// is total and never returns an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid transaction amount: {0} (must be greater than zero)")]
    InvalidAmount(f64),

    #[error("Unknown bank status: {0}")]
    UnknownBankStatus(String),

    #[error("Unknown ledger status: {0}")]
    UnknownLedgerStatus(String),

    #[error("Unknown stance: {0}")]
    UnknownStance(String),

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
}

impl DomainError {
    /// Whether this error came from an unrecognized enum value
    pub fn is_unknown_value(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownBankStatus(_)
                | DomainError::UnknownLedgerStatus(_)
                | DomainError::UnknownStance(_)
        )
    }
}
