//! Transaction signal: the raw input to a deliberation.

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status reported by the bank for the disputed charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankStatus {
    Success,
    Failed,
    /// Gateway timeout: the bank's true state is unknown
    #[serde(alias = "TIMEOUT_504")]
    Timeout,
    Pending,
}

impl BankStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BankStatus::Success => "SUCCESS",
            BankStatus::Failed => "FAILED",
            BankStatus::Timeout => "TIMEOUT",
            BankStatus::Pending => "PENDING",
        }
    }

    /// Timeout and pending leave the settlement state unknowable
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, BankStatus::Timeout | BankStatus::Pending)
    }
}

impl std::fmt::Display for BankStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BankStatus {
    type Err = DomainError;

    /// Accepts the canonical names plus the network status codes used by
    /// merchant webhooks (`SUCCESS_200`, `FAILED_402`, `TIMEOUT_504`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SUCCESS" | "SUCCESS_200" | "200" => Ok(BankStatus::Success),
            "FAILED" | "FAILED_402" | "402" => Ok(BankStatus::Failed),
            "TIMEOUT" | "TIMEOUT_504" | "504" => Ok(BankStatus::Timeout),
            "PENDING" => Ok(BankStatus::Pending),
            _ => Err(DomainError::UnknownBankStatus(s.to_string())),
        }
    }
}

/// Status of the disputed charge in the internal ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerStatus {
    Found,
    NotFound,
    Pending,
}

impl LedgerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerStatus::Found => "FOUND",
            LedgerStatus::NotFound => "NOT_FOUND",
            LedgerStatus::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for LedgerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LedgerStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "FOUND" => Ok(LedgerStatus::Found),
            "NOT_FOUND" | "NOTFOUND" => Ok(LedgerStatus::NotFound),
            "PENDING" => Ok(LedgerStatus::Pending),
            _ => Err(DomainError::UnknownLedgerStatus(s.to_string())),
        }
    }
}

/// A disputed transaction as observed by the external systems.
///
/// Owned by the caller and passed by value into the engine.
///
/// # Example
///
/// ```
/// use tribunal_domain::{BankStatus, LedgerStatus, TransactionSignal};
///
/// let signal = TransactionSignal::new(
///     "TXN-1",
///     "I was charged but never got my order",
///     BankStatus::Failed,
///     LedgerStatus::NotFound,
///     99.99,
/// );
/// assert_eq!(signal.transaction_id, "TXN-1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSignal {
    pub transaction_id: String,
    pub user_claim: String,
    pub bank_status: BankStatus,
    pub ledger_status: LedgerStatus,
    /// Amount in currency units, never negative
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl TransactionSignal {
    /// Create a signal stamped with the current time
    pub fn new(
        transaction_id: impl Into<String>,
        user_claim: impl Into<String>,
        bank_status: BankStatus,
        ledger_status: LedgerStatus,
        amount: f64,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            user_claim: user_claim.into(),
            bank_status,
            ledger_status,
            amount,
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Boundary check for the amount (strictly positive and finite)
    pub fn validate_amount(amount: f64) -> Result<f64, DomainError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(amount)
        } else {
            Err(DomainError::InvalidAmount(amount))
        }
    }
}
