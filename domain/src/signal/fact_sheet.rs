//! FactSheet: the objective, opinion-free view of a transaction.

use super::transaction::{BankStatus, TransactionSignal};
use serde::{Deserialize, Serialize};

/// Whether the bank and the ledger agree about the transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataConsistency {
    /// Bank and ledger agree
    Consistent,
    /// Bank and ledger disagree
    Conflicting,
    /// The true state cannot be established (timeout or pending)
    Indeterminate,
}

impl DataConsistency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataConsistency::Consistent => "CONSISTENT",
            DataConsistency::Conflicting => "CONFLICTING",
            DataConsistency::Indeterminate => "INDETERMINATE",
        }
    }
}

impl std::fmt::Display for DataConsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Facts extracted by the Signal Analyst.
///
/// Fields are private so the consistency classification can only come from
/// [`analyze`](super::analyst::analyze); no role can set it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactSheet {
    transaction_id: String,
    bank_response_summary: String,
    ledger_entry_exists: bool,
    ledger_state: String,
    data_consistency: DataConsistency,
    signal: TransactionSignal,
}

impl FactSheet {
    pub(crate) fn new(
        signal: TransactionSignal,
        bank_response_summary: String,
        data_consistency: DataConsistency,
    ) -> Self {
        Self {
            transaction_id: signal.transaction_id.clone(),
            bank_response_summary,
            ledger_entry_exists: signal.ledger_status == super::LedgerStatus::Found,
            ledger_state: signal.ledger_status.as_str().to_string(),
            data_consistency,
            signal,
        }
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn bank_response_summary(&self) -> &str {
        &self.bank_response_summary
    }

    pub fn ledger_entry_exists(&self) -> bool {
        self.ledger_entry_exists
    }

    pub fn ledger_state(&self) -> &str {
        &self.ledger_state
    }

    pub fn data_consistency(&self) -> DataConsistency {
        self.data_consistency
    }

    /// The originating signal
    pub fn signal(&self) -> &TransactionSignal {
        &self.signal
    }

    pub fn bank_status(&self) -> BankStatus {
        self.signal.bank_status
    }

    pub fn is_consistent(&self) -> bool {
        self.data_consistency == DataConsistency::Consistent
    }

    pub fn is_indeterminate(&self) -> bool {
        self.data_consistency == DataConsistency::Indeterminate
    }

    /// Bank confirmed failure and the ledger has nothing: the charge never happened
    pub fn is_clear_failure(&self) -> bool {
        self.is_consistent() && !self.ledger_entry_exists
    }

    /// Bank confirmed success and the ledger has the entry: the claim contradicts the data
    pub fn is_clear_success(&self) -> bool {
        self.is_consistent() && self.ledger_entry_exists
    }
}
