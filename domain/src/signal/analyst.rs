//! Signal Analyst: deterministic fact extraction.
//!
//! The analyst never expresses an opinion. It reports what the bank and the
//! ledger say and classifies whether they agree.

use super::fact_sheet::{DataConsistency, FactSheet};
use super::transaction::{BankStatus, LedgerStatus, TransactionSignal};

/// Display name used in transcripts
pub const SIGNAL_ANALYST: &str = "Signal Analyst";

/// Classify the agreement between bank and ledger.
///
/// Indeterminacy is checked first and wins over any apparent consistency.
pub fn determine_data_consistency(bank: BankStatus, ledger: LedgerStatus) -> DataConsistency {
    if bank.is_indeterminate() || ledger == LedgerStatus::Pending {
        return DataConsistency::Indeterminate;
    }

    match (bank, ledger) {
        (BankStatus::Failed, LedgerStatus::NotFound) | (BankStatus::Success, LedgerStatus::Found) => {
            DataConsistency::Consistent
        }
        _ => DataConsistency::Conflicting,
    }
}

/// Human-readable summary of the bank's response
pub fn bank_response_summary(bank: BankStatus) -> &'static str {
    match bank {
        BankStatus::Success => "Bank API confirmed transaction SUCCESS",
        BankStatus::Failed => "Bank API confirmed transaction FAILED",
        BankStatus::Timeout => "Bank API returned 504 GATEWAY TIMEOUT - state UNKNOWN",
        BankStatus::Pending => "Bank API returned PENDING - transaction in progress",
    }
}

/// Build the FactSheet for a signal. Total: never fails.
pub fn analyze(signal: TransactionSignal) -> FactSheet {
    let consistency = determine_data_consistency(signal.bank_status, signal.ledger_status);
    let summary = bank_response_summary(signal.bank_status).to_string();
    FactSheet::new(signal, summary, consistency)
}
