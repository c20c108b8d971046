//! Transaction signals and objective fact extraction.
//!
//! ```text
//! TransactionSignal ──analyze()──▶ FactSheet { data_consistency, ... }
//! ```

pub mod analyst;
pub mod fact_sheet;
pub mod transaction;

pub use analyst::{SIGNAL_ANALYST, analyze, bank_response_summary, determine_data_consistency};
pub use fact_sheet::{DataConsistency, FactSheet};
pub use transaction::{BankStatus, LedgerStatus, TransactionSignal};
