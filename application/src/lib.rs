//! Application layer for payment-tribunal
//!
//! This crate contains use cases, port definitions, and deliberation
//! parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DeliberationParams;
pub use ports::{
    enrichment::{EnrichmentGateway, GatewayError},
    progress::{NoProgress, ProgressNotifier},
    verdict_recorder::{DeliberationRecord, NoVerdictRecorder, VerdictRecorder},
};
pub use use_cases::intake::{
    DisputeEvent, IntakeDecision, IntakeError, admit, generate_transaction_id, screen,
};
pub use use_cases::run_tribunal::{EnrichmentReport, RunTribunalUseCase, TribunalOutcome};
pub use use_cases::stats::VerdictStats;
