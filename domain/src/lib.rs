//! Domain layer for payment-tribunal
//!
//! This crate contains the deliberation engine: fact extraction, the
//! three-round debate, and the circuit-breaker verdict. It has no
//! dependencies on infrastructure or presentation concerns and performs
//! no I/O.
//!
//! # Core Concepts
//!
//! ## Tribunal
//!
//! A disputed charge is judged by four fixed roles:
//!
//! - **Signal Analyst**: classifies bank and ledger data as CONSISTENT,
//!   CONFLICTING or INDETERMINATE. Never opines.
//! - **User Advocate**: argues for the claimant, concedes to clear evidence.
//! - **Risk Officer**: argues against loss and holds veto authority.
//! - **Judge**: scores the final votes and escalates to a human whenever
//!   any safety condition holds.
//!
//! ## Strategic Refusal
//!
//! ESCALATE is a first-class outcome. Low confidence, weak agreement, a
//! veto, an indeterminate bank state, an unresolved agreement or missing
//! votes all trip the circuit breaker.

pub mod config;
pub mod core;
pub mod debate;
pub mod prompt;
pub mod scenarios;
pub mod signal;
pub mod verdict;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity, validate_thresholds};
pub use core::error::DomainError;
pub use debate::{
    ADVOCATE, AgentArgument, AgentVote, Contribution, DebateEntry, DebateLog, Deliberation,
    DeliberationOutcome, Enrichment, FinalDecision, RISK_OFFICER, Role, RoleStance, Round, Stage,
    Transcript, TranscriptEntry, deliberate, parse_enrichment_response,
};
pub use prompt::PromptTemplate;
pub use scenarios::Scenario;
pub use signal::{
    BankStatus, DataConsistency, FactSheet, LedgerStatus, SIGNAL_ANALYST, TransactionSignal,
    analyze,
};
pub use verdict::{
    CIRCUIT_BREAKER_PREFIX, CircuitBreakerThresholds, CircuitBreakerTrigger, DeliberationMetrics,
    JUDGE, Verdict, render_debate_summary, verdict_line,
};
