//! Judgment: consensus scoring, the circuit breaker and the Verdict.

pub mod entities;
pub mod judge;
pub mod policy;
pub mod summary;

pub use entities::{CIRCUIT_BREAKER_PREFIX, Verdict};
pub use judge::{EXPECTED_VOTES, JUDGE, render, render_log, verdict_line};
pub use policy::{
    CircuitBreakerThresholds, CircuitBreakerTrigger, DeliberationMetrics, VetoRecord, consensus,
    evaluate_circuit_breaker, modal_stance, should_trigger_circuit_breaker,
};
pub use summary::render_debate_summary;
