//! Judge: renders the Verdict and enforces the circuit breaker.
//!
//! The Judge is total. Missing votes, unresolved agreement and every
//! safety trigger resolve to ESCALATE; nothing is ever treated as an
//! implicit approval.

use super::entities::Verdict;
use super::policy::{
    CircuitBreakerThresholds, CircuitBreakerTrigger, DeliberationMetrics, evaluate_circuit_breaker,
};
use super::summary::render_debate_summary;
use crate::debate::argument::AgentVote;
use crate::debate::log::DebateLog;
use crate::debate::role::Role;
use crate::debate::stance::FinalDecision;
use crate::signal::FactSheet;

/// Display name used in transcripts
pub const JUDGE: &str = "Judge";

/// Number of roles that must cast a final vote
pub const EXPECTED_VOTES: usize = Role::ALL.len();

/// Render a verdict from the final-round votes
pub fn render(
    facts: &FactSheet,
    votes: &[AgentVote],
    thresholds: &CircuitBreakerThresholds,
) -> Verdict {
    let transaction_id = facts.transaction_id();

    let responded = roles_voted(votes);
    if responded < EXPECTED_VOTES {
        return incomplete(transaction_id, responded);
    }

    let metrics = DeliberationMetrics::from_votes(votes, facts.bank_status());
    let triggers = evaluate_circuit_breaker(&metrics, thresholds);

    if let Some((primary, secondary)) = triggers.split_first() {
        return Verdict::escalated(
            transaction_id,
            100.0 - metrics.consensus,
            escalation_reason(primary, secondary),
        );
    }

    let Some(stance) = metrics.modal_stance else {
        return incomplete(transaction_id, responded);
    };

    let decision = FinalDecision::from_stance(stance);
    if decision.is_escalation() {
        return Verdict::escalated(
            transaction_id,
            100.0 - metrics.consensus,
            CircuitBreakerTrigger::UnresolvedStance.describe(),
        );
    }

    let matching: Vec<f64> = votes
        .iter()
        .filter(|v| v.vote == stance)
        .map(|v| v.confidence)
        .collect();
    let average = matching.iter().sum::<f64>() / matching.len() as f64;

    Verdict::decided(
        transaction_id,
        decision,
        average,
        format!(
            "Consensus reached: {decision} at {:.0}% consensus, average confidence {average:.1}%.",
            metrics.consensus
        ),
    )
}

/// Render from a full debate log, attaching the debate summary
pub fn render_log(
    facts: &FactSheet,
    log: &DebateLog,
    thresholds: &CircuitBreakerThresholds,
) -> Verdict {
    render(facts, &log.votes(), thresholds).with_debate_summary(render_debate_summary(log))
}

/// Transcript line announcing the verdict
pub fn verdict_line(verdict: &Verdict) -> String {
    format!(
        "VERDICT: {} | Circuit Breaker: {}",
        verdict.decision, verdict.circuit_breaker_triggered
    )
}

/// Distinct roles with at least one final vote
fn roles_voted(votes: &[AgentVote]) -> usize {
    Role::ALL
        .iter()
        .filter(|role| votes.iter().any(|v| v.role_name == role.name()))
        .count()
}

fn incomplete(transaction_id: &str, received: usize) -> Verdict {
    let trigger = CircuitBreakerTrigger::IncompleteDeliberation {
        received,
        expected: EXPECTED_VOTES,
    };
    Verdict::escalated(transaction_id, 0.0, trigger.describe())
}

fn escalation_reason(primary: &CircuitBreakerTrigger, secondary: &[CircuitBreakerTrigger]) -> String {
    let reason = primary.describe();
    if secondary.is_empty() {
        return reason;
    }

    let also: Vec<&str> = secondary.iter().map(CircuitBreakerTrigger::label).collect();
    format!("{reason} [Also triggered: {}]", also.join(", "))
}
