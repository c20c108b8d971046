//! The Verdict: the only record that leaves a deliberation.

use crate::debate::stance::FinalDecision;
use serde::{Deserialize, Serialize};

/// Prefix on the reasoning of every escalated verdict
pub const CIRCUIT_BREAKER_PREFIX: &str = "CIRCUIT BREAKER ACTIVATED. Strategic Refusal engaged.";

/// Final outcome of one deliberation.
///
/// Build through the constructors: they keep
/// `decision == ESCALATE` iff `circuit_breaker_triggered`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub transaction_id: String,
    pub decision: FinalDecision,
    /// 0-100
    pub confidence: f64,
    pub reasoning: String,
    pub circuit_breaker_triggered: bool,
    /// Present iff the circuit breaker fired
    pub escalation_reason: Option<String>,
    pub debate_summary: Option<String>,
}

impl Verdict {
    /// A RELIEF or DENY decision reached by consensus
    pub fn decided(
        transaction_id: impl Into<String>,
        decision: FinalDecision,
        confidence: f64,
        reasoning: impl Into<String>,
    ) -> Self {
        debug_assert!(
            !decision.is_escalation(),
            "escalation must go through Verdict::escalated"
        );
        Self {
            transaction_id: transaction_id.into(),
            decision,
            confidence,
            reasoning: reasoning.into(),
            circuit_breaker_triggered: false,
            escalation_reason: None,
            debate_summary: None,
        }
    }

    /// Strategic refusal: hand the case to a human
    pub fn escalated(
        transaction_id: impl Into<String>,
        confidence: f64,
        escalation_reason: impl Into<String>,
    ) -> Self {
        let escalation_reason = escalation_reason.into();
        Self {
            transaction_id: transaction_id.into(),
            decision: FinalDecision::Escalate,
            confidence,
            reasoning: format!("{CIRCUIT_BREAKER_PREFIX} {escalation_reason}"),
            circuit_breaker_triggered: true,
            escalation_reason: Some(escalation_reason),
            debate_summary: None,
        }
    }

    /// Deterministic DENY for input rejected before deliberation
    pub fn rejected_input(transaction_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::decided(transaction_id, FinalDecision::Deny, 100.0, reason)
    }

    pub fn with_debate_summary(mut self, summary: impl Into<String>) -> Self {
        self.debate_summary = Some(summary.into());
        self
    }

    pub fn is_escalated(&self) -> bool {
        self.decision.is_escalation()
    }

    /// Whether the decision and the circuit-breaker flag agree
    pub fn is_well_formed(&self) -> bool {
        self.decision.is_escalation() == self.circuit_breaker_triggered
            && self.circuit_breaker_triggered == self.escalation_reason.is_some()
    }
}
