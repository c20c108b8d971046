//! Consensus scoring and the circuit-breaker policy.
//!
//! # Rules
//!
//! Evaluated in this order; the first one that fires is the primary reason:
//!
//! | # | Condition | Trigger |
//! |---|-----------|---------|
//! | 1 | `min_confidence < 40` | [`CircuitBreakerTrigger::LowConfidence`] |
//! | 2 | `consensus < 60` | [`CircuitBreakerTrigger::WeakAgreement`] |
//! | 3 | any vote vetoed | [`CircuitBreakerTrigger::Veto`] |
//! | 4 | bank TIMEOUT or PENDING | [`CircuitBreakerTrigger::IndeterminateState`] |
//! | 5 | agreed stance is UNCERTAIN | [`CircuitBreakerTrigger::UnresolvedStance`] |
//!
//! All comparisons are strict.

use crate::core::string::excerpt;
use crate::debate::argument::AgentVote;
use crate::debate::stance::RoleStance;
use crate::signal::BankStatus;
use serde::{Deserialize, Serialize};

/// Thresholds that trigger strategic refusal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitBreakerThresholds {
    /// Escalate if any vote's confidence is below this
    pub min_confidence: f64,
    /// Escalate if the consensus percentage is below this
    pub consensus: f64,
    /// Risk Officer vetoes when its DENY confidence exceeds this
    pub veto_confidence: f64,
}

impl Default for CircuitBreakerThresholds {
    fn default() -> Self {
        Self {
            min_confidence: 40.0,
            consensus: 60.0,
            veto_confidence: 80.0,
        }
    }
}

/// Percentage (0-100) of votes matching the modal vote. Zero when empty.
pub fn consensus(votes: &[AgentVote]) -> f64 {
    let Some(modal) = modal_stance(votes) else {
        return 0.0;
    };
    let matching = votes.iter().filter(|v| v.vote == modal).count();
    matching as f64 / votes.len() as f64 * 100.0
}

/// Most common vote value; ties go to the value encountered first
pub fn modal_stance(votes: &[AgentVote]) -> Option<RoleStance> {
    let mut counts: Vec<(RoleStance, usize)> = Vec::new();
    for vote in votes {
        match counts.iter_mut().find(|(stance, _)| *stance == vote.vote) {
            Some((_, n)) => *n += 1,
            None => counts.push((vote.vote, 1)),
        }
    }

    let max = counts.iter().map(|(_, n)| *n).max()?;
    counts
        .into_iter()
        .find(|(_, n)| *n == max)
        .map(|(stance, _)| stance)
}

/// The vetoing role and its stated reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VetoRecord {
    pub role_name: String,
    pub reasoning: String,
}

/// Aggregate figures computed from the final votes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliberationMetrics {
    pub min_confidence: f64,
    pub consensus: f64,
    pub modal_stance: Option<RoleStance>,
    pub veto: Option<VetoRecord>,
    pub bank_status: BankStatus,
}

impl DeliberationMetrics {
    pub fn from_votes(votes: &[AgentVote], bank_status: BankStatus) -> Self {
        let min_confidence = votes
            .iter()
            .map(|v| v.confidence)
            .fold(None, |acc: Option<f64>, c| Some(acc.map_or(c, |m| m.min(c))))
            .unwrap_or(0.0);

        let veto = votes.iter().find(|v| v.veto_triggered).map(|v| VetoRecord {
            role_name: v.role_name.clone(),
            reasoning: v.final_reasoning.clone(),
        });

        Self {
            min_confidence,
            consensus: consensus(votes),
            modal_stance: modal_stance(votes),
            veto,
            bank_status,
        }
    }

    pub fn veto_triggered(&self) -> bool {
        self.veto.is_some()
    }

    pub fn is_indeterminate(&self) -> bool {
        self.bank_status.is_indeterminate()
    }
}

/// A safety condition that forces escalation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CircuitBreakerTrigger {
    LowConfidence { min_confidence: f64, threshold: f64 },
    WeakAgreement { consensus: f64, threshold: f64 },
    Veto(VetoRecord),
    IndeterminateState { bank_status: BankStatus },
    UnresolvedStance,
    IncompleteDeliberation { received: usize, expected: usize },
}

impl CircuitBreakerTrigger {
    /// Short uppercase label
    pub fn label(&self) -> &'static str {
        match self {
            CircuitBreakerTrigger::LowConfidence { .. } => "LOW CONFIDENCE",
            CircuitBreakerTrigger::WeakAgreement { .. } => "WEAK AGREEMENT",
            CircuitBreakerTrigger::Veto(_) => "VETO TRIGGERED",
            CircuitBreakerTrigger::IndeterminateState { .. } => "INDETERMINATE STATE",
            CircuitBreakerTrigger::UnresolvedStance => "UNRESOLVED",
            CircuitBreakerTrigger::IncompleteDeliberation { .. } => "INCOMPLETE DELIBERATION",
        }
    }

    /// Full human-readable reason
    pub fn describe(&self) -> String {
        match self {
            CircuitBreakerTrigger::LowConfidence {
                min_confidence,
                threshold,
            } => format!(
                "LOW CONFIDENCE: Minimum agent confidence ({min_confidence:.1}%) below threshold ({threshold}%)"
            ),
            CircuitBreakerTrigger::WeakAgreement {
                consensus,
                threshold,
            } => format!(
                "WEAK AGREEMENT: Consensus ({consensus:.1}%) below threshold ({threshold}%)"
            ),
            CircuitBreakerTrigger::Veto(veto) => format!(
                "VETO TRIGGERED: {} blocked action. Reason: {}",
                veto.role_name,
                excerpt(&veto.reasoning, 160)
            ),
            CircuitBreakerTrigger::IndeterminateState { bank_status } => format!(
                "INDETERMINATE STATE: Bank returned {bank_status}. Cannot confirm transaction state."
            ),
            CircuitBreakerTrigger::UnresolvedStance => {
                "UNRESOLVED: Agents agree only that the outcome is uncertain.".to_string()
            }
            CircuitBreakerTrigger::IncompleteDeliberation { received, expected } => format!(
                "INCOMPLETE DELIBERATION: {received} of {expected} roles voted"
            ),
        }
    }
}

/// Every triggered condition, in priority order
pub fn evaluate_circuit_breaker(
    metrics: &DeliberationMetrics,
    thresholds: &CircuitBreakerThresholds,
) -> Vec<CircuitBreakerTrigger> {
    let mut triggers = Vec::new();

    if metrics.min_confidence < thresholds.min_confidence {
        triggers.push(CircuitBreakerTrigger::LowConfidence {
            min_confidence: metrics.min_confidence,
            threshold: thresholds.min_confidence,
        });
    }

    if metrics.consensus < thresholds.consensus {
        triggers.push(CircuitBreakerTrigger::WeakAgreement {
            consensus: metrics.consensus,
            threshold: thresholds.consensus,
        });
    }

    if let Some(veto) = &metrics.veto {
        triggers.push(CircuitBreakerTrigger::Veto(veto.clone()));
    }

    if metrics.is_indeterminate() {
        triggers.push(CircuitBreakerTrigger::IndeterminateState {
            bank_status: metrics.bank_status,
        });
    }

    if metrics.modal_stance == Some(RoleStance::Uncertain) {
        triggers.push(CircuitBreakerTrigger::UnresolvedStance);
    }

    triggers
}

/// Whether any refusal condition holds
pub fn should_trigger_circuit_breaker(
    metrics: &DeliberationMetrics,
    thresholds: &CircuitBreakerThresholds,
) -> bool {
    !evaluate_circuit_breaker(metrics, thresholds).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(stance: RoleStance, confidence: f64) -> AgentVote {
        AgentVote::new("role", stance, confidence, "reason")
    }

    #[test]
    fn test_consensus_empty_is_zero() {
        assert_eq!(consensus(&[]), 0.0);
        assert_eq!(modal_stance(&[]), None);
    }

    #[test]
    fn test_consensus_agreement_and_split() {
        let agree = [vote(RoleStance::Relief, 80.0), vote(RoleStance::Relief, 70.0)];
        assert_eq!(consensus(&agree), 100.0);

        let split = [vote(RoleStance::Relief, 80.0), vote(RoleStance::Deny, 70.0)];
        assert_eq!(consensus(&split), 50.0);
    }

    #[test]
    fn test_modal_tie_goes_to_first_encountered() {
        let votes = [vote(RoleStance::Deny, 80.0), vote(RoleStance::Relief, 70.0)];
        assert_eq!(modal_stance(&votes), Some(RoleStance::Deny));

        let votes = [
            vote(RoleStance::Uncertain, 50.0),
            vote(RoleStance::Relief, 70.0),
            vote(RoleStance::Relief, 70.0),
        ];
        assert_eq!(modal_stance(&votes), Some(RoleStance::Relief));
        assert!((consensus(&votes) - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_metrics_from_votes() {
        let votes = [
            vote(RoleStance::Uncertain, 50.0),
            AgentVote::veto("Risk Officer", 95.0, "VETO TRIGGERED: timeout"),
        ];
        let metrics = DeliberationMetrics::from_votes(&votes, BankStatus::Timeout);
        assert_eq!(metrics.min_confidence, 50.0);
        assert_eq!(metrics.consensus, 50.0);
        assert!(metrics.veto_triggered());
        assert!(metrics.is_indeterminate());
        assert_eq!(metrics.veto.unwrap().role_name, "Risk Officer");
    }

    #[test]
    fn test_rule_order() {
        let votes = [
            vote(RoleStance::Uncertain, 30.0),
            AgentVote::veto("Risk Officer", 95.0, "VETO"),
        ];
        let metrics = DeliberationMetrics::from_votes(&votes, BankStatus::Pending);
        let triggers = evaluate_circuit_breaker(&metrics, &CircuitBreakerThresholds::default());

        let labels: Vec<_> = triggers.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec![
                "LOW CONFIDENCE",
                "WEAK AGREEMENT",
                "VETO TRIGGERED",
                "INDETERMINATE STATE",
                "UNRESOLVED"
            ]
        );
    }

    #[test]
    fn test_boundaries_are_strict() {
        let thresholds = CircuitBreakerThresholds::default();

        // Exactly 40% confidence and exactly 60% consensus do not trip
        let metrics = DeliberationMetrics {
            min_confidence: 40.0,
            consensus: 60.0,
            modal_stance: Some(RoleStance::Relief),
            veto: None,
            bank_status: BankStatus::Failed,
        };
        assert!(!should_trigger_circuit_breaker(&metrics, &thresholds));

        let just_below = DeliberationMetrics {
            min_confidence: 39.9,
            ..metrics.clone()
        };
        assert!(should_trigger_circuit_breaker(&just_below, &thresholds));

        let weak = DeliberationMetrics {
            consensus: 59.9,
            ..metrics
        };
        assert!(should_trigger_circuit_breaker(&weak, &thresholds));
    }

    #[test]
    fn test_clean_agreement_does_not_trigger() {
        let votes = [vote(RoleStance::Deny, 85.0), vote(RoleStance::Deny, 70.0)];
        let metrics = DeliberationMetrics::from_votes(&votes, BankStatus::Success);
        assert!(!should_trigger_circuit_breaker(
            &metrics,
            &CircuitBreakerThresholds::default()
        ));
    }

    #[test]
    fn test_describe_mentions_bank_status() {
        let trigger = CircuitBreakerTrigger::IndeterminateState {
            bank_status: BankStatus::Timeout,
        };
        assert!(trigger.describe().contains("TIMEOUT"));
        assert!(trigger.describe().starts_with("INDETERMINATE STATE"));
    }
}
