//! Aggregate statistics over recorded deliberations.

use crate::ports::verdict_recorder::DeliberationRecord;
use serde::Serialize;
use tribunal_domain::FinalDecision;

/// Totals across a verdict history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerdictStats {
    pub total: usize,
    pub relief: usize,
    pub deny: usize,
    pub escalated: usize,
    /// Sum of amounts on escalated verdicts
    pub amount_held: f64,
    pub average_confidence: f64,
}

impl VerdictStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DeliberationRecord>,
    {
        let mut stats = Self::default();
        let mut confidence_sum = 0.0;

        for record in records {
            stats.total += 1;
            confidence_sum += record.verdict.confidence;
            match record.verdict.decision {
                FinalDecision::Relief => stats.relief += 1,
                FinalDecision::Deny => stats.deny += 1,
                FinalDecision::Escalate => {
                    stats.escalated += 1;
                    stats.amount_held += record.amount;
                }
            }
        }

        if stats.total > 0 {
            stats.average_confidence = confidence_sum / stats.total as f64;
        }
        stats
    }

    /// Share of verdicts that tripped the circuit breaker, 0-100
    pub fn escalation_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.escalated as f64 / self.total as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribunal_domain::{CircuitBreakerThresholds, Scenario, deliberate};

    fn record(scenario: Scenario) -> DeliberationRecord {
        let outcome = deliberate(scenario.signal(), CircuitBreakerThresholds::default());
        DeliberationRecord::from_outcome(&outcome)
    }

    #[test]
    fn test_empty_history() {
        let empty: Vec<DeliberationRecord> = Vec::new();
        let stats = VerdictStats::from_records(&empty);
        assert_eq!(stats, VerdictStats::default());
        assert_eq!(stats.escalation_rate(), 0.0);
    }

    #[test]
    fn test_counts_every_scenario() {
        let records: Vec<_> = Scenario::ALL.iter().map(|s| record(*s)).collect();
        let stats = VerdictStats::from_records(&records);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.relief, 1);
        assert_eq!(stats.deny, 1);
        assert_eq!(stats.escalated, 3);
        assert!((stats.escalation_rate() - 60.0).abs() < 1e-9);

        let held: f64 = records
            .iter()
            .filter(|r| r.verdict.is_escalated())
            .map(|r| r.amount)
            .sum();
        assert!((stats.amount_held - held).abs() < 1e-9);
    }

    #[test]
    fn test_average_confidence() {
        let records = vec![record(Scenario::HappyPath), record(Scenario::Adversarial)];
        let stats = VerdictStats::from_records(&records);
        assert!((stats.average_confidence - (80.0 + 77.5) / 2.0).abs() < 1e-9);
    }
}
