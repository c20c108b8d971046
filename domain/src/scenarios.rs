//! Canonical dispute scenarios.
//!
//! One fixture per path through the tribunal. Used by the `scenario`
//! command and as the reference set for regression tests.

use crate::core::error::DomainError;
use crate::debate::stance::FinalDecision;
use crate::signal::{BankStatus, LedgerStatus, TransactionSignal};
use std::str::FromStr;

/// A named canonical fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Bank FAILED, ledger NOT_FOUND
    HappyPath,
    /// Bank SUCCESS, ledger FOUND, claimant says it failed
    Adversarial,
    /// Bank 504 TIMEOUT, ledger NOT_FOUND
    CircuitBreaker,
    /// Bank and ledger both PENDING
    Pending,
    /// Bank SUCCESS, ledger NOT_FOUND
    Conflicting,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::HappyPath,
        Scenario::Adversarial,
        Scenario::CircuitBreaker,
        Scenario::Pending,
        Scenario::Conflicting,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::HappyPath => "happy_path",
            Scenario::Adversarial => "adversarial",
            Scenario::CircuitBreaker => "circuit_breaker",
            Scenario::Pending => "pending",
            Scenario::Conflicting => "conflicting",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::HappyPath => "Clear failure: bank FAILED, no ledger entry",
            Scenario::Adversarial => "False claim: bank SUCCESS, ledger entry FOUND",
            Scenario::CircuitBreaker => "Gateway timeout: bank state unknown",
            Scenario::Pending => "Still processing: bank and ledger PENDING",
            Scenario::Conflicting => "Data conflict: bank SUCCESS, no ledger entry",
        }
    }

    pub fn expected_decision(&self) -> FinalDecision {
        match self {
            Scenario::HappyPath => FinalDecision::Relief,
            Scenario::Adversarial => FinalDecision::Deny,
            Scenario::CircuitBreaker | Scenario::Pending | Scenario::Conflicting => {
                FinalDecision::Escalate
            }
        }
    }

    /// Build the fixture signal, stamped with the current time
    pub fn signal(&self) -> TransactionSignal {
        match self {
            Scenario::HappyPath => TransactionSignal::new(
                "TXN-HAPPY-001",
                "I was charged $99.99 but got an error message and never received my order \
                 confirmation. Please help!",
                BankStatus::Failed,
                LedgerStatus::NotFound,
                99.99,
            ),
            Scenario::Adversarial => TransactionSignal::new(
                "TXN-FRAUD-002",
                "The payment failed! I didn't receive anything! Give me my money back NOW!",
                BankStatus::Success,
                LedgerStatus::Found,
                499.99,
            ),
            Scenario::CircuitBreaker => TransactionSignal::new(
                "TXN-AMBIGUOUS-003",
                "I tried to buy a laptop for $1,299. The page showed 'loading' forever and then \
                 'Something went wrong'. Was I charged or not?",
                BankStatus::Timeout,
                LedgerStatus::NotFound,
                1299.99,
            ),
            Scenario::Pending => TransactionSignal::new(
                "TXN-PENDING-004",
                "It's been 5 minutes and my payment is still processing. Should I try again?",
                BankStatus::Pending,
                LedgerStatus::Pending,
                75.00,
            ),
            Scenario::Conflicting => TransactionSignal::new(
                "TXN-CONFLICT-005",
                "I got a 'payment successful' email but the order isn't in my account.",
                BankStatus::Success,
                LedgerStatus::NotFound,
                199.99,
            ),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scenario {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == normalized)
            .ok_or_else(|| DomainError::UnknownScenario(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::orchestrator::deliberate;
    use crate::debate::stance::RoleStance;
    use crate::signal::DataConsistency;
    use crate::verdict::policy::CircuitBreakerThresholds;

    fn run(scenario: Scenario) -> crate::debate::orchestrator::DeliberationOutcome {
        deliberate(scenario.signal(), CircuitBreakerThresholds::default())
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("happy_path".parse::<Scenario>(), Ok(Scenario::HappyPath));
        assert_eq!("Circuit-Breaker".parse::<Scenario>(), Ok(Scenario::CircuitBreaker));
        assert_eq!(
            "nope".parse::<Scenario>(),
            Err(DomainError::UnknownScenario("nope".to_string()))
        );
    }

    #[test]
    fn test_every_scenario_reaches_expected_decision() {
        for scenario in Scenario::ALL {
            let outcome = run(scenario);
            assert_eq!(
                outcome.verdict.decision,
                scenario.expected_decision(),
                "scenario {scenario}"
            );
            assert!(outcome.verdict.is_well_formed(), "scenario {scenario}");
            assert_eq!(outcome.verdict.transaction_id, scenario.signal().transaction_id);
        }
    }

    #[test]
    fn test_happy_path_votes() {
        let outcome = run(Scenario::HappyPath);
        assert_eq!(outcome.facts.data_consistency(), DataConsistency::Consistent);
        let votes = outcome.log.votes();
        assert_eq!(votes[0].vote, RoleStance::Relief);
        assert_eq!(votes[0].confidence, 90.0);
        assert_eq!(votes[1].vote, RoleStance::Relief);
        assert_eq!(votes[1].confidence, 70.0);
        assert_eq!(outcome.verdict.confidence, 80.0);
    }

    #[test]
    fn test_adversarial_is_denied_by_both() {
        let outcome = run(Scenario::Adversarial);
        let votes = outcome.log.votes();
        assert!(votes.iter().all(|v| v.vote == RoleStance::Deny));
        assert!(votes.iter().all(|v| !v.veto_triggered));
        assert_eq!(outcome.verdict.confidence, 77.5);
    }

    #[test]
    fn test_timeout_reason_mentions_indeterminate_state() {
        let outcome = run(Scenario::CircuitBreaker);
        assert_eq!(outcome.facts.data_consistency(), DataConsistency::Indeterminate);

        let reason = outcome.verdict.escalation_reason.unwrap();
        assert!(reason.contains("INDETERMINATE STATE"));
        assert!(reason.contains("VETO TRIGGERED"));

        let votes = outcome.log.votes();
        assert!(votes[1].is_blocking_veto());
        assert_eq!(votes[1].confidence, 95.0);
    }

    #[test]
    fn test_conflicting_splits_the_vote() {
        let outcome = run(Scenario::Conflicting);
        let votes = outcome.log.votes();
        assert_eq!(votes[0].vote, RoleStance::Relief);
        assert_eq!(votes[1].vote, RoleStance::Uncertain);
        assert!(
            outcome
                .verdict
                .escalation_reason
                .unwrap()
                .starts_with("WEAK AGREEMENT")
        );
    }

    #[test]
    fn test_timeout_and_pending_supremacy() {
        // Every ledger state and a spread of amounts
        for bank in [BankStatus::Timeout, BankStatus::Pending] {
            for ledger in [LedgerStatus::Found, LedgerStatus::NotFound, LedgerStatus::Pending] {
                for amount in [0.01, 75.0, 1_000_000.0] {
                    let signal = TransactionSignal::new("TXN-S", "claim", bank, ledger, amount);
                    let outcome = deliberate(signal, CircuitBreakerThresholds::default());
                    assert_eq!(
                        outcome.verdict.decision,
                        FinalDecision::Escalate,
                        "bank={bank} ledger={ledger} amount={amount}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_totality_and_circuit_breaker_equivalence() {
        let banks = [
            BankStatus::Success,
            BankStatus::Failed,
            BankStatus::Timeout,
            BankStatus::Pending,
        ];
        let ledgers = [LedgerStatus::Found, LedgerStatus::NotFound, LedgerStatus::Pending];
        let threshold_sets = [
            CircuitBreakerThresholds::default(),
            CircuitBreakerThresholds {
                min_confidence: 0.0,
                consensus: 0.0,
                veto_confidence: 100.0,
            },
        ];

        for thresholds in threshold_sets {
            for bank in banks {
                for ledger in ledgers {
                    let signal = TransactionSignal::new("TXN-T", "claim", bank, ledger, 10.0);
                    let verdict = deliberate(signal, thresholds).verdict;
                    assert_eq!(
                        verdict.decision == FinalDecision::Escalate,
                        verdict.circuit_breaker_triggered,
                        "bank={bank} ledger={ledger}"
                    );
                    assert!(verdict.is_well_formed());
                    assert!((0.0..=100.0).contains(&verdict.confidence));
                }
            }
        }
    }

    #[test]
    fn test_consistent_agreement_is_honored() {
        for scenario in [Scenario::HappyPath, Scenario::Adversarial] {
            let outcome = run(scenario);
            let votes = outcome.log.votes();
            assert_eq!(votes[0].vote, votes[1].vote);
            assert_eq!(
                outcome.verdict.decision,
                FinalDecision::from_stance(votes[0].vote)
            );
        }
    }
}
