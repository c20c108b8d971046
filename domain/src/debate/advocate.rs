//! User Advocate: the pro-claimant role.
//!
//! Leans toward the claimant but never argues against unanimous evidence.
//! Has no veto authority.

use super::argument::{AgentArgument, AgentVote};
use super::stance::RoleStance;
use crate::core::string::excerpt;
use crate::signal::{DataConsistency, FactSheet};

/// Display name used in arguments, votes and transcripts
pub const ADVOCATE: &str = "User Advocate";

/// Round 1: opening position from the facts alone
pub fn opening(facts: &FactSheet) -> AgentArgument {
    let bank = format!("Bank API: {}", facts.bank_response_summary());
    let ledger_state = format!("Ledger State: {}", facts.ledger_state());

    match facts.data_consistency() {
        DataConsistency::Consistent if !facts.ledger_entry_exists() => AgentArgument::new(
            ADVOCATE,
            RoleStance::Relief,
            85.0,
            "The data clearly shows the transaction failed. The bank confirmed the failure and \
             the ledger has no entry. The claimant should be refunded now.",
        )
        .with_evidence([bank, "Ledger: No entry found".into(), "Data Consistency: CONSISTENT".into()]),
        DataConsistency::Consistent => AgentArgument::new(
            ADVOCATE,
            RoleStance::Deny,
            80.0,
            "The bank confirmed success and the ledger has the entry. I cannot argue for a \
             refund that contradicts every data source.",
        )
        .with_evidence([
            bank,
            "Ledger: Entry FOUND".into(),
            "Data Consistency: CONSISTENT - claim contradicts evidence".into(),
        ]),
        DataConsistency::Indeterminate => AgentArgument::new(
            ADVOCATE,
            RoleStance::Uncertain,
            55.0,
            "The data is inconclusive, but the claimant is clearly experiencing a problem. \
             I lean toward helping them while acknowledging the uncertainty.",
        )
        .with_evidence([bank, ledger_state, "Claim appears genuine".into()]),
        DataConsistency::Conflicting => AgentArgument::new(
            ADVOCATE,
            RoleStance::Uncertain,
            45.0,
            "Bank and ledger disagree. A system error should not punish the claimant, but \
             this needs investigation.",
        )
        .with_evidence([
            bank,
            ledger_state,
            "Conflicting signals may indicate a system error".into(),
        ]),
    }
}

/// Round 2: rebuttal of the Risk Officer's opening
pub fn rebuttal(facts: &FactSheet, opponent: &AgentArgument) -> AgentArgument {
    let argument = if facts.is_clear_success() {
        AgentArgument::new(
            ADVOCATE,
            RoleStance::Deny,
            85.0,
            "I concede. The bank confirms SUCCESS and the ledger shows the entry. The claim \
             is not supported by any data source.",
        )
        .with_evidence([
            "Bank: SUCCESS confirmed",
            "Ledger: Entry FOUND",
            "Advocate concedes: evidence is against the claim",
        ])
    } else {
        match opponent.position {
            RoleStance::Deny => {
                let evidence = [
                    format!("Risk Officer confidence: {}%", opponent.confidence),
                    "Counter: customer trust outweighs caution in ambiguous cases".to_string(),
                ];
                if facts.is_clear_failure() {
                    AgentArgument::new(
                        ADVOCATE,
                        RoleStance::Relief,
                        (opponent.confidence + 10.0).min(90.0),
                        format!(
                            "The Risk Officer is being overly cautious. Their argument \
                             ('{}') ignores the claimant's experience. A delayed refund \
                             damages trust.",
                            excerpt(&opponent.reasoning, 100)
                        ),
                    )
                    .with_evidence(evidence)
                } else {
                    AgentArgument::new(
                        ADVOCATE,
                        RoleStance::Uncertain,
                        50.0,
                        "The Risk Officer has valid concerns. The data is ambiguous.",
                    )
                    .with_evidence(evidence)
                }
            }
            RoleStance::Uncertain => {
                let position = if facts.ledger_entry_exists() {
                    RoleStance::Uncertain
                } else {
                    RoleStance::Relief
                };
                AgentArgument::new(
                    ADVOCATE,
                    position,
                    60.0,
                    "Even the Risk Officer admits uncertainty. In such cases we should err on \
                     the side of the claimant.",
                )
                .with_evidence([format!(
                    "Risk Officer is uncertain at {}%",
                    opponent.confidence
                )])
            }
            RoleStance::Relief => AgentArgument::new(
                ADVOCATE,
                RoleStance::Relief,
                90.0,
                "The Risk Officer agrees with the refund. We have consensus.",
            )
            .with_evidence(["Consensus with Risk Officer"]),
        }
    };

    if facts.is_indeterminate() {
        return AgentArgument {
            position: RoleStance::Uncertain,
            confidence: argument.confidence.min(55.0),
            reasoning: format!(
                "I acknowledge the Risk Officer's concern: {}. Still, leaving the claimant \
                 waiting on a system timeout is poor service. Provisional credit should be \
                 considered.",
                facts.bank_response_summary()
            ),
            ..argument
        };
    }

    argument
}

/// Round 3: final vote. Never vetoes.
pub fn final_vote(facts: &FactSheet, own: &AgentArgument, opponent: &AgentArgument) -> AgentVote {
    if facts.is_indeterminate() {
        return AgentVote::new(
            ADVOCATE,
            RoleStance::Uncertain,
            own.confidence.min(50.0),
            "The data is truly indeterminate. Human review is needed, with expedited handling \
             for the claimant.",
        );
    }

    if opponent.confidence > 85.0 && opponent.position == RoleStance::Deny {
        return AgentVote::new(
            ADVOCATE,
            RoleStance::Uncertain,
            40.0,
            "The Risk Officer presents compelling evidence. I cannot push for a refund \
             without more data.",
        );
    }

    AgentVote::carried_from(own)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{BankStatus, LedgerStatus, TransactionSignal, analyze};

    fn facts(bank: BankStatus, ledger: LedgerStatus) -> FactSheet {
        analyze(TransactionSignal::new("TXN-A", "claim", bank, ledger, 50.0))
    }

    fn opponent(position: RoleStance, confidence: f64) -> AgentArgument {
        AgentArgument::new("Risk Officer", position, confidence, "Opponent reasoning")
    }

    #[test]
    fn test_opening_table() {
        use BankStatus::*;
        use LedgerStatus::*;

        let cases = [
            (Failed, NotFound, RoleStance::Relief, 85.0),
            (Success, Found, RoleStance::Deny, 80.0),
            (Timeout, NotFound, RoleStance::Uncertain, 55.0),
            (Success, NotFound, RoleStance::Uncertain, 45.0),
        ];

        for (bank, ledger, position, confidence) in cases {
            let arg = opening(&facts(bank, ledger));
            assert_eq!(arg.position, position, "bank={bank} ledger={ledger}");
            assert_eq!(arg.confidence, confidence, "bank={bank} ledger={ledger}");
            assert_eq!(arg.role_name, ADVOCATE);
            assert!(!arg.evidence.is_empty());
        }
    }

    #[test]
    fn test_rebuttal_concedes_clear_success() {
        let arg = rebuttal(
            &facts(BankStatus::Success, LedgerStatus::Found),
            &opponent(RoleStance::Deny, 90.0),
        );
        assert_eq!(arg.position, RoleStance::Deny);
        assert_eq!(arg.confidence, 85.0);
    }

    #[test]
    fn test_rebuttal_counters_deny_on_clear_failure_capped() {
        let clear_failure = facts(BankStatus::Failed, LedgerStatus::NotFound);

        let arg = rebuttal(&clear_failure, &opponent(RoleStance::Deny, 70.0));
        assert_eq!(arg.position, RoleStance::Relief);
        assert_eq!(arg.confidence, 80.0);

        let arg = rebuttal(&clear_failure, &opponent(RoleStance::Deny, 85.0));
        assert_eq!(arg.confidence, 90.0);
    }

    #[test]
    fn test_rebuttal_against_uncertain_depends_on_ledger() {
        let no_entry = rebuttal(
            &facts(BankStatus::Success, LedgerStatus::NotFound),
            &opponent(RoleStance::Uncertain, 60.0),
        );
        assert_eq!(no_entry.position, RoleStance::Relief);
        assert_eq!(no_entry.confidence, 60.0);

        let entry = rebuttal(
            &facts(BankStatus::Failed, LedgerStatus::Found),
            &opponent(RoleStance::Uncertain, 60.0),
        );
        assert_eq!(entry.position, RoleStance::Uncertain);
    }

    #[test]
    fn test_rebuttal_indeterminate_override() {
        let timeout = facts(BankStatus::Timeout, LedgerStatus::NotFound);
        for position in [RoleStance::Relief, RoleStance::Deny, RoleStance::Uncertain] {
            let arg = rebuttal(&timeout, &opponent(position, 95.0));
            assert_eq!(arg.position, RoleStance::Uncertain);
            assert!(arg.confidence <= 55.0);
            assert!(arg.reasoning.contains("504"));
        }
    }

    #[test]
    fn test_final_vote_rules() {
        let own = AgentArgument::new(ADVOCATE, RoleStance::Relief, 60.0, "Carry me");

        let vote = final_vote(
            &facts(BankStatus::Pending, LedgerStatus::Pending),
            &own,
            &opponent(RoleStance::Uncertain, 70.0),
        );
        assert_eq!(vote.vote, RoleStance::Uncertain);
        assert_eq!(vote.confidence, 50.0);

        let vote = final_vote(
            &facts(BankStatus::Success, LedgerStatus::NotFound),
            &own,
            &opponent(RoleStance::Deny, 86.0),
        );
        assert_eq!(vote.vote, RoleStance::Uncertain);
        assert_eq!(vote.confidence, 40.0);

        // Exactly 85 does not exceed the bar
        let vote = final_vote(
            &facts(BankStatus::Success, LedgerStatus::NotFound),
            &own,
            &opponent(RoleStance::Deny, 85.0),
        );
        assert_eq!(vote.vote, RoleStance::Relief);
        assert_eq!(vote.final_reasoning, "Carry me");
        assert!(!vote.veto_triggered);
    }
}
