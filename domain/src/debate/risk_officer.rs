//! Risk Officer: the skeptical role, and the only one with veto authority.
//!
//! The timeout rule is absolute. A 504 means the bank's true state is
//! unknown; refunding now risks paying twice if the original charge later
//! settles.

use super::argument::{AgentArgument, AgentVote};
use super::stance::RoleStance;
use crate::core::string::excerpt;
use crate::signal::{BankStatus, DataConsistency, FactSheet};
use crate::verdict::policy::CircuitBreakerThresholds;

/// Display name used in arguments, votes and transcripts
pub const RISK_OFFICER: &str = "Risk Officer";

/// Round 1: opening position, first matching rule wins
pub fn opening(facts: &FactSheet) -> AgentArgument {
    let bank_status = facts.bank_status();

    if bank_status == BankStatus::Timeout {
        return AgentArgument::new(
            RISK_OFFICER,
            RoleStance::Deny,
            95.0,
            "CRITICAL: Bank returned 504 GATEWAY TIMEOUT. The transaction may have succeeded \
             or failed. If we refund now and the original charge settles later, we pay twice. \
             Invoking the timeout rule: no refund until the bank state is confirmed.",
        )
        .with_evidence([
            "Bank API: 504 GATEWAY TIMEOUT",
            "504 = unknown state, not failed state",
            "Risk: double payment if the original settles",
        ]);
    }

    if bank_status == BankStatus::Pending {
        return AgentArgument::new(
            RISK_OFFICER,
            RoleStance::Deny,
            90.0,
            "Transaction is still PENDING. Refunding it guarantees a double payment if it \
             completes.",
        )
        .with_evidence(["Bank API: PENDING", "Pending != Failed", "Must wait for final state"]);
    }

    let consistent = facts.is_consistent();

    if consistent && !facts.ledger_entry_exists() && bank_status == BankStatus::Failed {
        return AgentArgument::new(
            RISK_OFFICER,
            RoleStance::Relief,
            80.0,
            "Bank confirms failure, ledger confirms no entry. Safe to refund.",
        )
        .with_evidence(["Bank API: FAILED", "Ledger: No entry", "Data Consistency: CONSISTENT"]);
    }

    if consistent && facts.ledger_entry_exists() && bank_status == BankStatus::Success {
        return AgentArgument::new(
            RISK_OFFICER,
            RoleStance::Deny,
            90.0,
            "Transaction confirmed successful. The claim is invalid or fraudulent.",
        )
        .with_evidence([
            "Bank API: SUCCESS",
            "Ledger: Entry FOUND",
            "Claim contradicts all data sources",
        ]);
    }

    if facts.data_consistency() == DataConsistency::Conflicting {
        return AgentArgument::new(
            RISK_OFFICER,
            RoleStance::Uncertain,
            60.0,
            "Data sources conflict. This could be a system error or fraud. Needs investigation.",
        )
        .with_evidence([
            format!("Bank says: {}", facts.bank_response_summary()),
            format!("Ledger says: {}", facts.ledger_state()),
            "Conflicting data is a fraud indicator".to_string(),
        ]);
    }

    AgentArgument::new(
        RISK_OFFICER,
        RoleStance::Uncertain,
        40.0,
        "Insufficient data to make a safe determination.",
    )
    .with_evidence(["Need more information"])
}

/// Round 2: challenge the Advocate's opening.
///
/// The timeout challenge is checked before the general inconsistency
/// challenge, since a timeout is always inconsistent data.
pub fn rebuttal(facts: &FactSheet, own: &AgentArgument, advocate: &AgentArgument) -> AgentArgument {
    let pushes_relief = advocate.position == RoleStance::Relief;

    if pushes_relief && facts.bank_status() == BankStatus::Timeout {
        return AgentArgument::new(
            RISK_OFFICER,
            RoleStance::Deny,
            95.0,
            "THE TIMEOUT RULE APPLIES. Refunding during a 504 is exactly the double-payment \
             fraud pattern: the claimant reports a failure, we refund, the original charge \
             settles, and the claimant keeps both the goods and the money.",
        )
        .with_evidence([
            "504 TIMEOUT = unknown state",
            "Veto power invoked",
            "Double-payment fraud pattern match",
        ]);
    }

    if pushes_relief && !facts.is_consistent() {
        return AgentArgument::new(
            RISK_OFFICER,
            RoleStance::Deny,
            85.0,
            format!(
                "CHALLENGE: The Advocate claims '{}'. Data consistency is {}, not CONSISTENT, \
                 so a confidence of {}% is not justified by the facts. What if the bank \
                 settles in ten minutes?",
                excerpt(&advocate.reasoning, 100),
                facts.data_consistency(),
                advocate.confidence
            ),
        )
        .with_evidence([
            format!(
                "Advocate confidence ({}%) exceeds data certainty",
                advocate.confidence
            ),
            "Double-payment risk is real and quantifiable".to_string(),
            "Better to delay than to lose money".to_string(),
        ]);
    }

    let position = if facts.is_consistent() {
        own.position
    } else {
        RoleStance::Uncertain
    };

    AgentArgument::new(
        RISK_OFFICER,
        position,
        70.0,
        format!(
            "The Advocate's position of {} at {}% is noted. My risk assessment remains.",
            advocate.position, advocate.confidence
        ),
    )
    .with_evidence([format!("Advocate confidence: {}%", advocate.confidence)])
}

/// Round 3: final vote with veto evaluation
pub fn final_vote(
    facts: &FactSheet,
    own: &AgentArgument,
    advocate: &AgentArgument,
    thresholds: &CircuitBreakerThresholds,
) -> AgentVote {
    match facts.bank_status() {
        BankStatus::Timeout => {
            return AgentVote::veto(
                RISK_OFFICER,
                95.0,
                "VETO TRIGGERED: 504 GATEWAY TIMEOUT. No action can be approved until the bank \
                 confirms the state.",
            );
        }
        BankStatus::Pending => {
            return AgentVote::veto(
                RISK_OFFICER,
                90.0,
                "VETO TRIGGERED: Transaction still PENDING. Action blocked until completion.",
            );
        }
        BankStatus::Success | BankStatus::Failed => {}
    }

    if own.confidence > thresholds.veto_confidence
        && own.position == RoleStance::Deny
        && advocate.position == RoleStance::Relief
    {
        return AgentVote::veto(
            RISK_OFFICER,
            own.confidence,
            format!(
                "VETO TRIGGERED: Risk confidence {}% exceeds threshold. Advocate wants RELIEF \
                 but the risk is too high.",
                own.confidence
            ),
        );
    }

    AgentVote::carried_from(own)
}
