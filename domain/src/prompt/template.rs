//! Prompt templates for the enrichment service

use crate::debate::argument::{AgentArgument, Round};
use crate::debate::role::Role;
use crate::signal::FactSheet;

/// Templates for the persona and per-round enrichment prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the User Advocate persona
    pub fn advocate_system() -> &'static str {
        r#"You are the User Advocate in a payment dispute tribunal.
You argue for the claimant and want refunds approved when they are justified.
You lean toward trusting the claimant, but arguing against clear evidence destroys your credibility.
If the facts are INDETERMINATE you must acknowledge the uncertainty.
Challenge the Risk Officer when they are overly cautious; concede when their evidence is strong."#
    }

    /// System prompt for the Risk Officer persona
    pub fn risk_officer_system() -> &'static str {
        r#"You are the Risk Officer in a payment dispute tribunal.
Your goal is zero financial loss. You would rather delay a valid refund than grant an invalid one.
A 504 GATEWAY TIMEOUT means the bank's state is UNKNOWN: refunding now risks paying twice
if the original charge settles later. A timeout is never a failure.
Find the holes in the Advocate's logic and ask what happens if the bank settles in ten minutes."#
    }

    pub fn system_for(role: Role) -> &'static str {
        match role {
            Role::Advocate => Self::advocate_system(),
            Role::RiskOfficer => Self::risk_officer_system(),
        }
    }

    /// User prompt asking `role` to restate its `draft` argument for `round`.
    ///
    /// The position is fixed by the tribunal rules; the service may only
    /// improve the reasoning and cite further evidence.
    pub fn argument_prompt(
        role: Role,
        round: Round,
        facts: &FactSheet,
        draft: &AgentArgument,
        opponent: Option<&AgentArgument>,
    ) -> String {
        let mut prompt = format!(
            r#"{} - {}

FactSheet:
- Transaction ID: {}
- Bank Response: {}
- Ledger Entry Exists: {}
- Ledger State: {}
- Data Consistency: {}
- Claim: {}
"#,
            round.to_string().to_uppercase(),
            role.name(),
            facts.transaction_id(),
            facts.bank_response_summary(),
            facts.ledger_entry_exists(),
            facts.ledger_state(),
            facts.data_consistency(),
            facts.signal().user_claim,
        );

        if let Some(opponent) = opponent {
            prompt.push_str(&format!(
                r#"
The {} has argued:
- Position: {}
- Confidence: {}%
- Reasoning: {}
- Evidence: {}
"#,
                opponent.role_name,
                opponent.position,
                opponent.confidence,
                opponent.reasoning,
                opponent.evidence.join("; "),
            ));
        }

        prompt.push_str(&format!(
            r#"
Your position is {} at {}% confidence. Do not change it.
Current reasoning: {}

Improve the reasoning and cite the evidence that supports this position.
Respond with JSON only, using the keys: position, reasoning, evidence (list of strings), confidence (0-100)."#,
            draft.position, draft.confidence, draft.reasoning,
        ));

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::stance::RoleStance;
    use crate::signal::{BankStatus, LedgerStatus, TransactionSignal, analyze};

    #[test]
    fn test_argument_prompt_contains_facts_and_opponent() {
        let facts = analyze(TransactionSignal::new(
            "TXN-P",
            "I was charged but the order failed",
            BankStatus::Timeout,
            LedgerStatus::NotFound,
            1299.99,
        ));
        let draft = AgentArgument::new("User Advocate", RoleStance::Uncertain, 50.0, "Draft");
        let opponent = AgentArgument::new("Risk Officer", RoleStance::Deny, 95.0, "Timeout rule")
            .with_evidence(["Bank API: 504"]);

        let prompt = PromptTemplate::argument_prompt(
            Role::Advocate,
            Round::Rebuttal,
            &facts,
            &draft,
            Some(&opponent),
        );

        assert!(prompt.starts_with("ROUND 2: CHALLENGE & REBUTTAL - User Advocate"));
        assert!(prompt.contains("TXN-P"));
        assert!(prompt.contains("INDETERMINATE"));
        assert!(prompt.contains("The Risk Officer has argued"));
        assert!(prompt.contains("Your position is UNCERTAIN at 50% confidence"));
        assert!(prompt.contains("position, reasoning, evidence"));
    }

    #[test]
    fn test_opening_prompt_has_no_opponent_section() {
        let facts = analyze(TransactionSignal::new(
            "TXN-P",
            "claim",
            BankStatus::Failed,
            LedgerStatus::NotFound,
            10.0,
        ));
        let draft = AgentArgument::new("Risk Officer", RoleStance::Relief, 80.0, "Safe");
        let prompt =
            PromptTemplate::argument_prompt(Role::RiskOfficer, Round::Opening, &facts, &draft, None);
        assert!(!prompt.contains("has argued"));
        assert!(PromptTemplate::system_for(Role::RiskOfficer).contains("504"));
    }
}
