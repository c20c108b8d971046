//! Debate orchestrator: the fixed three-round state machine.
//!
//! ```text
//! open() ─▶ Round 1 ─▶ Round 2 ─▶ Round 3 ─▶ Judgment ─▶ conclude()
//!              │          │
//!              └──────────┴── a role produced nothing ─▶ Judgment
//! ```
//!
//! The orchestrator is step-driven so callers can do work between
//! [`Deliberation::propose`] and [`Deliberation::record`] (the application
//! layer enriches arguments there). [`deliberate`] runs every step
//! synchronously.

use super::argument::{Contribution, Round};
use super::log::{DebateLog, Transcript};
use super::role::Role;
use crate::signal::{FactSheet, SIGNAL_ANALYST, TransactionSignal, analyze};
use crate::verdict::entities::Verdict;
use crate::verdict::judge::{JUDGE, render_log, verdict_line};
use crate::verdict::policy::CircuitBreakerThresholds;
use serde::Serialize;

/// Where a deliberation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Debating(Round),
    Judgment,
}

/// Everything one deliberation produced
#[derive(Debug, Clone, Serialize)]
pub struct DeliberationOutcome {
    pub facts: FactSheet,
    pub log: DebateLog,
    pub transcript: Transcript,
    pub verdict: Verdict,
}

/// State of a single in-flight deliberation. Never shared between requests.
#[derive(Debug, Clone)]
pub struct Deliberation {
    facts: FactSheet,
    thresholds: CircuitBreakerThresholds,
    log: DebateLog,
    transcript: Transcript,
    stage: Stage,
}

impl Deliberation {
    /// Run the Signal Analyst and stand at round 1
    pub fn open(signal: TransactionSignal, thresholds: CircuitBreakerThresholds) -> Self {
        let facts = analyze(signal);
        let transcript = Transcript::new().append(
            SIGNAL_ANALYST,
            format!(
                "FactSheet created: Consistency={}, Ledger Entry={}",
                facts.data_consistency(),
                facts.ledger_entry_exists()
            ),
        );

        Self {
            facts,
            thresholds,
            log: DebateLog::new(),
            transcript,
            stage: Stage::Debating(Round::Opening),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn facts(&self) -> &FactSheet {
        &self.facts
    }

    pub fn log(&self) -> &DebateLog {
        &self.log
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn thresholds(&self) -> &CircuitBreakerThresholds {
        &self.thresholds
    }

    /// Current round, if still debating
    pub fn current_round(&self) -> Option<Round> {
        match self.stage {
            Stage::Debating(round) => Some(round),
            Stage::Judgment => None,
        }
    }

    fn has_spoken(&self, role: Role, round: Round) -> bool {
        self.log.round(round).any(|c| c.role_name() == role.name())
    }

    /// Deterministic contribution for `role` in the current round.
    ///
    /// `None` once debating is over, if the role already spoke this round,
    /// or if the role cannot produce one from the log.
    pub fn propose(&self, role: Role) -> Option<Contribution> {
        let round = self.current_round()?;
        if self.has_spoken(role, round) {
            return None;
        }
        role.propose(round, &self.facts, &self.log, &self.thresholds)
    }

    /// Append `role`'s contribution to the current round.
    ///
    /// Ignored outside a debating stage or when the role already spoke.
    pub fn record(&mut self, role: Role, contribution: Contribution) {
        let Some(round) = self.current_round() else {
            return;
        };
        if self.has_spoken(role, round) {
            return;
        }
        debug_assert_eq!(contribution.role_name(), role.name());
        debug_assert_eq!(
            matches!(contribution, Contribution::Vote(_)),
            round == Round::FinalVote,
            "votes belong to the final round only"
        );

        let line = role.transcript_line(round, &contribution, &self.log);
        self.transcript = std::mem::take(&mut self.transcript).append(role.name(), line);
        self.log = std::mem::take(&mut self.log).append(round, contribution);
    }

    /// Move past the current round.
    ///
    /// A round missing either role's record goes straight to judgment.
    pub fn advance(&mut self) {
        let Some(round) = self.current_round() else {
            return;
        };

        let complete = self.log.count(round) >= Role::ALL.len();
        self.stage = match round.next() {
            Some(next) if complete => Stage::Debating(next),
            _ => Stage::Judgment,
        };
    }

    /// Let the Judge rule on whatever was recorded.
    ///
    /// Callable at any stage; an abandoned debate escalates as incomplete.
    pub fn conclude(self) -> DeliberationOutcome {
        let verdict = render_log(&self.facts, &self.log, &self.thresholds);
        let transcript = self.transcript.append(JUDGE, verdict_line(&verdict));

        DeliberationOutcome {
            facts: self.facts,
            log: self.log,
            transcript,
            verdict,
        }
    }
}

/// Run a whole deliberation with deterministic role output
pub fn deliberate(
    signal: TransactionSignal,
    thresholds: CircuitBreakerThresholds,
) -> DeliberationOutcome {
    let mut deliberation = Deliberation::open(signal, thresholds);

    while deliberation.current_round().is_some() {
        for role in Role::ALL {
            if let Some(contribution) = deliberation.propose(role) {
                deliberation.record(role, contribution);
            }
        }
        deliberation.advance();
    }

    deliberation.conclude()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::argument::{AgentArgument, AgentVote};
    use crate::debate::stance::{FinalDecision, RoleStance};
    use crate::signal::{BankStatus, LedgerStatus};

    fn signal(bank: BankStatus, ledger: LedgerStatus) -> TransactionSignal {
        TransactionSignal::new("TXN-O", "claim", bank, ledger, 99.99)
    }

    #[test]
    fn test_full_run_records_six_contributions() {
        let outcome = deliberate(
            signal(BankStatus::Failed, LedgerStatus::NotFound),
            CircuitBreakerThresholds::default(),
        );

        assert_eq!(outcome.log.len(), 6);
        for round in Round::ALL {
            assert_eq!(outcome.log.count(round), 2);
        }
        // Analyst, 2 x 3 role lines, judge
        assert_eq!(outcome.transcript.len(), 8);
        assert_eq!(outcome.transcript.entries()[0].role, SIGNAL_ANALYST);
        assert_eq!(outcome.transcript.entries()[7].role, JUDGE);
        assert_eq!(outcome.verdict.decision, FinalDecision::Relief);
    }

    #[test]
    fn test_stages_progress_in_order() {
        let mut d = Deliberation::open(
            signal(BankStatus::Success, LedgerStatus::Found),
            CircuitBreakerThresholds::default(),
        );

        for round in Round::ALL {
            assert_eq!(d.stage(), Stage::Debating(round));
            for role in Role::ALL {
                let c = d.propose(role).unwrap();
                d.record(role, c);
            }
            d.advance();
        }
        assert_eq!(d.stage(), Stage::Judgment);
        assert!(d.propose(Role::Advocate).is_none());
    }

    #[test]
    fn test_role_speaks_once_per_round() {
        let mut d = Deliberation::open(
            signal(BankStatus::Success, LedgerStatus::Found),
            CircuitBreakerThresholds::default(),
        );
        let c = d.propose(Role::Advocate).unwrap();
        d.record(Role::Advocate, c.clone());
        assert!(d.propose(Role::Advocate).is_none());

        d.record(Role::Advocate, c);
        assert_eq!(d.log().len(), 1);
    }

    #[test]
    fn test_missing_role_goes_straight_to_judgment() {
        let mut d = Deliberation::open(
            signal(BankStatus::Failed, LedgerStatus::NotFound),
            CircuitBreakerThresholds::default(),
        );
        let c = d.propose(Role::Advocate).unwrap();
        d.record(Role::Advocate, c);
        d.advance();

        assert_eq!(d.stage(), Stage::Judgment);
        let outcome = d.conclude();
        assert_eq!(outcome.verdict.decision, FinalDecision::Escalate);
        assert_eq!(outcome.verdict.confidence, 0.0);
        assert!(
            outcome
                .verdict
                .escalation_reason
                .unwrap()
                .contains("INCOMPLETE DELIBERATION")
        );
    }

    #[test]
    fn test_abandoned_deliberation_concludes_as_escalation() {
        let d = Deliberation::open(
            signal(BankStatus::Failed, LedgerStatus::NotFound),
            CircuitBreakerThresholds::default(),
        );
        let outcome = d.conclude();
        assert!(outcome.verdict.is_escalated());
        assert!(outcome.log.is_empty());
    }

    #[test]
    fn test_recorded_contributions_are_used_downstream() {
        let mut d = Deliberation::open(
            signal(BankStatus::Success, LedgerStatus::NotFound),
            CircuitBreakerThresholds::default(),
        );
        // Round 1 with an externally supplied advocate argument
        d.record(
            Role::Advocate,
            Contribution::Argument(AgentArgument::new(
                "User Advocate",
                RoleStance::Relief,
                75.0,
                "Supplied",
            )),
        );
        let risk = d.propose(Role::RiskOfficer).unwrap();
        d.record(Role::RiskOfficer, risk);
        d.advance();

        let rebuttal = d.propose(Role::RiskOfficer).unwrap();
        assert_eq!(rebuttal.stance(), RoleStance::Deny);
        assert_eq!(rebuttal.confidence(), 85.0);
    }

    #[test]
    fn test_record_after_judgment_is_ignored() {
        let mut d = Deliberation::open(
            signal(BankStatus::Failed, LedgerStatus::NotFound),
            CircuitBreakerThresholds::default(),
        );
        d.advance();
        assert_eq!(d.stage(), Stage::Judgment);
        d.record(
            Role::Advocate,
            Contribution::Vote(AgentVote::new("User Advocate", RoleStance::Relief, 90.0, "late")),
        );
        assert!(d.log().is_empty());
    }
}
