//! The two debating roles and round dispatch.

use super::argument::{AgentArgument, Contribution, Round};
use super::log::DebateLog;
use super::{advocate, risk_officer};
use crate::signal::FactSheet;
use crate::verdict::policy::CircuitBreakerThresholds;
use serde::{Deserialize, Serialize};

/// A debating role. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Advocate,
    RiskOfficer,
}

impl Role {
    /// Speaking order within every round
    pub const ALL: [Role; 2] = [Role::Advocate, Role::RiskOfficer];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Advocate => advocate::ADVOCATE,
            Role::RiskOfficer => risk_officer::RISK_OFFICER,
        }
    }

    pub fn opponent(&self) -> Role {
        match self {
            Role::Advocate => Role::RiskOfficer,
            Role::RiskOfficer => Role::Advocate,
        }
    }

    /// Only the Risk Officer may veto
    pub fn has_veto_authority(&self) -> bool {
        matches!(self, Role::RiskOfficer)
    }

    /// Compute this role's contribution for `round`.
    ///
    /// Returns `None` when a prior-round argument the rule depends on is
    /// missing from the log.
    pub fn propose(
        &self,
        round: Round,
        facts: &FactSheet,
        log: &DebateLog,
        thresholds: &CircuitBreakerThresholds,
    ) -> Option<Contribution> {
        let contribution = match (self, round) {
            (Role::Advocate, Round::Opening) => Contribution::Argument(advocate::opening(facts)),
            (Role::RiskOfficer, Round::Opening) => {
                Contribution::Argument(risk_officer::opening(facts))
            }
            (Role::Advocate, Round::Rebuttal) => {
                let opponent = prior(log, Round::Opening, Role::RiskOfficer)?;
                Contribution::Argument(advocate::rebuttal(facts, opponent))
            }
            (Role::RiskOfficer, Round::Rebuttal) => {
                let own = prior(log, Round::Opening, Role::RiskOfficer)?;
                let opponent = prior(log, Round::Opening, Role::Advocate)?;
                Contribution::Argument(risk_officer::rebuttal(facts, own, opponent))
            }
            (Role::Advocate, Round::FinalVote) => {
                let own = prior(log, Round::Rebuttal, Role::Advocate)?;
                let opponent = prior(log, Round::Rebuttal, Role::RiskOfficer)?;
                Contribution::Vote(advocate::final_vote(facts, own, opponent))
            }
            (Role::RiskOfficer, Round::FinalVote) => {
                let own = prior(log, Round::Rebuttal, Role::RiskOfficer)?;
                let opponent = prior(log, Round::Rebuttal, Role::Advocate)?;
                Contribution::Vote(risk_officer::final_vote(facts, own, opponent, thresholds))
            }
        };

        Some(contribution)
    }

    /// One-line transcript message for a recorded contribution
    pub fn transcript_line(&self, round: Round, contribution: &Contribution, log: &DebateLog) -> String {
        match contribution {
            Contribution::Argument(arg) if round == Round::Opening => format!(
                "Round 1: Position={}, Confidence={}%",
                arg.position, arg.confidence
            ),
            Contribution::Argument(arg) => {
                let challenged = log
                    .argument_of(Round::Opening, self.opponent().name())
                    .map(|a| a.position.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                format!(
                    "Round {} Rebuttal: Challenging {}'s {} stance (now {} at {}%)",
                    round.number(),
                    self.opponent().name(),
                    challenged,
                    arg.position,
                    arg.confidence
                )
            }
            Contribution::Vote(vote) if self.has_veto_authority() => format!(
                "Final Vote: {} at {}% confidence. VETO={}",
                vote.vote, vote.confidence, vote.veto_triggered
            ),
            Contribution::Vote(vote) => {
                format!("Final Vote: {} at {}% confidence", vote.vote, vote.confidence)
            }
        }
    }
}

fn prior(log: &DebateLog, round: Round, role: Role) -> Option<&AgentArgument> {
    log.argument_of(round, role.name())
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
