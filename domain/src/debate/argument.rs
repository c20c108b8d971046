//! Arguments and votes emitted by the debating roles.

use super::stance::RoleStance;
use serde::{Deserialize, Serialize};

/// The three fixed rounds of the debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    /// Round 1: opening argument
    Opening,
    /// Round 2: challenge and rebuttal
    Rebuttal,
    /// Round 3: final vote
    FinalVote,
}

impl Round {
    pub const ALL: [Round; 3] = [Round::Opening, Round::Rebuttal, Round::FinalVote];

    /// 1-indexed round number
    pub fn number(&self) -> usize {
        match self {
            Round::Opening => 1,
            Round::Rebuttal => 2,
            Round::FinalVote => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Round::Opening => "Opening Statements",
            Round::Rebuttal => "Challenge & Rebuttal",
            Round::FinalVote => "Final Votes",
        }
    }

    pub fn next(&self) -> Option<Round> {
        match self {
            Round::Opening => Some(Round::Rebuttal),
            Round::Rebuttal => Some(Round::FinalVote),
            Round::FinalVote => None,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}: {}", self.number(), self.title())
    }
}

fn debug_assert_confidence(confidence: f64) {
    debug_assert!(
        (0.0..=100.0).contains(&confidence),
        "confidence {confidence} outside 0-100"
    );
}

/// An argument made in round 1 or round 2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentArgument {
    pub role_name: String,
    pub position: RoleStance,
    pub reasoning: String,
    /// Ordered citations supporting the position
    pub evidence: Vec<String>,
    /// 0-100 inclusive
    pub confidence: f64,
}

impl AgentArgument {
    pub fn new(
        role_name: impl Into<String>,
        position: RoleStance,
        confidence: f64,
        reasoning: impl Into<String>,
    ) -> Self {
        debug_assert_confidence(confidence);
        Self {
            role_name: role_name.into(),
            position,
            reasoning: reasoning.into(),
            evidence: Vec::new(),
            confidence,
        }
    }

    pub fn with_evidence<I, S>(mut self, evidence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evidence = evidence.into_iter().map(Into::into).collect();
        self
    }
}

/// A final vote cast in round 3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentVote {
    pub role_name: String,
    pub vote: RoleStance,
    /// 0-100 inclusive
    pub confidence: f64,
    pub final_reasoning: String,
    /// A vetoing DENY forces escalation regardless of the other votes
    pub veto_triggered: bool,
}

impl AgentVote {
    pub fn new(
        role_name: impl Into<String>,
        vote: RoleStance,
        confidence: f64,
        final_reasoning: impl Into<String>,
    ) -> Self {
        debug_assert_confidence(confidence);
        Self {
            role_name: role_name.into(),
            vote,
            confidence,
            final_reasoning: final_reasoning.into(),
            veto_triggered: false,
        }
    }

    /// Create a vetoing vote (always DENY)
    pub fn veto(
        role_name: impl Into<String>,
        confidence: f64,
        final_reasoning: impl Into<String>,
    ) -> Self {
        Self {
            veto_triggered: true,
            ..Self::new(role_name, RoleStance::Deny, confidence, final_reasoning)
        }
    }

    /// Carry a round-2 argument forward unchanged as the final vote
    pub fn carried_from(argument: &AgentArgument) -> Self {
        Self::new(
            argument.role_name.clone(),
            argument.position,
            argument.confidence,
            argument.reasoning.clone(),
        )
    }

    /// Whether this vote blocks automatic action
    pub fn is_blocking_veto(&self) -> bool {
        self.veto_triggered && self.vote == RoleStance::Deny
    }
}

/// What a role contributes in one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Contribution {
    Argument(AgentArgument),
    Vote(AgentVote),
}

impl Contribution {
    pub fn role_name(&self) -> &str {
        match self {
            Contribution::Argument(a) => &a.role_name,
            Contribution::Vote(v) => &v.role_name,
        }
    }

    pub fn stance(&self) -> RoleStance {
        match self {
            Contribution::Argument(a) => a.position,
            Contribution::Vote(v) => v.vote,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Contribution::Argument(a) => a.confidence,
            Contribution::Vote(v) => v.confidence,
        }
    }

    pub fn reasoning(&self) -> &str {
        match self {
            Contribution::Argument(a) => &a.reasoning,
            Contribution::Vote(v) => &v.final_reasoning,
        }
    }

    pub fn as_argument(&self) -> Option<&AgentArgument> {
        match self {
            Contribution::Argument(a) => Some(a),
            Contribution::Vote(_) => None,
        }
    }

    pub fn as_vote(&self) -> Option<&AgentVote> {
        match self {
            Contribution::Vote(v) => Some(v),
            Contribution::Argument(_) => None,
        }
    }
}
