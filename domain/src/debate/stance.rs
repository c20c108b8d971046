//! Stances held by roles and decisions rendered by the Judge.
//!
//! These are deliberately separate types. A role can only say RELIEF, DENY or
//! UNCERTAIN; only the Judge can ESCALATE. [`FinalDecision::from_stance`] is
//! the single place where one is turned into the other.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Position taken by a role in an argument or vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleStance {
    /// Grant the claimant relief (refund)
    Relief,
    /// Deny relief
    Deny,
    /// The role cannot commit either way
    Uncertain,
}

impl RoleStance {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleStance::Relief => "RELIEF",
            RoleStance::Deny => "DENY",
            RoleStance::Uncertain => "UNCERTAIN",
        }
    }
}

impl std::fmt::Display for RoleStance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleStance {
    type Err = DomainError;

    /// `REFUND` and `APPROVE` are accepted as synonyms for RELIEF since
    /// language models tend to use them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RELIEF" | "REFUND" | "APPROVE" => Ok(RoleStance::Relief),
            "DENY" | "REJECT" => Ok(RoleStance::Deny),
            "UNCERTAIN" => Ok(RoleStance::Uncertain),
            _ => Err(DomainError::UnknownStance(s.to_string())),
        }
    }
}

/// Terminal decision of a deliberation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalDecision {
    Relief,
    Deny,
    /// Refuse to decide and hand the case to a human
    Escalate,
}

impl FinalDecision {
    /// Map an agreed role stance onto a decision.
    ///
    /// Total: an agreed UNCERTAIN is still not a decision, so it escalates.
    pub fn from_stance(stance: RoleStance) -> Self {
        match stance {
            RoleStance::Relief => FinalDecision::Relief,
            RoleStance::Deny => FinalDecision::Deny,
            RoleStance::Uncertain => FinalDecision::Escalate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinalDecision::Relief => "RELIEF",
            FinalDecision::Deny => "DENY",
            FinalDecision::Escalate => "ESCALATE",
        }
    }

    pub fn is_escalation(&self) -> bool {
        matches!(self, FinalDecision::Escalate)
    }
}

impl std::fmt::Display for FinalDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
