//! Append-only debate log and transcript.
//!
//! A log belongs to exactly one deliberation. Appending consumes the log and
//! returns the extended value, so records already written can never be
//! touched and nothing is shared between deliberations.

use super::argument::{AgentArgument, AgentVote, Contribution, Round};
use serde::{Deserialize, Serialize};

/// One record in the debate log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateEntry {
    pub round: Round,
    pub contribution: Contribution,
}

/// Ordered, append-only record of every contribution in a debate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebateLog {
    entries: Vec<DebateEntry>,
}

impl DebateLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new log with `contribution` appended under `round`
    #[must_use]
    pub fn append(mut self, round: Round, contribution: Contribution) -> Self {
        self.entries.push(DebateEntry {
            round,
            contribution,
        });
        self
    }

    pub fn entries(&self) -> &[DebateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All contributions recorded for a round, in order
    pub fn round(&self, round: Round) -> impl Iterator<Item = &Contribution> {
        self.entries
            .iter()
            .filter(move |e| e.round == round)
            .map(|e| &e.contribution)
    }

    pub fn count(&self, round: Round) -> usize {
        self.round(round).count()
    }

    /// Arguments recorded in round 1 or 2
    pub fn arguments(&self, round: Round) -> impl Iterator<Item = &AgentArgument> {
        self.round(round).filter_map(Contribution::as_argument)
    }

    /// A specific role's argument in a round
    pub fn argument_of(&self, round: Round, role_name: &str) -> Option<&AgentArgument> {
        self.arguments(round).find(|a| a.role_name == role_name)
    }

    /// Final votes (round 3), in the order they were cast
    pub fn votes(&self) -> Vec<AgentVote> {
        self.round(Round::FinalVote)
            .filter_map(Contribution::as_vote)
            .cloned()
            .collect()
    }
}

/// One `(role, message)` line in the deliberation transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: String,
    pub message: String,
}

impl TranscriptEntry {
    pub fn new(role: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            message: message.into(),
        }
    }
}

/// Ordered transcript of role messages for one deliberation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<TranscriptEntry>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn append(mut self, role: impl Into<String>, message: impl Into<String>) -> Self {
        self.0.push(TranscriptEntry::new(role, message));
        self
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_entries(self) -> Vec<TranscriptEntry> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::stance::RoleStance;

    fn arg(role: &str, stance: RoleStance) -> Contribution {
        Contribution::Argument(AgentArgument::new(role, stance, 70.0, "r"))
    }

    #[test]
    fn test_append_preserves_order() {
        let log = DebateLog::new()
            .append(Round::Opening, arg("A", RoleStance::Relief))
            .append(Round::Opening, arg("B", RoleStance::Deny))
            .append(Round::Rebuttal, arg("A", RoleStance::Uncertain));

        assert_eq!(log.len(), 3);
        assert_eq!(log.count(Round::Opening), 2);
        assert_eq!(log.count(Round::Rebuttal), 1);
        assert_eq!(log.count(Round::FinalVote), 0);

        let roles: Vec<_> = log.round(Round::Opening).map(|c| c.role_name()).collect();
        assert_eq!(roles, vec!["A", "B"]);
    }

    #[test]
    fn test_argument_lookup_by_role() {
        let log = DebateLog::new()
            .append(Round::Opening, arg("A", RoleStance::Relief))
            .append(Round::Opening, arg("B", RoleStance::Deny));

        let b = log.argument_of(Round::Opening, "B").unwrap();
        assert_eq!(b.position, RoleStance::Deny);
        assert!(log.argument_of(Round::Rebuttal, "B").is_none());
    }

    #[test]
    fn test_votes_only_from_final_round() {
        let log = DebateLog::new()
            .append(Round::Opening, arg("A", RoleStance::Relief))
            .append(
                Round::FinalVote,
                Contribution::Vote(AgentVote::new("A", RoleStance::Relief, 80.0, "ok")),
            );
        let votes = log.votes();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].role_name, "A");
    }

    #[test]
    fn test_transcript_serializes_as_list() {
        let transcript = Transcript::new()
            .append("Signal Analyst", "FactSheet created")
            .append("Judge", "VERDICT: RELIEF");
        let json = serde_json::to_value(&transcript).unwrap();
        assert!(json.is_array());
        assert_eq!(json[1]["role"], "Judge");
    }
}
