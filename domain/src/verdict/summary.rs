//! Human-readable rendering of a debate log.

use crate::core::string::excerpt;
use crate::debate::argument::Round;
use crate::debate::log::DebateLog;

pub const SUMMARY_HEADER: &str = "=== TRIBUNAL DEBATE LOG ===";

/// Render every round of `log`, in order
pub fn render_debate_summary(log: &DebateLog) -> String {
    let mut lines = vec![SUMMARY_HEADER.to_string()];

    for round in Round::ALL {
        lines.push(String::new());
        lines.push(format!(
            "--- ROUND {}: {} ---",
            round.number(),
            round.title()
        ));

        for argument in log.arguments(round) {
            lines.push(format!(
                "  {}: {} ({:.0}% confidence)",
                argument.role_name, argument.position, argument.confidence
            ));
            let label = if round == Round::Opening {
                "Reasoning"
            } else {
                "Rebuttal"
            };
            lines.push(format!("    {label}: {}", excerpt(&argument.reasoning, 150)));
        }

        if round == Round::FinalVote {
            for vote in log.votes() {
                let veto = if vote.veto_triggered { " [VETO]" } else { "" };
                lines.push(format!(
                    "  {}: {} ({:.0}% confidence){veto}",
                    vote.role_name, vote.vote, vote.confidence
                ));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::argument::{AgentArgument, AgentVote, Contribution};
    use crate::debate::stance::RoleStance;

    #[test]
    fn test_summary_lists_rounds_and_veto_marker() {
        let log = DebateLog::new()
            .append(
                Round::Opening,
                Contribution::Argument(AgentArgument::new(
                    "User Advocate",
                    RoleStance::Uncertain,
                    55.0,
                    "Inconclusive",
                )),
            )
            .append(
                Round::FinalVote,
                Contribution::Vote(AgentVote::veto("Risk Officer", 95.0, "VETO")),
            );

        let summary = render_debate_summary(&log);
        assert!(summary.starts_with(SUMMARY_HEADER));
        assert!(summary.contains("--- ROUND 1: Opening Statements ---"));
        assert!(summary.contains("--- ROUND 2: Challenge & Rebuttal ---"));
        assert!(summary.contains("User Advocate: UNCERTAIN (55% confidence)"));
        assert!(summary.contains("Reasoning: Inconclusive"));
        assert!(summary.contains("Risk Officer: DENY (95% confidence) [VETO]"));
    }

    #[test]
    fn test_empty_log_still_has_round_headers() {
        let summary = render_debate_summary(&DebateLog::new());
        assert_eq!(summary.matches("--- ROUND").count(), 3);
    }
}
