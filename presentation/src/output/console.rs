//! Console output formatter for tribunal outcomes

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use tribunal_application::{TribunalOutcome, VerdictStats};
use tribunal_domain::{
    Contribution, FactSheet, FinalDecision, Round, Scenario, Verdict, verdict_line,
};

/// Formats tribunal outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &TribunalOutcome) -> String {
        let deliberation = &outcome.deliberation;
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "Tribunal: {}",
            deliberation.facts.transaction_id()
        )));
        output.push('\n');

        output.push_str(&Self::facts(&deliberation.facts));

        for round in Round::ALL {
            let contributions: Vec<&Contribution> = deliberation.log.round(round).collect();
            if contributions.is_empty() {
                continue;
            }
            output.push_str(&Self::section_header(&round.to_string()));
            for contribution in contributions {
                output.push_str(&Self::contribution(contribution));
            }
        }

        output.push_str(&Self::section_header("Verdict"));
        output.push_str(&Self::verdict_block(&deliberation.verdict));

        let enrichment = &outcome.enrichment;
        if enrichment.attempted > 0 {
            output.push_str(&format!(
                "\n{} {} applied, {} discarded, {} failed of {}\n",
                "Enrichment:".dimmed(),
                enrichment.applied,
                enrichment.discarded,
                enrichment.failed,
                enrichment.attempted
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &TribunalOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format several outcomes as one JSON array
    pub fn format_json_many(outcomes: &[TribunalOutcome]) -> String {
        serde_json::to_string_pretty(outcomes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the verdict only (concise output)
    pub fn format_verdict_only(verdict: &Verdict) -> String {
        format!(
            "{} {}\n{}",
            Self::decision(verdict.decision),
            verdict.transaction_id.dimmed(),
            Self::verdict_block(verdict)
        )
    }

    /// A dispute rejected at intake
    pub fn format_rejection(verdict: &Verdict, reason: &str) -> String {
        format!(
            "{} {}\n  {}\n  {}\n",
            "REJECTED".red().bold(),
            verdict.transaction_id,
            reason,
            verdict_line(verdict).bold()
        )
    }

    /// Table of bundled scenarios
    pub fn format_scenarios() -> String {
        let mut output = format!("{}\n", "Bundled scenarios:".cyan().bold());
        for scenario in Scenario::ALL {
            output.push_str(&format!(
                "  {:<16} {:<9} {}\n",
                scenario.name().bold(),
                scenario.expected_decision().as_str(),
                scenario.description()
            ));
        }
        output
    }

    /// Verdict history summary
    pub fn format_stats(stats: &VerdictStats, source: &str) -> String {
        let mut output = Self::header("Verdict History");
        output.push('\n');
        output.push_str(&format!("{} {}\n\n", "Source:".cyan().bold(), source));

        if stats.total == 0 {
            output.push_str("No verdicts recorded yet.\n");
            return output;
        }

        output.push_str(&format!("  {:<22} {}\n", "Total verdicts", stats.total));
        output.push_str(&format!(
            "  {:<22} {}\n",
            "RELIEF".green(),
            stats.relief
        ));
        output.push_str(&format!("  {:<22} {}\n", "DENY".red(), stats.deny));
        output.push_str(&format!(
            "  {:<22} {} ({:.1}%)\n",
            "ESCALATE".yellow(),
            stats.escalated,
            stats.escalation_rate()
        ));
        output.push_str(&format!(
            "  {:<22} {:.2}\n",
            "Amount held for review", stats.amount_held
        ));
        output.push_str(&format!(
            "  {:<22} {:.1}%\n",
            "Average confidence", stats.average_confidence
        ));
        output.push_str(&Self::footer());
        output
    }

    fn facts(facts: &FactSheet) -> String {
        let signal = facts.signal();
        let mut output = format!("{}\n", "Fact Sheet (Signal Analyst)".cyan().bold());
        output.push_str(&format!("  Claim:        {}\n", signal.user_claim));
        output.push_str(&format!("  Amount:       {:.2}\n", signal.amount));
        output.push_str(&format!("  Bank:         {}\n", facts.bank_response_summary()));
        output.push_str(&format!("  Ledger:       {}\n", facts.ledger_state()));
        output.push_str(&format!(
            "  Consistency:  {}\n",
            facts.data_consistency().as_str().bold()
        ));
        output
    }

    fn contribution(contribution: &Contribution) -> String {
        let mut output = format!(
            "\n{} {} at {:.0}%",
            format!("── {} ──", contribution.role_name()).yellow().bold(),
            contribution.stance().as_str().bold(),
            contribution.confidence()
        );

        if let Some(vote) = contribution.as_vote()
            && vote.veto_triggered
        {
            output.push_str(&format!(" {}", "[VETO]".red().bold()));
        }
        output.push('\n');
        output.push_str(&Self::indent(contribution.reasoning(), "  "));
        output.push('\n');

        if let Some(argument) = contribution.as_argument() {
            for item in &argument.evidence {
                output.push_str(&format!("  {} {}\n", "*".dimmed(), item));
            }
        }
        output
    }

    fn verdict_block(verdict: &Verdict) -> String {
        let mut output = format!("{}\n", verdict_line(verdict).bold());
        output.push_str(&format!("Confidence: {:.1}%\n", verdict.confidence));
        if let Some(reason) = &verdict.escalation_reason {
            output.push_str(&format!("{} {}\n", "Escalation:".yellow().bold(), reason));
        } else {
            output.push_str(&format!("{}\n", verdict.reasoning));
        }
        output
    }

    fn decision(decision: FinalDecision) -> ColoredString {
        match decision {
            FinalDecision::Relief => decision.as_str().green().bold(),
            FinalDecision::Deny => decision.as_str().red().bold(),
            FinalDecision::Escalate => decision.as_str().yellow().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &TribunalOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &TribunalOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_verdict_only(&self, verdict: &Verdict) -> String {
        Self::format_verdict_only(verdict)
    }
}
