//! Progress reporting for tribunal deliberations

use colored::Colorize;
use tribunal_application::ProgressNotifier;
use tribunal_domain::{Contribution, FactSheet, Role, Round, Verdict};

/// Simple text-based progress written to stderr, one line per step
pub struct ProgressReporter;

impl ProgressReporter {
    fn contribution_line(role: Role, contribution: &Contribution) -> String {
        let veto = match contribution.as_vote() {
            Some(vote) if vote.veto_triggered => " VETO",
            _ => "",
        };
        format!(
            "  {} {:<13} {} {:.0}%{}",
            "v".green(),
            role.name(),
            contribution.stance(),
            contribution.confidence(),
            veto
        )
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_facts(&self, facts: &FactSheet) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            facts.transaction_id().bold(),
            facts.data_consistency()
        );
    }

    fn on_round_start(&self, round: Round) {
        eprintln!("{} {}", "->".cyan(), round.to_string().bold());
    }

    fn on_contribution(&self, role: Role, _round: Round, contribution: &Contribution) {
        eprintln!("{}", Self::contribution_line(role, contribution));
    }

    fn on_role_missing(&self, role: Role, round: Round) {
        eprintln!("  {} {} produced nothing in {}", "x".red(), role, round);
    }

    fn on_verdict(&self, verdict: &Verdict) {
        eprintln!(
            "{} {} ({:.1}%)\n",
            "->".cyan(),
            verdict.decision.as_str().bold(),
            verdict.confidence
        );
    }
}
