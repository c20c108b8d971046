//! Progress notification port
//!
//! Defines the interface for reporting progress during a deliberation.

use tribunal_domain::{Contribution, FactSheet, Role, Round, Verdict};

/// Callback for progress updates during a deliberation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once the Signal Analyst has produced the FactSheet
    fn on_facts(&self, _facts: &FactSheet) {}

    /// Called when a round starts
    fn on_round_start(&self, round: Round);

    /// Called after a role's contribution is recorded
    fn on_contribution(&self, role: Role, round: Round, contribution: &Contribution);

    /// Called when a role produced nothing and the debate skips to judgment
    fn on_role_missing(&self, _role: Role, _round: Round) {}

    /// Called when the Judge has ruled
    fn on_verdict(&self, _verdict: &Verdict) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: Round) {}
    fn on_contribution(&self, _role: Role, _round: Round, _contribution: &Contribution) {}
}
