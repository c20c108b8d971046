//! Run Tribunal use case
//!
//! Drives one deliberation through the domain state machine, optionally
//! enriching round 1 and round 2 arguments, and records the result.

use crate::config::DeliberationParams;
use crate::ports::enrichment::EnrichmentGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::verdict_recorder::{DeliberationRecord, NoVerdictRecorder, VerdictRecorder};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tribunal_domain::{
    Contribution, Deliberation, DeliberationOutcome, PromptTemplate, Role, Round, TransactionSignal,
    parse_enrichment_response,
};

/// What happened to enrichment during one deliberation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    /// Calls sent to the service
    pub attempted: usize,
    /// Replies merged into an argument
    pub applied: usize,
    /// Replies that did not parse or argued a different stance
    pub discarded: usize,
    /// Calls that errored or timed out
    pub failed: usize,
}

/// Output of the RunTribunal use case
#[derive(Debug, Clone, Serialize)]
pub struct TribunalOutcome {
    pub deliberation: DeliberationOutcome,
    pub enrichment: EnrichmentReport,
}

/// Use case for running one tribunal deliberation
pub struct RunTribunalUseCase {
    params: DeliberationParams,
    enrichment: Option<Arc<dyn EnrichmentGateway>>,
    recorder: Arc<dyn VerdictRecorder>,
}

impl RunTribunalUseCase {
    pub fn new(params: DeliberationParams) -> Self {
        Self {
            params,
            enrichment: None,
            recorder: Arc::new(NoVerdictRecorder),
        }
    }

    pub fn with_enrichment(mut self, gateway: Arc<dyn EnrichmentGateway>) -> Self {
        self.enrichment = Some(gateway);
        self
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn VerdictRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    pub fn params(&self) -> &DeliberationParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, signal: TransactionSignal) -> TribunalOutcome {
        self.execute_with_progress(signal, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Total: always returns an outcome carrying a verdict.
    pub async fn execute_with_progress(
        &self,
        signal: TransactionSignal,
        progress: &dyn ProgressNotifier,
    ) -> TribunalOutcome {
        let mut deliberation = Deliberation::open(signal, self.params.thresholds);
        let mut report = EnrichmentReport::default();

        info!(
            "Deliberating {} (consistency: {})",
            deliberation.facts().transaction_id(),
            deliberation.facts().data_consistency()
        );
        progress.on_facts(deliberation.facts());

        while let Some(round) = deliberation.current_round() {
            debug!("{}", round);
            progress.on_round_start(round);

            for role in Role::ALL {
                let Some(contribution) = deliberation.propose(role) else {
                    warn!("{} produced nothing in {}", role, round);
                    progress.on_role_missing(role, round);
                    continue;
                };

                let contribution = self
                    .enrich(&deliberation, role, round, contribution, &mut report)
                    .await;
                progress.on_contribution(role, round, &contribution);
                deliberation.record(role, contribution);
            }

            deliberation.advance();
        }

        let outcome = deliberation.conclude();
        let verdict = &outcome.verdict;
        info!(
            "Verdict for {}: {} (confidence {:.1}%, circuit breaker: {})",
            verdict.transaction_id,
            verdict.decision,
            verdict.confidence,
            verdict.circuit_breaker_triggered
        );
        if let Some(reason) = &verdict.escalation_reason {
            info!("Escalation reason: {}", reason);
        }
        progress.on_verdict(verdict);

        self.recorder
            .record(&DeliberationRecord::from_outcome(&outcome));

        TribunalOutcome {
            deliberation: outcome,
            enrichment: report,
        }
    }

    /// Enrich a round 1 or round 2 argument. Fails open to `contribution`.
    async fn enrich(
        &self,
        deliberation: &Deliberation,
        role: Role,
        round: Round,
        contribution: Contribution,
        report: &mut EnrichmentReport,
    ) -> Contribution {
        if !self.params.enrichment_enabled || round == Round::FinalVote {
            return contribution;
        }
        let Some(gateway) = &self.enrichment else {
            return contribution;
        };
        let Contribution::Argument(draft) = &contribution else {
            return contribution;
        };

        let opponent = match round {
            Round::Rebuttal => deliberation
                .log()
                .argument_of(Round::Opening, role.opponent().name()),
            _ => None,
        };
        let prompt =
            PromptTemplate::argument_prompt(role, round, deliberation.facts(), draft, opponent);

        report.attempted += 1;
        let timeout = self.params.enrichment_timeout;
        let reply = match tokio::time::timeout(
            timeout,
            gateway.complete(PromptTemplate::system_for(role), &prompt),
        )
        .await
        {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                warn!("Enrichment via {} failed for {}: {}", gateway.name(), role, e);
                report.failed += 1;
                return contribution;
            }
            Err(_) => {
                warn!(
                    "Enrichment via {} timed out after {}s for {}",
                    gateway.name(),
                    timeout.as_secs(),
                    role
                );
                report.failed += 1;
                return contribution;
            }
        };

        match parse_enrichment_response(&reply).and_then(|e| e.apply(draft)) {
            Some(enriched) => {
                debug!("Enriched {} argument for {}", role, round);
                report.applied += 1;
                Contribution::Argument(enriched)
            }
            None => {
                warn!(
                    "Discarding enrichment for {} in {}: unparsable or stance changed",
                    role, round
                );
                report.discarded += 1;
                contribution
            }
        }
    }
}
