//! Deliberation parameters for use case control.
//!
//! [`DeliberationParams`] groups the static parameters that control
//! [`RunTribunalUseCase`](crate::use_cases::run_tribunal::RunTribunalUseCase).
//! The thresholds are domain policy; the enrichment knobs are
//! application concerns.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tribunal_domain::CircuitBreakerThresholds;

/// Deliberation control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliberationParams {
    /// Circuit-breaker and veto thresholds.
    pub thresholds: CircuitBreakerThresholds,
    /// Whether arguments are sent to the enrichment service at all.
    pub enrichment_enabled: bool,
    /// Upper bound on a single enrichment call. One attempt, no retry.
    pub enrichment_timeout: Duration,
}

impl Default for DeliberationParams {
    fn default() -> Self {
        Self {
            thresholds: CircuitBreakerThresholds::default(),
            enrichment_enabled: true,
            enrichment_timeout: Duration::from_secs(20),
        }
    }
}

impl DeliberationParams {
    // ==================== Builder Methods ====================

    pub fn with_thresholds(mut self, thresholds: CircuitBreakerThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_enrichment_enabled(mut self, enabled: bool) -> Self {
        self.enrichment_enabled = enabled;
        self
    }

    pub fn with_enrichment_timeout(mut self, timeout: Duration) -> Self {
        self.enrichment_timeout = timeout;
        self
    }
}
