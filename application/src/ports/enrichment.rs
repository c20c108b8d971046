//! Enrichment gateway port
//!
//! Defines the interface for the optional text-generation service that
//! rewords role arguments. Implementations (adapters) live in the
//! infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during enrichment calls
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API key not set: {0}")]
    MissingApiKey(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for argument enrichment
///
/// A failure here is never fatal: the use case logs it and keeps the
/// deterministic argument.
#[async_trait]
pub trait EnrichmentGateway: Send + Sync {
    /// Short name for logs (e.g. the model id)
    fn name(&self) -> &str;

    /// Send one system + user prompt pair and return the raw reply text
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, GatewayError>;
}
