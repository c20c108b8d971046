//! Infrastructure layer for payment-tribunal
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
#[cfg(feature = "llm-enrichment")]
pub mod llm;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEnrichmentConfig, FileHistoryConfig, FileOutputConfig,
    FileThresholdsConfig,
};
#[cfg(feature = "llm-enrichment")]
pub use llm::OpenAiEnrichmentGateway;
pub use logging::{HistoryError, JsonlVerdictRecorder, read_history};
