//! Enrichment gateway adapters

mod openai;

pub use openai::OpenAiEnrichmentGateway;
