//! Prompt domain
//!
//! Persona and per-round prompts sent to the optional enrichment service.

mod template;

pub use template::PromptTemplate;
