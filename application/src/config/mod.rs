//! Application-level configuration.
//!
//! - [`DeliberationParams`]: thresholds and enrichment control for a deliberation

pub mod deliberation_params;

pub use deliberation_params::DeliberationParams;
