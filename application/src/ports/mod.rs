//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod enrichment;
pub mod progress;
pub mod verdict_recorder;
