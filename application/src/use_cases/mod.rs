//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod intake;
pub mod run_tribunal;
pub mod stats;
