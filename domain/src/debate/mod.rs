//! The three-round debate between the User Advocate and the Risk Officer.
//!
//! Role rules are pure functions of the FactSheet and prior-round
//! arguments. The [`orchestrator`] sequences them and owns the log.

pub mod advocate;
pub mod argument;
pub mod enrichment;
pub mod log;
pub mod orchestrator;
pub mod risk_officer;
pub mod role;
pub mod stance;

pub use advocate::ADVOCATE;
pub use argument::{AgentArgument, AgentVote, Contribution, Round};
pub use enrichment::{Enrichment, parse_enrichment_response};
pub use log::{DebateEntry, DebateLog, Transcript, TranscriptEntry};
pub use orchestrator::{Deliberation, DeliberationOutcome, Stage, deliberate};
pub use risk_officer::RISK_OFFICER;
pub use role::Role;
pub use stance::{FinalDecision, RoleStance};
