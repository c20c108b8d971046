//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: boundary parsing and validation errors
//! - [`string`]: helpers for excerpts of role reasoning

pub mod error;
pub mod string;
