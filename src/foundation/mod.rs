//! Core vocabulary of the rule chain
//!
//! This module contains the fundamental types everything else is built on:
//!
//! - **Labels**: [`Label`]
//! - **Outcomes**: [`Verdict`] (per rule), [`Report`] (per call)
//! - **Errors**: [`PipelineError`]
//!
//! # Architecture
//!
//! The types encode the chain's invariants directly:
//!
//! - A [`Report`] is either `Pass` or a *non-empty* ordered label list;
//!   `Report::from_labels(vec![])` resolves to `Pass`, so the "empty
//!   failure list" state the contract forbids cannot be constructed.
//! - A [`Verdict`] is a tagged variant, replacing runtime sniffing of what
//!   a rule returned: predicates map through `From<bool>`, failed nested
//!   chains map through `From<Report>` into `Verdict::Nested`.
//! - [`PipelineError`] is reserved for settlement-protocol violations;
//!   rule rejection never escapes as an error.

pub mod error;
pub mod label;
pub mod report;

pub use error::PipelineError;
pub use label::Label;
pub use report::{Report, Verdict};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of one chain execution: a [`Report`] unless the settlement
/// protocol was violated.
pub type ExecResult = Result<Report, PipelineError>;
