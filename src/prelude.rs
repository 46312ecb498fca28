//! Prelude module for convenient imports.
//!
//! Provides a single `use rulechain::prelude::*;` import that brings in
//! everything needed to build and execute chains.
//!
//! # Examples
//!
//! ```
//! use rulechain::prelude::*;
//! use serde_json::{Value, json};
//!
//! let chain = Pipeline::new().rule(Rule::predicate(Value::is_string), "type");
//! assert!(chain.exec_now(&json!("ok")).unwrap().is_pass());
//! ```

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::engine::{Continuation, Pipeline, Rule};

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{ExecResult, Label, PipelineError, Report, Verdict};

// ============================================================================
// OPTIONS & PATHS
// ============================================================================

pub use crate::options::{Options, merge};
pub use crate::path::resolve;
