//! # rulechain
//!
//! Continuation-driven rule-chain validation over [`serde_json::Value`].
//!
//! A chain is an ordered list of labeled rules built once and executed
//! many times. Each rule yields a pass/fail verdict; executing the chain
//! yields a [`Report`](foundation::Report) that is either a pass or the
//! ordered list of labels whose rules failed. Rules may resolve inline or
//! defer their verdict through a [`Continuation`](engine::Continuation),
//! and a whole chain can itself be registered as a single rule of another
//! chain.
//!
//! # Quick start
//!
//! ```
//! use rulechain::prelude::*;
//! use serde_json::{Value, json};
//!
//! let chain = Pipeline::new()
//!     .rule(Rule::predicate(Value::is_string), "type")
//!     .not_blocking()
//!     .rule(
//!         Rule::predicate(|v| v.as_str().is_some_and(|s| s.starts_with('a'))),
//!         "start",
//!     )
//!     .rule(
//!         Rule::predicate(|v| v.as_str().is_some_and(|s| s.ends_with('e'))),
//!         "end",
//!     );
//!
//! // All rules here are sync, so the chain can run without a runtime.
//! assert!(chain.exec_now(&json!("awesome")).unwrap().is_pass());
//!
//! let report = chain.exec_now(&json!("superb")).unwrap();
//! assert_eq!(report.labels().unwrap(), ["start", "end"]);
//! ```
//!
//! Chains with rules that suspend (timers, I/O) are awaited instead:
//! `chain.exec(&value).await`.
//!
//! # Module map
//!
//! - [`foundation`] — labels, verdicts, reports, errors
//! - [`engine`] — chain construction and execution
//! - [`options`] — flat option maps and shallow merging
//! - [`path`] — dotted-path scoping into the input value

pub mod engine;
pub mod foundation;
pub mod options;
pub mod path;
pub mod prelude;

// ============================================================================
// ROOT RE-EXPORTS
// ============================================================================

pub use engine::{Continuation, Pipeline, Rule};
pub use foundation::{ExecResult, Label, PipelineError, Report, Verdict};
pub use options::Options;

/// The value type chains validate.
pub use serde_json::Value;
