//! Chain construction
//!
//! A [`Pipeline`] is built once with fluent, self-returning registration
//! calls and then executed any number of times. Registration is append
//! only; the two mode toggles ([`blocking`](Pipeline::blocking) /
//! [`not_blocking`](Pipeline::not_blocking)) affect only rules registered
//! *after* them, because each entry captures the mode in force when it was
//! appended.
//!
//! # Examples
//!
//! ```
//! use rulechain::prelude::*;
//! use serde_json::Value;
//!
//! let chain = Pipeline::new()
//!     .rule(Rule::predicate(Value::is_string), "type")
//!     .not_blocking()
//!     .rule(
//!         Rule::predicate(|v| v.as_str().is_some_and(|s| s.starts_with('a'))),
//!         "start",
//!     );
//! ```

use crate::engine::Rule;
use crate::engine::rule::Entry;
use crate::foundation::Label;
use crate::options::Options;

/// An ordered, append-only chain of labeled rules.
///
/// Everything reachable from a built chain is read-only during execution,
/// so one chain may serve any number of concurrent
/// [`exec`](Pipeline::exec) calls; all mutable execution state lives in
/// the call itself.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub(crate) entries: Vec<Entry>,
    pub(crate) defaults: Options,
    pub(crate) nested_errors: bool,
    /// Mode captured by subsequent registrations.
    blocking: bool,
}

impl Pipeline {
    /// Creates an empty chain with no default options.
    ///
    /// Rules registered before any toggle are blocking.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(Options::new())
    }

    /// Creates an empty chain with the given default options.
    ///
    /// Defaults are fixed for the lifetime of the chain; call-time options
    /// are shallow-merged over them on every execution.
    #[must_use]
    pub fn with_defaults(defaults: Options) -> Self {
        Self {
            entries: Vec::new(),
            defaults,
            nested_errors: false,
            blocking: true,
        }
    }

    /// Registers a rule under a label, capturing the current blocking mode.
    ///
    /// Accepts any rule shape, including another `Pipeline`. Labels are not
    /// checked for uniqueness; duplicates are reported in discovery order.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(self, rule: impl Into<Rule>, label: impl Into<Label>) -> Self {
        self.push(rule.into(), None, label.into())
    }

    /// Registers a rule scoped to a dotted sub-path of the input value.
    ///
    /// The rule receives the field the path selects instead of the
    /// top-level value; a dangling path scopes it to `Null`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule_at(
        self,
        rule: impl Into<Rule>,
        path: impl Into<String>,
        label: impl Into<Label>,
    ) -> Self {
        self.push(rule.into(), Some(path.into()), label.into())
    }

    /// Makes subsequent rules halt the chain when they fail.
    ///
    /// This is the initial mode. Already-registered entries keep the mode
    /// they were registered under.
    #[must_use = "builder methods must be chained or built"]
    pub fn blocking(mut self) -> Self {
        self.blocking = true;
        self
    }

    /// Makes subsequent rules record their failure and continue.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_blocking(mut self) -> Self {
        self.blocking = false;
        self
    }

    /// Expands a failing nested chain's own labels as `"parent.child"`
    /// entries, appended right after the parent label.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested_errors(mut self) -> Self {
        self.nested_errors = true;
        self
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(mut self, rule: Rule, path: Option<String>, label: Label) -> Self {
        self.entries.push(Entry {
            rule,
            label,
            blocking: self.blocking,
            path,
        });
        self
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
