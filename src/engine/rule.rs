//! Rule shapes and registered entries
//!
//! A [`Rule`] is one unit of validation logic in one of four shapes, fixed
//! once at registration instead of re-detected on every call:
//!
//! - [`Rule::predicate`] — pure predicate over the value
//! - [`Rule::with_options`] — predicate that also reads the merged options
//! - [`Rule::deferred`] — settles a [`Continuation`] later
//! - `Pipeline` via `From` — a whole chain used as a single rule
//!
//! Rule functions are stored behind `Arc`, so cloning a compiled chain is
//! cheap and the rule set can be shared across concurrent executions.

use crate::engine::{Continuation, Pipeline};
use crate::foundation::Label;
use crate::options::Options;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;
type OptionsFn = dyn Fn(&Value, &Options) -> bool + Send + Sync;
type DeferredFn = dyn Fn(&Value, &Options, Continuation) + Send + Sync;

/// One unit of validation logic, in canonical form.
#[derive(Clone)]
pub struct Rule {
    pub(crate) kind: RuleKind,
}

#[derive(Clone)]
pub(crate) enum RuleKind {
    Predicate(Arc<PredicateFn>),
    WithOptions(Arc<OptionsFn>),
    Deferred(Arc<DeferredFn>),
    Nested(Box<Pipeline>),
}

impl Rule {
    /// Wraps a pure predicate: the rule passes when it returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain::engine::Rule;
    /// use serde_json::Value;
    ///
    /// let rule = Rule::predicate(Value::is_string);
    /// ```
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: RuleKind::Predicate(Arc::new(f)),
        }
    }

    /// Wraps a predicate that also reads the merged option map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain::engine::Rule;
    ///
    /// let rule = Rule::with_options(|value, options| {
    ///     value.as_str() == options.get_str("locale")
    /// });
    /// ```
    pub fn with_options<F>(f: F) -> Self
    where
        F: Fn(&Value, &Options) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: RuleKind::WithOptions(Arc::new(f)),
        }
    }

    /// Wraps a deferred rule that settles its verdict through a
    /// [`Continuation`], usually from a spawned task.
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn(&Value, &Options, Continuation) + Send + Sync + 'static,
    {
        Self {
            kind: RuleKind::Deferred(Arc::new(f)),
        }
    }
}

impl From<Pipeline> for Rule {
    /// A chain is itself a valid rule: it passes when its report passes,
    /// and a failing report surfaces as a nested verdict.
    fn from(chain: Pipeline) -> Self {
        Self {
            kind: RuleKind::Nested(Box::new(chain)),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuleKind::Predicate(_) => f.write_str("Rule::Predicate(<function>)"),
            RuleKind::WithOptions(_) => f.write_str("Rule::WithOptions(<function>)"),
            RuleKind::Deferred(_) => f.write_str("Rule::Deferred(<function>)"),
            RuleKind::Nested(chain) => f.debug_tuple("Rule::Nested").field(chain).finish(),
        }
    }
}

/// A registered rule: immutable once appended to a chain.
///
/// The blocking flag is captured from the chain's mode at the moment of
/// registration; later toggles do not reach back to existing entries.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) rule: Rule,
    pub(crate) label: Label,
    pub(crate) blocking: bool,
    pub(crate) path: Option<String>,
}
