//! Chain execution
//!
//! Executing a chain walks the registered entries in order and drives each
//! rule to a [`Verdict`] before moving on. Sync rules resolve inline;
//! deferred rules hand out a [`Continuation`] and the walk suspends on the
//! paired receiver until it is settled. Nested chains execute recursively
//! with the parent's merged options as their call-time overrides, so outer
//! defaults take precedence over inner ones.
//!
//! The walk itself is the only mutable state; the chain is borrowed
//! shared, so concurrent executions of one chain never observe each other.

use crate::engine::rule::RuleKind;
use crate::engine::{Continuation, Pipeline};
use crate::foundation::{ExecResult, Label, PipelineError, Report, Verdict};
use crate::options::{self, Options};
use crate::path;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::{debug, trace};

/// Scope target for entries whose path resolves to nothing.
static NULL: Value = Value::Null;

impl Pipeline {
    /// Executes the chain against a value with no call-time options.
    ///
    /// Resolves to [`Report::Pass`] when every rule passes, or to
    /// [`Report::Fail`] carrying the labels of failed rules in
    /// registration order.
    pub fn exec<'a>(&'a self, value: &'a Value) -> BoxFuture<'a, ExecResult> {
        self.exec_with(value, Options::new())
    }

    /// Executes the chain with call-time option overrides.
    ///
    /// Overrides are shallow-merged over the chain's defaults once, before
    /// the first rule runs; every rule in this call sees the merged map.
    pub fn exec_with<'a>(&'a self, value: &'a Value, overrides: Options) -> BoxFuture<'a, ExecResult> {
        // Boxing breaks the recursive future type that nested chains
        // would otherwise produce.
        Box::pin(async move {
            let options = options::merge(&self.defaults, &overrides);
            let mut labels: Vec<Label> = Vec::new();

            for entry in &self.entries {
                let scoped = match entry.path.as_deref() {
                    Some(p) => path::resolve(value, p).unwrap_or(&NULL),
                    None => value,
                };

                let verdict = match &entry.rule.kind {
                    RuleKind::Predicate(f) => Verdict::from(f(scoped)),
                    RuleKind::WithOptions(f) => Verdict::from(f(scoped, &options)),
                    RuleKind::Deferred(f) => {
                        let (continuation, settled) = Continuation::new();
                        f(scoped, &options, continuation);
                        settled.await.map_err(|_| PipelineError::ContinuationDropped {
                            label: entry.label.clone(),
                        })?
                    }
                    // The parent's merged map becomes the sub-chain's
                    // call-time overrides, so it beats the sub-chain's
                    // own defaults.
                    RuleKind::Nested(sub) => sub.exec_with(scoped, options.clone()).await?.into(),
                };

                let failed = match verdict {
                    Verdict::Pass => false,
                    Verdict::Fail => {
                        labels.push(entry.label.clone());
                        true
                    }
                    Verdict::Nested(children) => {
                        labels.push(entry.label.clone());
                        if self.nested_errors {
                            labels.extend(children.iter().map(|child| Label::dotted(&entry.label, child)));
                        }
                        true
                    }
                };
                trace!(label = entry.label.as_str(), failed, "rule settled");

                if failed && entry.blocking {
                    break;
                }
            }

            let report = Report::from_labels(labels);
            debug!(failed = report.is_fail(), "chain resolved");
            Ok(report)
        })
    }

    /// Executes the chain synchronously, without a runtime.
    ///
    /// Works only when no deferred rule actually suspends: rules that
    /// settle their continuation inline are fine, but a rule that parks
    /// the continuation for later makes this return
    /// [`PipelineError::Pending`].
    pub fn exec_now(&self, value: &Value) -> ExecResult {
        match self.exec(value).now_or_never() {
            Some(result) => result,
            None => Err(PipelineError::Pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rule;
    use serde_json::json;

    fn is_string() -> Rule {
        Rule::predicate(Value::is_string)
    }

    #[test]
    fn empty_chain_passes() {
        let report = Pipeline::new().exec_now(&json!(42)).unwrap();
        assert!(report.is_pass());
    }

    #[test]
    fn blocking_failure_halts_the_walk() {
        let chain = Pipeline::new()
            .rule(is_string(), "type")
            .rule(Rule::predicate(|_| false), "never-reached");
        let report = chain.exec_now(&json!(12)).unwrap();
        assert_eq!(report.labels().unwrap(), ["type"]);
    }

    #[test]
    fn non_blocking_failures_accumulate() {
        let chain = Pipeline::new()
            .not_blocking()
            .rule(Rule::predicate(|_| false), "a")
            .rule(Rule::predicate(|_| true), "b")
            .rule(Rule::predicate(|_| false), "c");
        let report = chain.exec_now(&json!(0)).unwrap();
        assert_eq!(report.labels().unwrap(), ["a", "c"]);
    }

    #[test]
    fn inline_settled_deferred_needs_no_runtime() {
        let chain = Pipeline::new().rule(
            Rule::deferred(|value, _, done| done.settle(value.is_string())),
            "type",
        );
        assert!(chain.exec_now(&json!("hi")).unwrap().is_pass());
        assert_eq!(
            chain.exec_now(&json!(9)).unwrap().labels().unwrap(),
            ["type"]
        );
    }

    #[test]
    fn dropped_continuation_is_an_error() {
        let chain = Pipeline::new().rule(Rule::deferred(|_, _, done| drop(done)), "leaky");
        assert_eq!(
            chain.exec_now(&json!(0)),
            Err(PipelineError::ContinuationDropped { label: "leaky".into() })
        );
    }

    #[test]
    fn dangling_path_scopes_to_null() {
        let chain = Pipeline::new().rule_at(Rule::predicate(Value::is_null), "missing", "gone");
        assert!(chain.exec_now(&json!({"present": 1})).unwrap().is_pass());
    }

    #[test]
    fn options_reach_rules() {
        let chain = Pipeline::with_defaults(Options::new().with("locale", "en-us"))
            .rule(
                Rule::with_options(|v, o| v.as_str() == o.get_str("locale")),
                "locale",
            );
        assert!(chain.exec_now(&json!("en-us")).unwrap().is_pass());
        let report = chain
            .exec_with(&json!("en-us"), Options::new().with("locale", "ru-ru"))
            .now_or_never()
            .unwrap()
            .unwrap();
        assert_eq!(report.labels().unwrap(), ["locale"]);
    }
}
