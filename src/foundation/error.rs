//! Executor-level errors
//!
//! Rule-level invalidity is never an error: a rejecting rule is recorded as
//! a label in the [`Report`](crate::foundation::Report) and the chain keeps
//! its pass/fail contract. `PipelineError` covers the two situations outside
//! that contract: a deferred rule that breaks the settlement protocol, and a
//! synchronous poll of a chain that suspended.

use crate::foundation::Label;
use thiserror::Error;

/// Errors surfaced by chain execution itself, as opposed to rule failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A deferred rule dropped its continuation without settling it.
    ///
    /// The settlement channel closes as soon as the handle is dropped, so
    /// the violation is reported instead of suspending the call forever.
    #[error("rule `{label}` dropped its continuation without settling it")]
    ContinuationDropped {
        /// Label of the offending rule entry.
        label: Label,
    },

    /// `exec_now` was called on a chain whose walk suspended.
    ///
    /// At least one deferred rule did not settle its continuation before
    /// returning; await [`exec`](crate::engine::Pipeline::exec) instead.
    #[error("chain suspended on a deferred rule; await `exec` instead")]
    Pending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuation_dropped_names_the_rule() {
        let err = PipelineError::ContinuationDropped {
            label: Label::from("remote"),
        };
        assert_eq!(
            err.to_string(),
            "rule `remote` dropped its continuation without settling it"
        );
    }

    #[test]
    fn pending_mentions_exec() {
        assert!(PipelineError::Pending.to_string().contains("exec"));
    }
}
