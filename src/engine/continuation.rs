//! Verdict settlement for deferred rules
//!
//! A deferred rule does not return its verdict; it is handed a
//! [`Continuation`] and settles it when the verdict is known, typically
//! from a spawned task after a timer or I/O completes. The executor
//! suspends on the paired receiver until then.
//!
//! Settling consumes the handle, so a rule cannot settle twice — the
//! "exactly once" contract is enforced by move semantics rather than a
//! runtime guard. Dropping the handle without settling closes the channel
//! and is reported by the executor as
//! [`PipelineError::ContinuationDropped`](crate::foundation::PipelineError).

use crate::foundation::Verdict;
use tokio::sync::oneshot;

/// Single-use handle a deferred rule settles with its verdict.
///
/// # Examples
///
/// ```
/// use rulechain::engine::Rule;
///
/// let rule = Rule::deferred(|value, _options, done| {
///     done.settle(value.is_string());
/// });
/// ```
#[derive(Debug)]
pub struct Continuation {
    tx: oneshot::Sender<Verdict>,
}

impl Continuation {
    /// Creates a continuation and the receiver the executor suspends on.
    pub(crate) fn new() -> (Self, oneshot::Receiver<Verdict>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Settles the rule's verdict, resuming the suspended chain.
    ///
    /// Accepts anything convertible into a [`Verdict`]: a `bool` for
    /// predicate-style rules, or a [`Report`](crate::foundation::Report)
    /// when the deferred work was itself a chain execution.
    pub fn settle(self, verdict: impl Into<Verdict>) {
        // If the receiver is gone the exec call was abandoned; nothing to do.
        let _ = self.tx.send(verdict.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_delivers_the_verdict() {
        let (continuation, mut rx) = Continuation::new();
        continuation.settle(false);
        assert_eq!(rx.try_recv(), Ok(Verdict::Fail));
    }

    #[test]
    fn dropping_closes_the_channel() {
        let (continuation, mut rx) = Continuation::new();
        drop(continuation);
        assert!(rx.try_recv().is_err());
    }
}
