//! Verdicts and reports
//!
//! Two levels of outcome exist in a rule chain:
//!
//! - [`Verdict`] — the outcome of invoking a single rule. Plain predicates
//!   map onto `Pass`/`Fail` via `From<bool>`; a nested chain that fails
//!   yields `Nested` carrying its own label list.
//! - [`Report`] — the terminal result of executing a whole chain. A report
//!   is either `Pass` or `Fail` with a non-empty, ordered label list; an
//!   empty failure list is unrepresentable.

use crate::foundation::Label;
use serde::Serialize;
use std::fmt;

// ============================================================================
// VERDICT
// ============================================================================

/// The canonical outcome of one rule invocation.
///
/// Every rule shape — plain predicate, option-aware predicate, deferred
/// rule, nested chain — resolves to exactly one `Verdict`. Anything a rule
/// produces that is not a failure counts as `Pass`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The rule accepted the value.
    Pass,
    /// The rule rejected the value; the entry's label is recorded.
    Fail,
    /// A nested chain rejected the value with its own label list.
    ///
    /// The entry's label is recorded, and in nested-error mode each child
    /// label is additionally recorded as `"label.child"`.
    Nested(Vec<Label>),
}

impl Verdict {
    /// Returns `true` if the rule accepted the value.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Verdict::Pass } else { Verdict::Fail }
    }
}

impl From<Report> for Verdict {
    fn from(report: Report) -> Self {
        match report {
            Report::Pass => Verdict::Pass,
            Report::Fail(labels) => Verdict::Nested(labels),
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// The terminal result of executing a rule chain against one value.
///
/// # Examples
///
/// ```
/// use rulechain::foundation::{Label, Report};
///
/// let report = Report::from_labels(vec![]);
/// assert!(report.is_pass());
///
/// let report = Report::from_labels(vec![Label::from("type")]);
/// assert_eq!(report.labels().unwrap(), ["type"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Report {
    /// Every applicable rule accepted the value.
    Pass,
    /// At least one rule rejected the value. The list is non-empty and
    /// ordered by discovery; duplicate labels are preserved.
    Fail(Vec<Label>),
}

impl Report {
    /// Builds a report from an accumulated label list.
    ///
    /// An empty list means no rule failed, so it resolves to `Pass` — the
    /// empty `Fail` state cannot be constructed.
    #[must_use]
    pub fn from_labels(labels: Vec<Label>) -> Self {
        if labels.is_empty() {
            Report::Pass
        } else {
            Report::Fail(labels)
        }
    }

    /// Returns `true` if every rule accepted the value.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Report::Pass)
    }

    /// Returns `true` if any rule rejected the value.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// Returns the failure labels, or `None` for a passing report.
    #[must_use]
    pub fn labels(&self) -> Option<&[Label]> {
        match self {
            Report::Pass => None,
            Report::Fail(labels) => Some(labels),
        }
    }

    /// Consumes the report, returning the failure labels if any.
    #[must_use]
    pub fn into_labels(self) -> Option<Vec<Label>> {
        match self {
            Report::Pass => None,
            Report::Fail(labels) => Some(labels),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Pass => f.write_str("pass"),
            Report::Fail(labels) => {
                f.write_str("fail [")?;
                for (i, label) in labels.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{label}")?;
                }
                f.write_str("]")
            }
        }
    }
}
