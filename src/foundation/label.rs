//! Rule labels
//!
//! A [`Label`] is the opaque identifier a rule is registered under and the
//! value recorded in a failure report when that rule is invalid. Labels are
//! caller-supplied, need not be unique, and are preserved in discovery order.
//!
//! Uses `Cow<'static, str>` for zero-allocation in the common case of
//! static label literals.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Identifier recorded in a failure report for an invalid rule.
///
/// # Examples
///
/// ```
/// use rulechain::foundation::Label;
///
/// let label = Label::from("type");
/// assert_eq!(label, "type");
///
/// let child = Label::from("start");
/// assert_eq!(Label::dotted(&label, &child), "type.start");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Label(Cow<'static, str>);

impl Label {
    /// Creates a label from a static string or owned `String`.
    ///
    /// Static strings do not allocate.
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self(label.into())
    }

    /// Synthesizes the `"parent.child"` label used in nested-error mode.
    #[must_use]
    pub fn dotted(parent: &Label, child: &Label) -> Self {
        Self(Cow::Owned(format!("{}.{}", parent.0, child.0)))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Label {
    fn from(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }
}

impl From<String> for Label {
    fn from(label: String) -> Self {
        Self(Cow::Owned(label))
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_labels_do_not_allocate() {
        let label = Label::from("type");
        assert!(matches!(label.0, Cow::Borrowed(_)));
    }

    #[test]
    fn owned_labels_allocate() {
        let label = Label::from(format!("rule_{}", 7));
        assert!(matches!(label.0, Cow::Owned(_)));
        assert_eq!(label, "rule_7");
    }

    #[test]
    fn dotted_joins_parent_and_child() {
        let parent = Label::from("start");
        let child = Label::from("start");
        assert_eq!(Label::dotted(&parent, &child), "start.start");
    }

    #[test]
    fn compares_against_str() {
        let label = Label::from("locale");
        assert_eq!(label, "locale");
        assert_ne!(label, "type");
    }
}
