//! Chain options
//!
//! An [`Options`] value is a flat, string-keyed map handed to every
//! option-aware rule in a chain. Defaults are fixed when the chain is
//! built; call-time overrides are shallow-merged over them once per
//! execution by [`merge`], and every rule invocation within that call sees
//! the same merged map by reference.
//!
//! # Examples
//!
//! ```
//! use rulechain::options::{Options, merge};
//!
//! let defaults = Options::new().with("locale", "en-us").with("strict", true);
//! let overrides = Options::new().with("locale", "ru-ru");
//!
//! let merged = merge(&defaults, &overrides);
//! assert_eq!(merged.get_str("locale"), Some("ru-ru")); // call-time key wins
//! assert_eq!(merged.get("strict"), Some(&true.into())); // default survives
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

/// Flat option map shared by every rule invocation within one call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Creates an empty option map.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Sets an option, returning the map for further chaining.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Looks up an option by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks up a string-valued option by key.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns `true` if no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of options set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Shallow-merges call-time overrides over construction-time defaults.
///
/// One-level key replacement only: no deep merge, no array concatenation.
/// Call-time keys win. Both inputs are left untouched.
#[must_use]
pub fn merge(defaults: &Options, overrides: &Options) -> Options {
    let mut merged = defaults.0.clone();
    for (key, value) in &overrides.0 {
        merged.insert(key.clone(), value.clone());
    }
    Options(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn override_key_wins() {
        let defaults = Options::new().with("locale", "en-us");
        let overrides = Options::new().with("locale", "ru-ru");
        assert_eq!(merge(&defaults, &overrides).get_str("locale"), Some("ru-ru"));
    }

    #[test]
    fn default_keys_survive_merge() {
        let defaults = Options::new().with("locale", "en-us").with("strict", true);
        let overrides = Options::new().with("locale", "ru-ru");
        let merged = merge(&defaults, &overrides);
        assert_eq!(merged.get("strict"), Some(&json!(true)));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_is_shallow() {
        let defaults = Options::new().with("limits", json!({"min": 1, "max": 9}));
        let overrides = Options::new().with("limits", json!({"min": 3}));
        // the nested object is replaced wholesale, not merged
        assert_eq!(
            merge(&defaults, &overrides).get("limits"),
            Some(&json!({"min": 3}))
        );
    }

    #[test]
    fn inputs_are_untouched() {
        let defaults = Options::new().with("locale", "en-us");
        let overrides = Options::new().with("locale", "ru-ru");
        let _ = merge(&defaults, &overrides);
        assert_eq!(defaults.get_str("locale"), Some("en-us"));
        assert_eq!(overrides.get_str("locale"), Some("ru-ru"));
    }

    #[test]
    fn empty_over_empty() {
        assert!(merge(&Options::new(), &Options::new()).is_empty());
    }
}
