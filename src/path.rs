//! Dotted-path value resolution
//!
//! Resolves a field-selector string like `"user.address.0.zip"` against a
//! [`Value`]: segments index objects by key and arrays by numeric index.
//! An absent segment resolves to `None`; the executor then scopes the rule
//! to `Value::Null`, letting a dangling path flow through the rule rather
//! than becoming an error.

use serde_json::Value;

/// Resolves a dotted path against a value.
///
/// # Examples
///
/// ```
/// use rulechain::path::resolve;
/// use serde_json::json;
///
/// let value = json!({"user": {"tags": ["admin", "ops"]}});
/// assert_eq!(resolve(&value, "user.tags.1"), Some(&json!("ops")));
/// assert_eq!(resolve(&value, "user.email"), None);
/// ```
#[must_use]
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_object_keys() {
        let value = json!({"a": {"b": {"c": 7}}});
        assert_eq!(resolve(&value, "a.b.c"), Some(&json!(7)));
    }

    #[test]
    fn resolves_array_indices() {
        let value = json!({"items": [10, 20, 30]});
        assert_eq!(resolve(&value, "items.2"), Some(&json!(30)));
    }

    #[test]
    fn missing_key_is_none() {
        let value = json!({"a": 1});
        assert_eq!(resolve(&value, "b"), None);
        assert_eq!(resolve(&value, "a.b"), None);
    }

    #[test]
    fn out_of_bounds_index_is_none() {
        let value = json!([1, 2]);
        assert_eq!(resolve(&value, "5"), None);
    }

    #[test]
    fn non_numeric_segment_on_array_is_none() {
        let value = json!([1, 2]);
        assert_eq!(resolve(&value, "first"), None);
    }

    #[test]
    fn scalar_cannot_be_descended() {
        let value = json!("leaf");
        assert_eq!(resolve(&value, "anything"), None);
    }
}
