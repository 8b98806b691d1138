use serde_json::Value;

use crate::types::{Key, PathSet};
use crate::util::{child, SEPARATOR};

/// Check if a literal key exists at the top level of a container.
///
/// Numeric keys are normalized first, so `2.0` finds the key `"2"`.
///
/// # Example
///
/// ```
/// use json_arr_path::exists;
/// use serde_json::json;
///
/// let doc = json!({"2": "two", "a.b": null});
/// assert!(exists(&doc, 2.0));
/// assert!(exists(&doc, "a.b"));
/// assert!(!exists(&doc, "a"));
/// assert!(exists(&json!(["x"]), 0usize));
/// ```
pub fn exists(container: &Value, key: impl Into<Key>) -> bool {
    child(container, &key.into().as_segment()).is_some()
}

fn resolves(container: &Value, path: &str) -> bool {
    if child(container, path).is_some() {
        return true;
    }
    let mut current = container;
    for segment in path.split(SEPARATOR) {
        match child(current, segment) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

fn is_empty_container(container: &Value) -> bool {
    match container {
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => true,
    }
}

/// Check that every path exists in a container.
///
/// Existence, not non-nullness: a key holding `null` counts. An empty
/// container or an empty set of paths is always `false`.
///
/// # Example
///
/// ```
/// use json_arr_path::has;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": null}, "c": 1});
/// assert!(has(&doc, "a.b"));
/// assert!(has(&doc, &["a.b", "c"]));
/// assert!(!has(&doc, &["a.b", "d"]));
/// ```
pub fn has<P: PathSet + ?Sized>(container: &Value, paths: &P) -> bool {
    let paths = paths.paths();
    if is_empty_container(container) || paths.is_empty() {
        return false;
    }
    paths.into_iter().all(|path| resolves(container, path))
}

/// Check that at least one path exists in a container.
///
/// # Example
///
/// ```
/// use json_arr_path::has_any;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}});
/// assert!(has_any(&doc, &["x", "a.b"]));
/// assert!(!has_any(&doc, &["x", "y"]));
/// ```
pub fn has_any<P: PathSet + ?Sized>(container: &Value, paths: &P) -> bool {
    let paths = paths.paths();
    if is_empty_container(container) || paths.is_empty() {
        return false;
    }
    paths.into_iter().any(|path| has(container, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exists_float_and_int_keys() {
        let doc = json!({"1.5": "a", "3": "b"});
        assert!(exists(&doc, 1.5));
        assert!(exists(&doc, 3.0));
        assert!(exists(&doc, 3i64));
        assert!(!exists(&doc, 4i64));
    }

    #[test]
    fn test_exists_is_literal_only() {
        let doc = json!({"a": {"b": 1}});
        assert!(!exists(&doc, "a.b"));
    }

    #[test]
    fn test_has_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(!has(&json!({}), "a"));
        assert!(!has(&json!([]), "0"));
        assert!(!has(&json!({"a": 1}), &empty));
        assert!(!has(&json!(1), "a"));
    }

    #[test]
    fn test_has_literal_dotted_key() {
        let doc = json!({"a.b": 1});
        assert!(has(&doc, "a.b"));
        assert!(!has(&doc, "a"));
    }

    #[test]
    fn test_has_sequence_paths() {
        let doc = json!({"list": [{"id": 1}, {"id": 2}]});
        assert!(has(&doc, "list.1.id"));
        assert!(!has(&doc, "list.2.id"));
    }

    #[test]
    fn test_has_any_empty_inputs() {
        let empty: Vec<&str> = Vec::new();
        assert!(!has_any(&json!({"a": 1}), &empty));
        assert!(!has_any(&json!({}), "a"));
    }
}
