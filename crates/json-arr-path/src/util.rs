use serde_json::{Map, Value};
use tracing::trace;

use crate::types::{Path, Segment};

/// Path segment separator.
pub const SEPARATOR: char = '.';

/// Split a dotted path into segments.
///
/// Every segment is kept, including empty ones, so `"a..b"` addresses the
/// empty key between `a` and `b`.
///
/// # Example
///
/// ```
/// use json_arr_path::parse_path;
///
/// assert_eq!(parse_path("a.b.0"), vec!["a", "b", "0"]);
/// assert_eq!(parse_path("a"), vec!["a"]);
/// assert_eq!(parse_path(""), vec![""]);
/// ```
pub fn parse_path(path: &str) -> Path {
    path.split(SEPARATOR).map(str::to_string).collect()
}

/// Join segments into a dotted path.
pub fn format_path(path: &[Segment]) -> String {
    path.join(".")
}

/// Check if a string represents a valid non-negative integer array index.
///
/// # Example
///
/// ```
/// use json_arr_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    // No leading zero unless it's just "0"
    is_integer(index) && (index.len() == 1 || !index.starts_with('0'))
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a segment as a sequence index.
pub fn parse_index(segment: &str) -> Option<usize> {
    if !is_valid_index(segment) {
        return None;
    }
    segment.parse().ok()
}

/// Whether a value can hold children (a sequence or a mapping).
pub fn accessible(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Whether a mapping's keys are exactly `"0"..="n-1"` in order.
pub fn is_list_shaped(map: &Map<String, Value>) -> bool {
    map.keys()
        .enumerate()
        .all(|(i, key)| parse_index(key) == Some(i))
}

/// Re-key a sequence as a mapping of `"0".."n-1"`.
pub fn list_to_map(items: Vec<Value>) -> Map<String, Value> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i.to_string(), v))
        .collect()
}

/// Look up one literal key in a container.
pub fn child<'a>(container: &'a Value, segment: &str) -> Option<&'a Value> {
    match container {
        Value::Array(arr) => arr.get(parse_index(segment)?),
        Value::Object(map) => map.get(segment),
        _ => None,
    }
}

/// Mutable variant of [`child`].
pub fn child_mut<'a>(container: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match container {
        Value::Array(arr) => arr.get_mut(parse_index(segment)?),
        Value::Object(map) => map.get_mut(segment),
        _ => None,
    }
}

/// Remove one literal key from a container, keeping the keys of the rest.
///
/// Only the last element of a sequence is popped. Removing any other index
/// re-keys the sequence as a mapping first, so the remaining elements keep
/// their old indices and the removed index stays absent.
pub fn remove_child(container: &mut Value, segment: &str) -> Option<Value> {
    match container {
        Value::Array(arr) => {
            let idx = parse_index(segment).filter(|&i| i < arr.len())?;
            if idx + 1 == arr.len() {
                return arr.pop();
            }
            trace!(segment, len = arr.len(), "re-keying sequence to leave a gap");
            let mut map = list_to_map(std::mem::take(arr));
            let removed = map.shift_remove(segment);
            *container = Value::Object(map);
            removed
        }
        Value::Object(map) => map.shift_remove(segment),
        _ => None,
    }
}
