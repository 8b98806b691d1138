use json_arr_util::Fallback;
use serde_json::Value;

use crate::util::{child, child_mut, SEPARATOR};

/// Get a value from a container by dotted path.
///
/// A `None` or empty path returns the container itself, unless `""` is an
/// existing key of the container. A path that is itself an
/// existing key wins over reading it as segments, so `{"a.b": 1}` resolves
/// `"a.b"` to `1` even if `a` also exists. Otherwise the path is walked one
/// segment at a time and `None` is returned at the first missing segment or
/// non-container value.
///
/// # Example
///
/// ```
/// use json_arr_path::get;
/// use serde_json::json;
///
/// let doc = json!({"user": {"roles": ["admin", "dev"]}, "a.b": 1});
/// assert_eq!(get(&doc, Some("user.roles.1")), Some(&json!("dev")));
/// assert_eq!(get(&doc, Some("a.b")), Some(&json!(1)));
/// assert_eq!(get(&doc, Some("user.missing")), None);
/// assert_eq!(get(&doc, None), Some(&doc));
/// assert_eq!(get(&doc, Some("")), Some(&doc));
/// ```
pub fn get<'a>(container: &'a Value, path: Option<&str>) -> Option<&'a Value> {
    let Some(path) = path else {
        return Some(container);
    };

    if let Some(value) = child(container, path) {
        return Some(value);
    }
    if path.is_empty() {
        return Some(container);
    }
    if !path.contains(SEPARATOR) {
        return None;
    }

    let mut current = container;
    for segment in path.split(SEPARATOR) {
        current = child(current, segment)?;
    }
    Some(current)
}

/// Get a mutable reference to a value by dotted path.
///
/// Resolution follows the same rules as [`get`].
pub fn get_mut<'a>(container: &'a mut Value, path: Option<&str>) -> Option<&'a mut Value> {
    let Some(path) = path else {
        return Some(container);
    };

    if child(container, path).is_some() {
        return child_mut(container, path);
    }
    if path.is_empty() {
        return Some(container);
    }
    if !path.contains(SEPARATOR) {
        return None;
    }

    let mut current = container;
    for segment in path.split(SEPARATOR) {
        current = child_mut(current, segment)?;
    }
    Some(current)
}

/// Get a cloned value by dotted path, or the fallback on a miss.
///
/// A lazy fallback is only invoked when the path does not resolve.
///
/// # Example
///
/// ```
/// use json_arr_path::get_or;
/// use json_arr_util::Fallback;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}});
/// assert_eq!(get_or(&doc, Some("a.b"), json!(0)), json!(1));
/// assert_eq!(get_or(&doc, Some("a.c"), json!(0)), json!(0));
/// assert_eq!(get_or(&doc, Some("a.c"), Fallback::lazy(|| json!("lazy"))), json!("lazy"));
/// ```
pub fn get_or<'f>(
    container: &Value,
    path: Option<&str>,
    fallback: impl Into<Fallback<'f>>,
) -> Value {
    match get(container, path) {
        Some(value) => value.clone(),
        None => fallback.into().resolve(),
    }
}
