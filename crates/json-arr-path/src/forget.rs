use serde_json::Value;
use tracing::trace;

use crate::has::exists;
use crate::types::PathSet;
use crate::util::{accessible, child, child_mut, remove_child, SEPARATOR};

/// Remove one or many values from a container by dotted path.
///
/// For each path, an existing literal top-level key is removed directly.
/// Otherwise the path is walked through existing containers and the last
/// segment is removed from its parent. Paths with a missing or non-container
/// segment along the way are skipped. Removing the last element of a sequence
/// pops it; removing any other element turns the sequence into a mapping that
/// keeps the remaining indices, so the removed path stays absent.
///
/// # Example
///
/// ```
/// use json_arr_path::forget;
/// use serde_json::json;
///
/// let mut doc = json!({"a": {"b": 1, "c": 2}, "x.y": 3, "z": 4});
/// forget(&mut doc, &["a.b", "x.y"]);
/// assert_eq!(doc, json!({"a": {"c": 2}, "z": 4}));
///
/// forget(&mut doc, "missing.path");
/// assert_eq!(doc, json!({"a": {"c": 2}, "z": 4}));
/// ```
pub fn forget<P: PathSet + ?Sized>(container: &mut Value, paths: &P) {
    'paths: for path in paths.paths() {
        if exists(container, path) {
            remove_child(container, path);
            continue;
        }

        let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
        let last = segments.pop().unwrap_or_default();

        let mut current = &mut *container;
        for segment in segments {
            if !child(current, segment).is_some_and(accessible) {
                trace!(path, segment, "forget skipped path");
                continue 'paths;
            }
            current = match child_mut(current, segment) {
                Some(next) => next,
                None => continue 'paths,
            };
        }
        remove_child(current, last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::has::has;
    use serde_json::json;

    #[test]
    fn test_forget_single_top_level() {
        let mut doc = json!({"a": 1, "b": 2});
        forget(&mut doc, "a");
        assert_eq!(doc, json!({"b": 2}));
    }

    #[test]
    fn test_forget_nested() {
        let mut doc = json!({"products": {"desk": {"price": 100, "name": "Desk"}}});
        forget(&mut doc, "products.desk.price");
        assert_eq!(doc, json!({"products": {"desk": {"name": "Desk"}}}));
    }

    #[test]
    fn test_forget_literal_before_segments() {
        let mut doc = json!({"a.b": 1, "a": {"b": 2}});
        forget(&mut doc, "a.b");
        assert_eq!(doc, json!({"a": {"b": 2}}));
        forget(&mut doc, "a.b");
        assert_eq!(doc, json!({"a": {}}));
    }

    #[test]
    fn test_forget_through_scalar_is_skipped() {
        let mut doc = json!({"a": "text", "b": null});
        forget(&mut doc, &["a.c", "b.c", "q.r.s"]);
        assert_eq!(doc, json!({"a": "text", "b": null}));
    }

    #[test]
    fn test_forget_sequence_element() {
        let mut doc = json!({"list": ["a", "b", "c"]});
        forget(&mut doc, "list.1");
        assert_eq!(doc, json!({"list": {"0": "a", "2": "c"}}));
        assert!(!has(&doc, "list.1"));

        let mut doc = json!([1, 2, 3]);
        forget(&mut doc, "0");
        assert_eq!(doc, json!({"1": 2, "2": 3}));
        assert!(!has(&doc, "0"));

        let mut doc = json!({"list": ["a", "b"]});
        forget(&mut doc, "list.1");
        assert_eq!(doc, json!({"list": ["a"]}));
    }

    #[test]
    fn test_forget_empty_set_is_noop() {
        let mut doc = json!({"a": 1});
        let none: Vec<String> = Vec::new();
        forget(&mut doc, &none);
        assert_eq!(doc, json!({"a": 1}));
    }
}
