use serde_json::{Map, Value};
use tracing::trace;

use crate::util::{accessible, list_to_map, parse_index, SEPARATOR};

/// Resolve the slot for `segment` in `container`, creating it as `null`.
///
/// A non-container is replaced by an empty mapping. A sequence only accepts
/// an existing index or the next one (append); any other segment turns it
/// into a mapping keyed by its old indices.
fn slot_mut<'a>(container: &'a mut Value, segment: &str) -> &'a mut Value {
    if !accessible(container) {
        trace!(segment, "replacing scalar with an empty mapping");
        *container = Value::Object(Map::new());
    }
    if let Value::Array(arr) = container {
        if !parse_index(segment).is_some_and(|i| i <= arr.len()) {
            trace!(segment, len = arr.len(), "re-keying sequence as a mapping");
            let map = list_to_map(std::mem::take(arr));
            *container = Value::Object(map);
        }
    }

    match container {
        Value::Array(arr) => {
            let idx = parse_index(segment).unwrap_or(arr.len());
            if idx == arr.len() {
                arr.push(Value::Null);
            }
            &mut arr[idx]
        }
        // Only mappings remain here.
        _ => &mut container[segment],
    }
}

/// Set a value in a container by dotted path.
///
/// A `None` path replaces the whole container. Otherwise every segment but
/// the last is descended into, replacing missing or non-container slots with
/// empty mappings; the last segment is assigned `value`, overwriting whatever
/// was there. Returns a reference to the stored value.
///
/// Unlike [`get`](crate::get), the path is always read as segments.
///
/// # Example
///
/// ```
/// use json_arr_path::set;
/// use serde_json::json;
///
/// let mut doc = json!({"a": 1});
/// set(&mut doc, Some("b.c.d"), json!(2));
/// assert_eq!(doc, json!({"a": 1, "b": {"c": {"d": 2}}}));
///
/// set(&mut doc, Some("a.x"), json!(3));
/// assert_eq!(doc["a"], json!({"x": 3}));
/// ```
pub fn set<'a>(container: &'a mut Value, path: Option<&str>, value: Value) -> &'a mut Value {
    let Some(path) = path else {
        *container = value;
        return container;
    };

    let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
    let last = segments.pop().unwrap_or_default();

    let mut current = container;
    for segment in segments {
        let slot = slot_mut(current, segment);
        if !accessible(slot) {
            *slot = Value::Object(Map::new());
        }
        current = slot;
    }

    let slot = slot_mut(current, last);
    *slot = value;
    slot
}
