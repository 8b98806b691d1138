//! Container plumbing shared by the helpers: iterate keyed entries and
//! rebuild containers from them.

use json_arr_path::{accessible, is_list_shaped, is_valid_index, Key};
use serde_json::{Map, Value};

/// Keyed entries of a container, in order. Scalars have none.
pub fn entries(container: &Value) -> Vec<(Key, &Value)> {
    match container {
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, v)| (Key::Index(i), v))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (Key::Name(k.clone()), v))
            .collect(),
        _ => Vec::new(),
    }
}

/// Values of a container, in order. Scalars have none.
pub fn values(container: &Value) -> Vec<&Value> {
    match container {
        Value::Array(arr) => arr.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => Vec::new(),
    }
}

/// Number of entries in a container; zero for scalars.
pub fn len(container: &Value) -> usize {
    match container {
        Value::Array(arr) => arr.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

/// Build a container from keyed entries.
///
/// A non-empty result whose keys are exactly `"0".."n-1"` becomes a
/// sequence; anything else stays a mapping. An empty result is `[]` when
/// `list_when_empty` is set and `{}` otherwise. Later duplicates overwrite
/// earlier ones in place.
pub fn collect_entries<I>(entries: I, list_when_empty: bool) -> Value
where
    I: IntoIterator<Item = (String, Value)>,
{
    let map: Map<String, Value> = entries.into_iter().collect();
    if map.is_empty() {
        return if list_when_empty {
            Value::Array(Vec::new())
        } else {
            Value::Object(map)
        };
    }
    if is_list_shaped(&map) {
        return Value::Array(map.into_iter().map(|(_, v)| v).collect());
    }
    Value::Object(map)
}

/// Assign sequential integer keys to unnamed entries.
///
/// Named entries keep their key and overwrite earlier entries of the same
/// name; unnamed entries are numbered `0, 1, 2...` in order of appearance.
pub fn renumber(entries: Vec<(Option<String>, Value)>) -> Vec<(String, Value)> {
    let mut next = 0usize;
    entries
        .into_iter()
        .map(|(key, value)| match key {
            Some(name) => (name, value),
            None => {
                let key = next.to_string();
                next += 1;
                (key, value)
            }
        })
        .collect()
}

/// Split a key into "named" or "positional" for renumbering.
///
/// Sequence positions and canonical integer names are positional.
pub fn named_key(key: &Key) -> Option<String> {
    match key {
        Key::Index(_) => None,
        Key::Name(name) if is_valid_index(name) => None,
        Key::Name(name) => Some(name.clone()),
    }
}

/// Normalize a bare value into a container.
///
/// `null` becomes `[]`, a scalar becomes a one-element sequence, and
/// containers pass through unchanged.
///
/// # Example
///
/// ```
/// use json_arr::wrap;
/// use serde_json::json;
///
/// assert_eq!(wrap(json!(null)), json!([]));
/// assert_eq!(wrap(json!("a")), json!(["a"]));
/// assert_eq!(wrap(json!({"a": 1})), json!({"a": 1}));
/// ```
pub fn wrap(value: Value) -> Value {
    match value {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(_) | Value::Object(_) => value,
        scalar => Value::Array(vec![scalar]),
    }
}

/// Whether a value is a sequence, or a mapping keyed `"0".."n-1"` in order.
pub fn is_list(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(map) => is_list_shaped(map),
        _ => false,
    }
}

/// Whether a value is a mapping with at least one non-positional key.
pub fn is_assoc(value: &Value) -> bool {
    accessible(value) && !is_list(value)
}
