//! Structural helpers: flatten, dot/undot, collapse, cross join, recursive
//! sort and key rewriting.

use std::cmp::Ordering;

use json_arr_path::{accessible, format_path, is_list_shaped, set, Segment};
use json_arr_util::{convert_case, key_cmp, value_cmp, KeyCase};
use serde_json::{Map, Value};
use tracing::debug;

use crate::entries::{collect_entries, entries, len, named_key, renumber, values};

/// Flatten nested containers into one sequence of values.
///
/// `depth` limits how many levels are unwrapped; `None` means no limit and
/// `Some(1)` unwraps a single level, keeping the values found there as they
/// are. `Some(0)` behaves like `Some(1)`.
///
/// # Example
///
/// ```
/// use json_arr::flatten;
/// use serde_json::json;
///
/// let nested = json!(["a", ["b", ["c", {"d": "e"}]]]);
/// assert_eq!(flatten(&nested, None), vec![json!("a"), json!("b"), json!("c"), json!("e")]);
/// assert_eq!(flatten(&nested, Some(1)), vec![json!("a"), json!("b"), json!(["c", {"d": "e"}])]);
/// ```
pub fn flatten(container: &Value, depth: Option<usize>) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_into(container, depth.map(|d| d.max(1)), &mut out);
    out
}

fn flatten_into(container: &Value, depth: Option<usize>, out: &mut Vec<Value>) {
    for item in values(container) {
        if !accessible(item) {
            out.push(item.clone());
            continue;
        }
        match depth {
            Some(1) => out.extend(values(item).into_iter().cloned()),
            _ => flatten_into(item, depth.map(|d| d - 1), out),
        }
    }
}

/// Flatten a container into a single-level mapping of dotted keys.
///
/// `prefix` is prepended verbatim to every key. Empty nested containers are
/// kept as leaf values.
///
/// # Example
///
/// ```
/// use json_arr::dot;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1, "c": [true]}, "d": []});
/// let flat = dot(&doc, "");
/// assert_eq!(serde_json::Value::Object(flat), json!({"a.b": 1, "a.c.0": true, "d": []}));
/// ```
pub fn dot(container: &Value, prefix: &str) -> Map<String, Value> {
    let mut out = Map::new();
    dot_into(container, prefix, &mut Vec::new(), &mut out);
    out
}

fn dot_into(
    container: &Value,
    prefix: &str,
    trail: &mut Vec<Segment>,
    out: &mut Map<String, Value>,
) {
    for (key, value) in entries(container) {
        trail.push(key.as_segment().into_owned());
        if accessible(value) && len(value) > 0 {
            dot_into(value, prefix, trail, out);
        } else {
            out.insert(format!("{prefix}{}", format_path(trail)), value.clone());
        }
        trail.pop();
    }
}

/// Expand a mapping of dotted keys into a nested container.
///
/// The inverse of [`dot`]: each entry is written with
/// [`set`](json_arr_path::set), then every mapping keyed `"0".."n-1"` is
/// turned back into a sequence.
///
/// # Example
///
/// ```
/// use json_arr::{dot, undot};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [1, 2]}, "c": "d"});
/// assert_eq!(undot(&dot(&doc, "")), doc);
/// ```
pub fn undot(flat: &Map<String, Value>) -> Value {
    let mut out = Value::Object(Map::new());
    for (path, value) in flat {
        set(&mut out, Some(path.as_str()), value.clone());
    }
    restore_lists(out)
}

fn restore_lists(value: Value) -> Value {
    match value {
        Value::Array(arr) => Value::Array(arr.into_iter().map(restore_lists).collect()),
        Value::Object(map) => {
            let list = !map.is_empty() && is_list_shaped(&map);
            let children = map.into_iter().map(|(k, v)| (k, restore_lists(v)));
            if list {
                Value::Array(children.map(|(_, v)| v).collect())
            } else {
                Value::Object(children.collect())
            }
        }
        other => other,
    }
}

/// Merge containers at the top level.
///
/// Named keys overwrite earlier entries of the same name; positional entries
/// are renumbered and appended. Non-container arguments are skipped. The
/// result is a sequence when no named keys are left.
///
/// # Example
///
/// ```
/// use json_arr::collapse;
/// use serde_json::json;
///
/// assert_eq!(collapse(&[json!([1, 2]), json!([3]), json!("skip")]), json!([1, 2, 3]));
/// assert_eq!(
///     collapse(&[json!({"a": 1, "b": 2}), json!({"a": 3}), json!([4])]),
///     json!({"a": 3, "b": 2, "0": 4})
/// );
/// ```
pub fn collapse(containers: &[Value]) -> Value {
    let mut merged = Vec::new();
    for container in containers {
        if !accessible(container) {
            debug!(value = %container, "collapse skipped a non-container");
            continue;
        }
        for (key, value) in entries(container) {
            merged.push((named_key(&key), value.clone()));
        }
    }
    collect_entries(renumber(merged), true)
}

/// Cartesian product of the given sequences, last input varying fastest.
///
/// No inputs yield one empty tuple; any empty input yields no tuples.
///
/// # Example
///
/// ```
/// use json_arr::cross_join;
/// use serde_json::json;
///
/// let product = cross_join(&[json!([1, 2]), json!(["a", "b"])]);
/// assert_eq!(product, vec![
///     vec![json!(1), json!("a")],
///     vec![json!(1), json!("b")],
///     vec![json!(2), json!("a")],
///     vec![json!(2), json!("b")],
/// ]);
/// ```
pub fn cross_join(sequences: &[Value]) -> Vec<Vec<Value>> {
    let mut results: Vec<Vec<Value>> = vec![Vec::new()];
    for sequence in sequences {
        let items = values(sequence);
        let mut next = Vec::with_capacity(results.len() * items.len());
        for product in &results {
            for item in &items {
                let mut tuple = product.clone();
                tuple.push((*item).clone());
                next.push(tuple);
            }
        }
        results = next;
    }
    results
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Sort a container and everything nested in it.
///
/// Sequences (and mappings keyed `"0".."n-1"`) are sorted by value and
/// renumbered; other mappings are sorted by key. See
/// [`value_cmp`](json_arr_util::value_cmp) and [`key_cmp`](json_arr_util::key_cmp)
/// for the orderings used.
///
/// # Example
///
/// ```
/// use json_arr::sort_recursive;
/// use serde_json::json;
///
/// let doc = json!({"b": [3, 1, 2], "a": {"y": 1, "x": 2}});
/// assert_eq!(
///     sort_recursive(&doc, false),
///     json!({"a": {"x": 2, "y": 1}, "b": [1, 2, 3]})
/// );
/// ```
pub fn sort_recursive(container: &Value, descending: bool) -> Value {
    match container {
        Value::Array(arr) => {
            let items = arr.iter().map(|v| sort_recursive(v, descending)).collect();
            sort_values(items, descending)
        }
        Value::Object(map) if !map.is_empty() && is_list_shaped(map) => {
            let items = map.values().map(|v| sort_recursive(v, descending)).collect();
            sort_values(items, descending)
        }
        Value::Object(map) => {
            let mut pairs: Vec<(String, Value)> = map
                .iter()
                .map(|(k, v)| (k.clone(), sort_recursive(v, descending)))
                .collect();
            pairs.sort_by(|(a, _), (b, _)| directed(key_cmp(a, b), descending));
            Value::Object(pairs.into_iter().collect())
        }
        other => other.clone(),
    }
}

fn sort_values(mut items: Vec<Value>, descending: bool) -> Value {
    items.sort_by(|a, b| directed(value_cmp(a, b), descending));
    Value::Array(items)
}

/// [`sort_recursive`] in descending order.
pub fn sort_recursive_desc(container: &Value) -> Value {
    sort_recursive(container, true)
}

/// Split a container into its keys and its values.
///
/// Sequence positions come back as numbers, mapping keys as strings.
pub fn divide(container: &Value) -> (Vec<Value>, Vec<Value>) {
    entries(container)
        .into_iter()
        .map(|(key, value)| (key.to_value(), value.clone()))
        .unzip()
}

/// Prefix every top-level key.
///
/// # Example
///
/// ```
/// use json_arr::prepend_keys_with;
/// use serde_json::json;
///
/// assert_eq!(prepend_keys_with(&json!({"a": 1}), "x_"), json!({"x_a": 1}));
/// assert_eq!(prepend_keys_with(&json!(["v"]), "k"), json!({"k0": "v"}));
/// ```
pub fn prepend_keys_with(container: &Value, prefix: &str) -> Value {
    let pairs = entries(container)
        .into_iter()
        .map(|(key, value)| (format!("{prefix}{key}"), value.clone()));
    collect_entries(pairs, !container.is_object())
}

/// Convert mapping keys to another case.
///
/// Positional keys are left alone. With `deep`, nested containers are
/// converted too. Keys that collide after conversion keep the later value.
///
/// # Example
///
/// ```
/// use json_arr::change_key_case;
/// use json_arr_util::KeyCase;
/// use serde_json::json;
///
/// let doc = json!({"firstName": "Ada", "homeAddress": {"zipCode": "1"}});
/// assert_eq!(
///     change_key_case(&doc, KeyCase::Snake, true),
///     json!({"first_name": "Ada", "home_address": {"zip_code": "1"}})
/// );
/// ```
pub fn change_key_case(container: &Value, case: KeyCase, deep: bool) -> Value {
    let convert_child = |value: &Value| {
        if deep {
            change_key_case(value, case, true)
        } else {
            value.clone()
        }
    };
    match container {
        Value::Array(arr) => Value::Array(arr.iter().map(convert_child).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let key = match named_key(&key.as_str().into()) {
                        Some(name) => convert_case(&name, case),
                        None => key.clone(),
                    };
                    (key, convert_child(value))
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_plain_values_unchanged() {
        let flat = json!([1, "a", null, true]);
        assert_eq!(flatten(&flat, None), vec![json!(1), json!("a"), json!(null), json!(true)]);
    }

    #[test]
    fn test_flatten_mapping_values() {
        let doc = json!({"name": "Joe", "langs": ["Rust", "Ruby"]});
        assert_eq!(flatten(&doc, None), vec![json!("Joe"), json!("Rust"), json!("Ruby")]);
    }

    #[test]
    fn test_flatten_depth() {
        let doc = json!([[1, [2, [3]]]]);
        assert_eq!(flatten(&doc, Some(2)), vec![json!(1), json!(2), json!([3])]);
        assert_eq!(flatten(&doc, Some(0)), flatten(&doc, Some(1)));
        assert!(flatten(&json!("scalar"), None).is_empty());
    }

    #[test]
    fn test_dot_with_prefix() {
        let flat = dot(&json!({"a": {"b": 1}}), "root.");
        assert_eq!(Value::Object(flat), json!({"root.a.b": 1}));
    }

    #[test]
    fn test_dot_joins_deep_keys() {
        let doc = json!({"a": [{"b": 1}, 2], "c": {"d": {"e": null}}, "f": 3});
        let flat = dot(&doc, "p_");
        assert_eq!(
            Value::Object(flat),
            json!({"p_a.0.b": 1, "p_a.1": 2, "p_c.d.e": null, "p_f": 3})
        );
    }

    #[test]
    fn test_dot_keeps_empty_containers() {
        let flat = dot(&json!({"a": {}, "b": [], "c": null}), "");
        assert_eq!(Value::Object(flat), json!({"a": {}, "b": [], "c": null}));
    }

    #[test]
    fn test_undot_builds_nested() {
        let flat = json!({"user.name": "Ada", "user.langs.0": "en", "user.langs.1": "fr"});
        assert_eq!(
            undot(flat.as_object().unwrap()),
            json!({"user": {"name": "Ada", "langs": ["en", "fr"]}})
        );
    }

    #[test]
    fn test_undot_sparse_keys_stay_mapping() {
        let flat = json!({"a.0": 1, "a.2": 3});
        assert_eq!(undot(flat.as_object().unwrap()), json!({"a": {"0": 1, "2": 3}}));
    }

    #[test]
    fn test_collapse_empty() {
        assert_eq!(collapse(&[]), json!([]));
        assert_eq!(collapse(&[json!(1), json!(null)]), json!([]));
    }

    #[test]
    fn test_cross_join_edges() {
        assert_eq!(cross_join(&[]), vec![Vec::<Value>::new()]);
        assert!(cross_join(&[json!([1, 2]), json!([])]).is_empty());
        assert_eq!(
            cross_join(&[json!([1]), json!({"a": "x", "b": "y"})]),
            vec![vec![json!(1), json!("x")], vec![json!(1), json!("y")]]
        );
    }

    #[test]
    fn test_cross_join_three_inputs() {
        let product = cross_join(&[json!([1, 2]), json!(["a"]), json!([true, false])]);
        assert_eq!(product.len(), 4);
        assert_eq!(product[1], vec![json!(1), json!("a"), json!(false)]);
        assert_eq!(product[2], vec![json!(2), json!("a"), json!(true)]);
    }

    #[test]
    fn test_sort_recursive_desc() {
        let doc = json!({"a": [1, 3, 2], "c": {"k": 1}, "b": null});
        assert_eq!(
            sort_recursive_desc(&doc),
            json!({"c": {"k": 1}, "b": null, "a": [3, 2, 1]})
        );
    }

    #[test]
    fn test_sort_numeric_keys() {
        let doc = json!({"10": "x", "9": "y", "a": "z"});
        let sorted = sort_recursive(&doc, false);
        let keys: Vec<_> = sorted.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["9", "10", "a"]);
    }

    #[test]
    fn test_sort_mixed_values() {
        let doc = json!(["b", 2, null, "a", 1, true]);
        assert_eq!(sort_recursive(&doc, false), json!([null, true, 1, 2, "a", "b"]));
    }

    #[test]
    fn test_divide() {
        let (keys, vals) = divide(&json!({"a": 1, "b": 2}));
        assert_eq!(keys, vec![json!("a"), json!("b")]);
        assert_eq!(vals, vec![json!(1), json!(2)]);

        let (keys, _) = divide(&json!(["x", "y"]));
        assert_eq!(keys, vec![json!(0), json!(1)]);
    }

    #[test]
    fn test_change_key_case_shallow() {
        let doc = json!({"userId": {"innerKey": 1}, "0": "pos"});
        assert_eq!(
            change_key_case(&doc, KeyCase::Kebab, false),
            json!({"user-id": {"innerKey": 1}, "0": "pos"})
        );
    }

    #[test]
    fn test_change_key_case_through_sequences() {
        let doc = json!([{"first_name": "a"}, {"first_name": "b"}]);
        assert_eq!(
            change_key_case(&doc, KeyCase::Camel, true),
            json!([{"firstName": "a"}, {"firstName": "b"}])
        );
    }
}
