//! Selection and projection: first/last, pluck, only/except, filter, take,
//! map, and the small mutating helpers built on dotted paths.

use json_arr_path::{exists, forget, get, get_or, set, Key, PathSet};
use json_arr_util::{to_plain_string, Fallback};
use serde_json::{Map, Value};

use crate::entries::{collect_entries, entries, named_key, renumber, values};

/// Resolve a lookup result against a fallback.
///
/// # Example
///
/// ```
/// use json_arr::{first_where, value_or};
/// use serde_json::json;
///
/// let doc = json!([1, 5, 10]);
/// assert_eq!(value_or(first_where(&doc, |v, _| v.as_i64() > Some(3)), json!(0)), json!(5));
/// assert_eq!(value_or(first_where(&doc, |v, _| v.as_i64() > Some(30)), json!(0)), json!(0));
/// ```
pub fn value_or<'f>(found: Option<&Value>, fallback: impl Into<Fallback<'f>>) -> Value {
    match found {
        Some(value) => value.clone(),
        None => fallback.into().resolve(),
    }
}

/// The first value of a container.
pub fn first(container: &Value) -> Option<&Value> {
    values(container).into_iter().next()
}

/// The first value for which `predicate(value, key)` holds.
pub fn first_where<F>(container: &Value, mut predicate: F) -> Option<&Value>
where
    F: FnMut(&Value, &Key) -> bool,
{
    entries(container)
        .into_iter()
        .find(|(key, value)| predicate(*value, key))
        .map(|(_, value)| value)
}

/// The last value of a container.
pub fn last(container: &Value) -> Option<&Value> {
    values(container).into_iter().next_back()
}

/// The last value for which `predicate(value, key)` holds.
pub fn last_where<F>(container: &Value, mut predicate: F) -> Option<&Value>
where
    F: FnMut(&Value, &Key) -> bool,
{
    entries(container)
        .into_iter()
        .rev()
        .find(|(key, value)| predicate(*value, key))
        .map(|(_, value)| value)
}

/// Project each element onto the value at `value_path`.
///
/// Without `key_path` the result is a sequence. With it, the result is a
/// mapping keyed by the plain string form of each element's `key_path`
/// value; later elements win on duplicate keys. Unresolved values are `null`.
///
/// # Example
///
/// ```
/// use json_arr::pluck;
/// use serde_json::json;
///
/// let users = json!([
///     {"id": 7, "profile": {"name": "Ada"}},
///     {"id": 9, "profile": {"name": "Linus"}},
/// ]);
/// assert_eq!(pluck(&users, "profile.name", None), json!(["Ada", "Linus"]));
/// assert_eq!(pluck(&users, "profile.name", Some("id")), json!({"7": "Ada", "9": "Linus"}));
/// ```
pub fn pluck(container: &Value, value_path: &str, key_path: Option<&str>) -> Value {
    let items = values(container);
    let resolve = |item: &Value| get_or(item, Some(value_path), Value::Null);

    match key_path {
        None => Value::Array(items.into_iter().map(resolve).collect()),
        Some(key_path) => {
            let mut out = Map::new();
            for item in items {
                let key = get(item, Some(key_path))
                    .map(to_plain_string)
                    .unwrap_or_default();
                out.insert(key, resolve(item));
            }
            Value::Object(out)
        }
    }
}

/// Keep only the given top-level keys, in container order.
///
/// # Example
///
/// ```
/// use json_arr::only;
/// use serde_json::json;
///
/// let doc = json!({"name": "Desk", "price": 100, "orders": 10});
/// assert_eq!(only(&doc, &["name", "price"]), json!({"name": "Desk", "price": 100}));
/// ```
pub fn only<P: PathSet + ?Sized>(container: &Value, keys: &P) -> Value {
    let keep = keys.paths();
    let pairs = entries(container)
        .into_iter()
        .filter(|(key, _)| keep.iter().any(|k| key.as_segment() == *k))
        .map(|(key, value)| (key.to_string(), value.clone()));
    collect_entries(pairs, !container.is_object())
}

/// Drop the given dotted paths.
///
/// # Example
///
/// ```
/// use json_arr::except;
/// use serde_json::json;
///
/// let doc = json!({"name": "Desk", "price": {"net": 80, "gross": 100}});
/// assert_eq!(except(&doc, "price.net"), json!({"name": "Desk", "price": {"gross": 100}}));
/// ```
pub fn except<P: PathSet + ?Sized>(container: &Value, keys: &P) -> Value {
    let mut out = container.clone();
    forget(&mut out, keys);
    out
}

/// Project each element onto the given keys.
///
/// Keys an element lacks are left out of its projection.
///
/// # Example
///
/// ```
/// use json_arr::select;
/// use serde_json::json;
///
/// let rows = json!([{"a": 1, "b": 2, "c": 3}, {"a": 4, "c": 6}]);
/// assert_eq!(select(&rows, &["a", "b"]), json!([{"a": 1, "b": 2}, {"a": 4}]));
/// ```
pub fn select<P: PathSet + ?Sized>(container: &Value, keys: &P) -> Value {
    let keys = keys.paths();
    map(container, |item, _| {
        let picked: Map<String, Value> = keys
            .iter()
            .filter(|key| exists(item, **key))
            .filter_map(|key| get(item, Some(*key)).map(|v| (key.to_string(), v.clone())))
            .collect();
        Value::Object(picked)
    })
}

/// Keep the entries for which `predicate(value, key)` holds.
///
/// Original keys are preserved, so filtering a sequence can leave a mapping
/// with gaps in its positions.
///
/// # Example
///
/// ```
/// use json_arr::filter;
/// use serde_json::json;
///
/// let doc = json!([100, "200", 300, "400"]);
/// assert_eq!(filter(&doc, |v, _| v.is_string()), json!({"1": "200", "3": "400"}));
/// ```
pub fn filter<F>(container: &Value, mut predicate: F) -> Value
where
    F: FnMut(&Value, &Key) -> bool,
{
    let pairs = entries(container)
        .into_iter()
        .filter(|(key, value)| predicate(*value, key))
        .map(|(key, value)| (key.to_string(), value.clone()));
    collect_entries(pairs, !container.is_object())
}

/// Drop `null` entries, preserving keys.
pub fn where_not_null(container: &Value) -> Value {
    filter(container, |value, _| !value.is_null())
}

/// Take a prefix (`limit >= 0`) or a suffix (`limit < 0`) of a container.
///
/// # Example
///
/// ```
/// use json_arr::take;
/// use serde_json::json;
///
/// let doc = json!([1, 2, 3, 4]);
/// assert_eq!(take(&doc, 2), json!([1, 2]));
/// assert_eq!(take(&doc, -2), json!([3, 4]));
/// ```
pub fn take(container: &Value, limit: i64) -> Value {
    let all = entries(container);
    let total = all.len();
    let amount = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
    let (start, end) = if limit < 0 {
        (total.saturating_sub(amount), total)
    } else {
        (0, amount.min(total))
    };

    let slice = all.into_iter().skip(start).take(end - start);
    if container.is_object() {
        let map: Map<String, Value> = slice
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        Value::Object(map)
    } else {
        Value::Array(slice.map(|(_, value)| value.clone()).collect())
    }
}

/// Map every entry, keeping keys.
///
/// Non-containers map to an empty sequence.
pub fn map<F>(container: &Value, mut f: F) -> Value
where
    F: FnMut(&Value, &Key) -> Value,
{
    match container {
        Value::Array(arr) => Value::Array(
            arr.iter()
                .enumerate()
                .map(|(i, value)| f(value, &Key::Index(i)))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, value)| (k.clone(), f(value, &Key::Name(k.clone()))))
                .collect(),
        ),
        _ => Value::Array(Vec::new()),
    }
}

/// Map every entry to zero or more new key/value pairs and merge them.
///
/// # Example
///
/// ```
/// use json_arr::map_with_keys;
/// use serde_json::json;
///
/// let users = json!([{"id": 1, "email": "a@x"}, {"id": 2, "email": "b@x"}]);
/// let by_email = map_with_keys(&users, |user, _| {
///     [(user["email"].as_str().unwrap_or_default().to_string(), user["id"].clone())]
/// });
/// assert_eq!(by_email, json!({"a@x": 1, "b@x": 2}));
/// ```
pub fn map_with_keys<F, I>(container: &Value, mut f: F) -> Value
where
    F: FnMut(&Value, &Key) -> I,
    I: IntoIterator<Item = (String, Value)>,
{
    let mut out = Vec::new();
    for (key, value) in entries(container) {
        out.extend(f(value, &key));
    }
    collect_entries(out, !container.is_object())
}

/// Set `value` at `path` unless something non-null is already there.
///
/// # Example
///
/// ```
/// use json_arr::add;
/// use serde_json::json;
///
/// let mut doc = json!({"name": "Desk", "price": null});
/// add(&mut doc, "name", json!("Chair"));
/// add(&mut doc, "price", json!(100));
/// assert_eq!(doc, json!({"name": "Desk", "price": 100}));
/// ```
pub fn add(container: &mut Value, path: &str, value: Value) {
    if get(container, Some(path)).map_or(true, Value::is_null) {
        set(container, Some(path), value);
    }
}

/// Remove a value by dotted path and return it, or the fallback on a miss.
///
/// # Example
///
/// ```
/// use json_arr::pull;
/// use serde_json::json;
///
/// let mut doc = json!({"name": "Desk", "price": 100});
/// assert_eq!(pull(&mut doc, "name", json!(null)), json!("Desk"));
/// assert_eq!(doc, json!({"price": 100}));
/// ```
pub fn pull<'f>(container: &mut Value, path: &str, fallback: impl Into<Fallback<'f>>) -> Value {
    let value = get_or(container, Some(path), fallback);
    forget(container, path);
    value
}

/// Put a value at the front of a container.
///
/// Without a key, positional keys are renumbered and the value takes
/// position `0`. With a key, the value is stored under it and any existing
/// entry of that key is dropped.
///
/// # Example
///
/// ```
/// use json_arr::prepend;
/// use serde_json::json;
///
/// assert_eq!(prepend(&json!(["b", "c"]), json!("a"), None), json!(["a", "b", "c"]));
/// assert_eq!(
///     prepend(&json!({"price": 100}), json!("Desk"), Some("name")),
///     json!({"name": "Desk", "price": 100})
/// );
/// ```
pub fn prepend(container: &Value, value: Value, key: Option<&str>) -> Value {
    let existing = entries(container);
    let pairs = match key {
        None => {
            let mut keyed = vec![(None, value)];
            keyed.extend(
                existing
                    .into_iter()
                    .map(|(k, v)| (named_key(&k), v.clone())),
            );
            renumber(keyed)
        }
        Some(key) => {
            let mut keyed = vec![(key.to_string(), value)];
            keyed.extend(
                existing
                    .into_iter()
                    .filter(|(k, _)| k.as_segment() != key)
                    .map(|(k, v)| (k.to_string(), v.clone())),
            );
            keyed
        }
    };
    collect_entries(pairs, !container.is_object())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_last_plain() {
        let doc = json!({"a": 1, "b": 2, "c": 3});
        assert_eq!(first(&doc), Some(&json!(1)));
        assert_eq!(last(&doc), Some(&json!(3)));
        assert_eq!(first(&json!([])), None);
        assert_eq!(last(&json!("x")), None);
    }

    #[test]
    fn test_first_last_where_sees_keys() {
        let doc = json!({"a": 1, "b": 2, "c": 3});
        let is_not_a = |_: &Value, key: &Key| key.as_segment() != "a";
        assert_eq!(first_where(&doc, is_not_a), Some(&json!(2)));
        assert_eq!(last_where(&doc, |v, _| v.as_i64() < Some(3)), Some(&json!(2)));
    }

    #[test]
    fn test_first_with_lazy_default() {
        let doc = json!([]);
        let got = value_or(first(&doc), Fallback::lazy(|| json!("none")));
        assert_eq!(got, json!("none"));
    }

    #[test]
    fn test_pluck_missing_is_null() {
        let rows = json!([{"a": {"b": 1}}, {"a": {}}, "scalar"]);
        assert_eq!(pluck(&rows, "a.b", None), json!([1, null, null]));
    }

    #[test]
    fn test_pluck_keyed_duplicates() {
        let rows = json!([
            {"brand": "x", "name": "first"},
            {"brand": "x", "name": "second"},
            {"name": "unbranded"},
        ]);
        assert_eq!(
            pluck(&rows, "name", Some("brand")),
            json!({"x": "second", "": "unbranded"})
        );
    }

    #[test]
    fn test_only_on_sequence() {
        assert_eq!(only(&json!(["a", "b", "c"]), &["0", "1"]), json!(["a", "b"]));
        assert_eq!(only(&json!(["a", "b", "c"]), &["2"]), json!({"2": "c"}));
        assert_eq!(only(&json!(["a"]), "5"), json!([]));
    }

    #[test]
    fn test_except_many() {
        let doc = json!({"a": 1, "b": {"c": 2, "d": 3}});
        assert_eq!(except(&doc, &["a", "b.c"]), json!({"b": {"d": 3}}));
    }

    #[test]
    fn test_except_sequence_keeps_indices() {
        let doc = json!(["a", "b", "c"]);
        assert_eq!(except(&doc, &["0", "1"]), json!({"2": "c"}));
        assert_eq!(except(&doc, "2"), json!(["a", "b"]));
    }

    #[test]
    fn test_where_not_null_keeps_keys() {
        assert_eq!(where_not_null(&json!([1, null, 3])), json!({"0": 1, "2": 3}));
        assert_eq!(where_not_null(&json!([1, 2, null])), json!([1, 2]));
        assert_eq!(where_not_null(&json!({"a": null})), json!({}));
    }

    #[test]
    fn test_filter_by_key() {
        let doc = json!({"keep_a": 1, "drop": 2, "keep_b": 3});
        let kept = filter(&doc, |_, key| key.as_segment().starts_with("keep"));
        assert_eq!(kept, json!({"keep_a": 1, "keep_b": 3}));
    }

    #[test]
    fn test_take_edges() {
        let doc = json!([1, 2, 3]);
        assert_eq!(take(&doc, 0), json!([]));
        assert_eq!(take(&doc, 10), json!([1, 2, 3]));
        assert_eq!(take(&doc, -10), json!([1, 2, 3]));
        assert_eq!(take(&doc, i64::MIN), json!([1, 2, 3]));
        assert_eq!(take(&json!({"a": 1, "b": 2}), -1), json!({"b": 2}));
    }

    #[test]
    fn test_map_keeps_keys() {
        let doc = json!({"a": 1, "b": 2});
        let doubled = map(&doc, |v, _| json!(v.as_i64().unwrap_or(0) * 2));
        assert_eq!(doubled, json!({"a": 2, "b": 4}));

        let indexed = map(&json!(["x", "y"]), |_, key| key.to_value());
        assert_eq!(indexed, json!([0, 1]));
    }

    #[test]
    fn test_add_creates_nested() {
        let mut doc = json!({});
        add(&mut doc, "a.b", json!(1));
        add(&mut doc, "a.b", json!(2));
        assert_eq!(doc, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_pull_missing_uses_fallback() {
        let mut doc = json!({"a": 1});
        assert_eq!(pull(&mut doc, "b.c", json!("d")), json!("d"));
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn test_pull_sequence_element_leaves_gap() {
        let mut doc = json!({"queue": ["x", "y", "z"]});
        assert_eq!(pull(&mut doc, "queue.0", Value::Null), json!("x"));
        assert_eq!(doc, json!({"queue": {"1": "y", "2": "z"}}));
        assert_eq!(pull(&mut doc, "queue.0", json!("gone")), json!("gone"));
    }

    #[test]
    fn test_prepend_renumbers_positional_keys() {
        let doc = json!({"5": "five", "name": "n"});
        assert_eq!(
            prepend(&doc, json!("zero"), None),
            json!({"0": "zero", "1": "five", "name": "n"})
        );
    }

    #[test]
    fn test_prepend_replaces_existing_key() {
        let doc = json!({"a": 1, "b": 2});
        let out = prepend(&doc, json!(0), Some("b"));
        let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(out["b"], json!(0));
    }
}
