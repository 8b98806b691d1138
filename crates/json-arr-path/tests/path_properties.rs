use json_arr_path::{forget, get, get_or, has, set};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,3}|[0-3]", 1..4).prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn set_then_get_returns_value(mut doc in document(), path in path(), value in leaf()) {
        set(&mut doc, Some(path.as_str()), value.clone());
        prop_assert_eq!(get(&doc, Some(path.as_str())), Some(&value));
    }

    #[test]
    fn missing_path_returns_default(doc in document(), path in path()) {
        prop_assume!(get(&doc, Some(path.as_str())).is_none());
        prop_assert_eq!(get_or(&doc, Some(path.as_str()), json!("default")), json!("default"));
    }

    #[test]
    fn forget_removes_path(
        entries in prop::collection::btree_map("[a-z]{1,3}", document(), 1..5),
        pick in any::<prop::sample::Index>(),
        nested in any::<bool>(),
        sequence in any::<bool>(),
    ) {
        let (container, key) = if sequence {
            let items: Vec<Value> = entries.into_values().collect();
            let idx = pick.index(items.len());
            (Value::Array(items), idx.to_string())
        } else {
            let keys: Vec<String> = entries.keys().cloned().collect();
            let key = keys[pick.index(keys.len())].clone();
            (Value::Object(entries.into_iter().collect::<Map<_, _>>()), key)
        };

        let (mut doc, path) = if nested {
            (json!({"outer": container}), format!("outer.{key}"))
        } else {
            (container, key)
        };

        prop_assert!(has(&doc, path.as_str()));
        forget(&mut doc, path.as_str());
        prop_assert!(!has(&doc, path.as_str()));
    }
}
