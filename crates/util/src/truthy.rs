use serde_json::Value;

/// Check if a value counts as "empty" in a loosely typed sense.
///
/// `null`, `false`, `0`, `0.0`, `""`, `"0"`, `[]` and `{}` are empty.
/// Everything else is not.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_arr_util::truthy::is_empty_value;
///
/// assert!(is_empty_value(&json!(null)));
/// assert!(is_empty_value(&json!("0")));
/// assert!(is_empty_value(&json!({})));
/// assert!(!is_empty_value(&json!([0])));
/// ```
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// The inverse of [`is_empty_value`].
pub fn is_truthy(value: &Value) -> bool {
    !is_empty_value(value)
}
