use serde_json::{Number, Value};

/// Largest magnitude at which an integral float still prints without exponent.
const MAX_INTEGRAL_FLOAT: f64 = 1e15;

/// Render a number the way loosely typed runtimes do.
///
/// Integral floats drop their fractional part, so `2.0` and `2` share one
/// string form. Used to normalize numeric keys before existence checks.
///
/// # Examples
///
/// ```
/// use serde_json::Number;
/// use json_arr_util::strings::number_to_string;
///
/// assert_eq!(number_to_string(&Number::from(7)), "7");
/// assert_eq!(number_to_string(&Number::from_f64(2.0).unwrap()), "2");
/// assert_eq!(number_to_string(&Number::from_f64(1.5).unwrap()), "1.5");
/// ```
pub fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_INTEGRAL_FLOAT => {
            format!("{}", f as i64)
        }
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Convert a value to its plain (unquoted) string form.
///
/// Strings are returned verbatim, `true` becomes `"1"`, `false` and `null`
/// become `""`. Containers are rendered as compact JSON.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_arr_util::strings::to_plain_string;
///
/// assert_eq!(to_plain_string(&json!("hello")), "hello");
/// assert_eq!(to_plain_string(&json!(true)), "1");
/// assert_eq!(to_plain_string(&json!(null)), "");
/// assert_eq!(to_plain_string(&json!(3)), "3");
/// ```
pub fn to_plain_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
