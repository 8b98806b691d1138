use serde_json::{Number, Value};
use std::cmp::Ordering;

use crate::key_cmp::key_cmp;

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn as_int(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn as_float(n: &Number) -> f64 {
    n.as_f64().unwrap_or(0.0)
}

// Exact comparison; JSON floats are always finite.
fn int_float_cmp(i: i128, f: f64) -> Ordering {
    if f >= 2f64.powi(64) {
        return Ordering::Less;
    }
    if f < -(2f64.powi(63)) {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    i.cmp(&(whole as i128))
        .then_with(|| whole.partial_cmp(&f).unwrap_or(Ordering::Equal))
}

fn number_cmp(x: &Number, y: &Number) -> Ordering {
    match (as_int(x), as_int(y)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(i), None) => int_float_cmp(i, as_float(y)),
        (None, Some(i)) => int_float_cmp(i, as_float(x)).reverse(),
        (None, None) => as_float(x)
            .partial_cmp(&as_float(y))
            .unwrap_or(Ordering::Equal),
    }
}

/// A total order over JSON values.
///
/// Values of different kinds order as
/// `null < bool < number < string < array < object`. Within a kind:
/// - numbers compare numerically
/// - strings compare lexicographically
/// - arrays compare by length, then element by element
/// - objects compare by size, then entry by entry in iteration order
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use serde_json::json;
/// use json_arr_util::value_cmp::value_cmp;
///
/// assert_eq!(value_cmp(&json!(2), &json!(10)), Ordering::Less);
/// assert_eq!(value_cmp(&json!("b"), &json!("a")), Ordering::Greater);
/// assert_eq!(value_cmp(&json!(null), &json!(false)), Ordering::Less);
/// ```
pub fn value_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y)
                .map(|(a, b)| value_cmp(a, b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
        (Value::Object(x), Value::Object(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y)
                .map(|((ka, va), (kb, vb))| key_cmp(ka, kb).then_with(|| value_cmp(va, vb)))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
        _ => rank(a).cmp(&rank(b)),
    }
}
