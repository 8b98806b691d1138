//! Random sampling and reordering.
//!
//! The random source is always passed in; nothing here touches global state.

use json_arr_util::Sampler;
use serde_json::Value;
use tracing::debug;

use crate::entries::{collect_entries, entries, values};
use crate::error::ArrError;

/// Pick random values from a container.
///
/// With `number = None` a single value is returned as is. With `Some(n)` a
/// container of `n` values is returned, in their original order; when
/// `preserve_keys` is set the values keep their original keys.
///
/// # Errors
///
/// Asking for more values than the container holds is an
/// [`ArrError::InvalidArgument`]. Scalars hold no values.
///
/// # Example
///
/// ```
/// use json_arr::{random, ArrError, Sampler};
/// use serde_json::json;
///
/// let mut sampler = Sampler::from_u64(1);
/// let doc = json!(["a", "b", "c"]);
///
/// let picked = random(&doc, Some(2), false, &mut sampler).unwrap();
/// assert_eq!(picked.as_array().unwrap().len(), 2);
///
/// let err = random(&doc, Some(4), false, &mut sampler).unwrap_err();
/// assert!(matches!(err, ArrError::InvalidArgument { requested: 4, available: 3 }));
/// ```
pub fn random(
    container: &Value,
    number: Option<usize>,
    preserve_keys: bool,
    sampler: &mut Sampler,
) -> Result<Value, ArrError> {
    let all = entries(container);
    let requested = number.unwrap_or(1);
    let available = all.len();

    if requested > available {
        debug!(requested, available, "sample larger than container");
        return Err(ArrError::InvalidArgument {
            requested,
            available,
        });
    }

    let Some(number) = number else {
        let picked = sampler.pick_index(available).and_then(|i| all.get(i));
        return Ok(picked.map(|(_, value)| (*value).clone()).unwrap_or(Value::Null));
    };

    if number == 0 {
        return Ok(Value::Array(Vec::new()));
    }

    let picked = sampler
        .sample_indices(available, number)
        .into_iter()
        .filter_map(|i| all.get(i));

    if preserve_keys {
        let pairs = picked.map(|(key, value)| (key.to_string(), (*value).clone()));
        Ok(collect_entries(pairs, true))
    } else {
        Ok(Value::Array(
            picked.map(|(_, value)| (*value).clone()).collect(),
        ))
    }
}

/// Return the container's values in random order, as a sequence.
///
/// # Example
///
/// ```
/// use json_arr::{shuffle, Sampler};
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": 2, "c": 3});
/// let once = shuffle(&doc, &mut Sampler::from_u64(9));
/// let again = shuffle(&doc, &mut Sampler::from_u64(9));
/// assert_eq!(once, again);
/// assert_eq!(once.as_array().unwrap().len(), 3);
/// ```
pub fn shuffle(container: &Value, sampler: &mut Sampler) -> Value {
    let mut items: Vec<Value> = values(container).into_iter().cloned().collect();
    sampler.shuffle(&mut items);
    Value::Array(items)
}

/// [`shuffle`] with a sampler scoped to this call.
///
/// A seed makes the order reproducible; `None` draws a fresh seed.
pub fn shuffle_seeded(container: &Value, seed: Option<u64>) -> Value {
    let mut sampler = match seed {
        Some(seed) => Sampler::from_u64(seed),
        None => Sampler::default(),
    };
    shuffle(container, &mut sampler)
}
