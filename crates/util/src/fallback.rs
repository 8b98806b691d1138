use serde_json::Value;

/// A default value handed to lookups that may miss.
///
/// Either an eager value, or a producer that is only invoked when the lookup
/// actually misses.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use serde_json::json;
/// use json_arr_util::fallback::Fallback;
///
/// assert_eq!(Fallback::from(json!(1)).resolve(), json!(1));
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = calls.clone();
/// let lazy = Fallback::lazy(move || {
///     counter.set(counter.get() + 1);
///     json!("computed")
/// });
///
/// // Producer hasn't been called yet
/// assert_eq!(calls.get(), 0);
/// assert_eq!(lazy.resolve(), json!("computed"));
/// assert_eq!(calls.get(), 1);
/// ```
pub enum Fallback<'a> {
    /// Returned as-is on a miss.
    Value(Value),
    /// Invoked on a miss.
    Lazy(Box<dyn FnOnce() -> Value + 'a>),
}

impl<'a> Fallback<'a> {
    /// Wrap a zero-argument producer.
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> Value + 'a,
    {
        Fallback::Lazy(Box::new(f))
    }

    /// Produce the fallback value, running the producer if there is one.
    pub fn resolve(self) -> Value {
        match self {
            Fallback::Value(value) => value,
            Fallback::Lazy(f) => f(),
        }
    }
}

impl Default for Fallback<'_> {
    fn default() -> Self {
        Fallback::Value(Value::Null)
    }
}

impl From<Value> for Fallback<'_> {
    fn from(value: Value) -> Self {
        Fallback::Value(value)
    }
}

impl From<Option<Value>> for Fallback<'_> {
    fn from(value: Option<Value>) -> Self {
        Fallback::Value(value.unwrap_or(Value::Null))
    }
}

impl std::fmt::Debug for Fallback<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fallback::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Fallback::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_eager_value() {
        assert_eq!(Fallback::from(json!({"a": 1})).resolve(), json!({"a": 1}));
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Fallback::default().resolve(), Value::Null);
        assert_eq!(Fallback::from(None).resolve(), Value::Null);
    }

    #[test]
    fn test_lazy_runs_once_on_resolve() {
        let calls = Cell::new(0);
        let fallback = Fallback::lazy(|| {
            calls.set(calls.get() + 1);
            json!(42)
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(fallback.resolve(), json!(42));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_lazy_dropped_unused() {
        let calls = Cell::new(0);
        {
            let _fallback = Fallback::lazy(|| {
                calls.set(calls.get() + 1);
                json!(42)
            });
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Fallback::from(json!(1))), "Value(Number(1))");
        assert_eq!(format!("{:?}", Fallback::lazy(|| json!(1))), "Lazy(..)");
    }
}
