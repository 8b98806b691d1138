//! Type definitions for dotted paths.

use std::borrow::Cow;
use std::fmt;

use json_arr_util::number_to_string;
use serde_json::{Number, Value};

/// One dot-separated component of a path.
pub type Segment = String;

/// A parsed dotted path.
pub type Path = Vec<Segment>;

/// The key of one entry in a container.
///
/// Sequence entries are addressed by position, mapping entries by name.
/// Numeric keys supplied by callers are normalized to their string form, so
/// `2.0`, `2` and `"2"` all address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    /// The key as a path segment.
    pub fn as_segment(&self) -> Cow<'_, str> {
        match self {
            Key::Index(i) => Cow::Owned(i.to_string()),
            Key::Name(name) => Cow::Borrowed(name),
        }
    }

    /// The key as a JSON value: a number for indices, a string for names.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Index(i) => Value::from(*i),
            Key::Name(name) => Value::String(name.clone()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        match usize::try_from(i) {
            Ok(i) => Key::Index(i),
            Err(_) => Key::Name(i.to_string()),
        }
    }
}

impl From<f64> for Key {
    fn from(f: f64) -> Self {
        let name = match Number::from_f64(f) {
            Some(n) => number_to_string(&n),
            None => f.to_string(),
        };
        Key::Name(name)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// One path or many.
///
/// Lets `forget`, `has` and friends accept either a single `&str` or any
/// slice, array or vector of paths.
pub trait PathSet {
    /// The paths in this set, in order.
    fn paths(&self) -> Vec<&str>;
}

impl PathSet for str {
    fn paths(&self) -> Vec<&str> {
        vec![self]
    }
}

impl PathSet for String {
    fn paths(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<S: AsRef<str>> PathSet for [S] {
    fn paths(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<S: AsRef<str>, const N: usize> PathSet for [S; N] {
    fn paths(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<S: AsRef<str>> PathSet for Vec<S> {
    fn paths(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_keys_normalize() {
        assert_eq!(Key::from(2.0), Key::Name("2".to_string()));
        assert_eq!(Key::from(1.5), Key::Name("1.5".to_string()));
        assert_eq!(Key::from(2.0).as_segment(), Key::from(2usize).as_segment());
    }

    #[test]
    fn test_negative_int_is_name() {
        assert_eq!(Key::from(-1i64), Key::Name("-1".to_string()));
        assert_eq!(Key::from(3i64), Key::Index(3));
    }

    #[test]
    fn test_key_to_value() {
        assert_eq!(Key::Index(4).to_value(), Value::from(4));
        assert_eq!(Key::from("a").to_value(), Value::from("a"));
        assert_eq!(Key::Index(4).to_string(), "4");
    }

    #[test]
    fn test_path_set_shapes() {
        assert_eq!("a.b".paths(), vec!["a.b"]);
        assert_eq!(String::from("x").paths(), vec!["x"]);
        assert_eq!(["a", "b"].paths(), vec!["a", "b"]);
        assert_eq!(vec!["a".to_string()].paths(), vec!["a"]);
        let empty: [&str; 0] = [];
        assert!(empty.paths().is_empty());
    }
}
