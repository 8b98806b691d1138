//! URL query-string encoding of nested containers.
//!
//! Nested keys are written as `a[b][0]` with the brackets percent-encoded,
//! `null` leaves are skipped and booleans become `1`/`0`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use json_arr_util::number_to_string;

use crate::entries::{entries, named_key};

/// Unreserved characters of RFC 3986 pass through.
const RFC3986_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Form encoding: spaces are kept here and turned into `+` afterwards.
const RFC1738_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

/// How keys and values are escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEncoding {
    /// Spaces become `%20`, `~` is kept.
    #[default]
    Rfc3986,
    /// Form style: spaces become `+`, `~` becomes `%7E`.
    Rfc1738,
}

impl QueryEncoding {
    fn encode(self, s: &str) -> String {
        match self {
            Self::Rfc3986 => utf8_percent_encode(s, RFC3986_ENCODE_SET).to_string(),
            Self::Rfc1738 => utf8_percent_encode(s, RFC1738_ENCODE_SET)
                .to_string()
                .replace(' ', "+"),
        }
    }
}

/// Options for [`query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Written between pairs. Default is `&`.
    pub separator: String,
    /// Default is RFC 3986.
    pub encoding: QueryEncoding,
    /// Prepended, unescaped, to positional top-level keys. Default is empty.
    pub numeric_prefix: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            separator: "&".to_string(),
            encoding: QueryEncoding::default(),
            numeric_prefix: String::new(),
        }
    }
}

/// Encode a container as a URL query string.
///
/// # Example
///
/// ```
/// use json_arr::{query, QueryEncoding, QueryOptions};
/// use serde_json::json;
///
/// let doc = json!({"q": "a b", "filter": {"tags": ["x", "y"]}, "page": null});
/// assert_eq!(
///     query(&doc, None),
///     "q=a%20b&filter%5Btags%5D%5B0%5D=x&filter%5Btags%5D%5B1%5D=y"
/// );
///
/// let form = QueryOptions { encoding: QueryEncoding::Rfc1738, ..Default::default() };
/// assert_eq!(query(&json!({"q": "a b"}), Some(form)), "q=a+b");
/// ```
pub fn query(container: &Value, options: Option<QueryOptions>) -> String {
    let options = options.unwrap_or_default();
    let mut pairs = Vec::new();

    for (key, value) in entries(container) {
        let name = match named_key(&key) {
            Some(name) => options.encoding.encode(&name),
            None => format!("{}{}", options.numeric_prefix, key),
        };
        encode_value(&name, value, options.encoding, &mut pairs);
    }

    pairs.join(&options.separator)
}

fn encode_value(name: &str, value: &Value, encoding: QueryEncoding, pairs: &mut Vec<String>) {
    let scalar = match value {
        Value::Null => return,
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => encoding.encode(s),
        Value::Array(_) | Value::Object(_) => {
            for (key, child) in entries(value) {
                let nested = format!("{name}%5B{}%5D", encoding.encode(&key.to_string()));
                encode_value(&nested, child, encoding, pairs);
            }
            return;
        }
    };
    pairs.push(format!("{name}={scalar}"));
}
