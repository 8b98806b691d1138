//! json-arr - associative-array helpers over JSON values.
//!
//! Every helper takes a [`serde_json::Value`] container: a sequence, a
//! mapping, or a scalar that most helpers treat as empty. Dotted-path
//! addressing comes from `json-arr-path` and is re-exported here.
//!
//! # Example
//!
//! ```
//! use json_arr::{cross_join, get_or, pluck, set, take};
//! use serde_json::json;
//!
//! let mut doc = json!({"users": [{"name": "Ada"}, {"name": "Linus"}]});
//! set(&mut doc, Some("meta.count"), json!(2));
//!
//! assert_eq!(get_or(&doc, Some("meta.count"), json!(0)), json!(2));
//! assert_eq!(pluck(&doc["users"], "name", None), json!(["Ada", "Linus"]));
//! assert_eq!(take(&json!([1, 2, 3, 4]), -2), json!([3, 4]));
//! assert_eq!(cross_join(&[json!([1, 2]), json!(["x"])]).len(), 2);
//! ```

pub mod entries;
pub mod error;
pub mod json_cli;
pub mod query;
pub mod random;
pub mod select;
pub mod structure;
pub mod text;

pub use entries::{is_assoc, is_list, wrap};
pub use error::ArrError;
pub use query::{query, QueryEncoding, QueryOptions};
pub use random::{random, shuffle, shuffle_seeded};
pub use select::{
    add, except, filter, first, first_where, last, last_where, map, map_with_keys, only, pluck,
    prepend, pull, select, take, value_or, where_not_null,
};
pub use structure::{
    change_key_case, collapse, cross_join, divide, dot, flatten, prepend_keys_with,
    sort_recursive, sort_recursive_desc, undot,
};
pub use text::{join, to_css_classes, to_css_styles};

pub use json_arr_path::{
    accessible, exists, forget, format_path, get, get_mut, get_or, has, has_any, parse_path,
    set, validate_path, Key, PathError, PathSet,
};
pub use json_arr_util::{Fallback, KeyCase, Sampler};
