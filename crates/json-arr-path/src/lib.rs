//! Dotted-path addressing over nested JSON containers.
//!
//! A path is a string of `.`-separated segments, each one a mapping key or a
//! sequence index. A path that is itself an existing key takes precedence
//! over reading it as segments.
//!
//! # Example
//!
//! ```
//! use json_arr_path::{forget, get, has, set};
//! use serde_json::json;
//!
//! let mut doc = json!({"user": {"name": "Ada"}});
//!
//! set(&mut doc, Some("user.langs.0"), json!("en"));
//! assert_eq!(get(&doc, Some("user.langs.0")), Some(&json!("en")));
//!
//! forget(&mut doc, "user.name");
//! assert!(!has(&doc, "user.name"));
//! ```

pub mod forget;
pub mod get;
pub mod has;
pub mod set;
pub mod types;
pub mod util;
pub mod validate;

pub use forget::forget;
pub use get::{get, get_mut, get_or};
pub use has::{exists, has, has_any};
pub use set::set;
pub use types::{Key, Path, PathSet, Segment};
pub use util::{
    accessible, format_path, is_integer, is_list_shaped, is_valid_index, list_to_map,
    parse_index, parse_path,
};
pub use validate::{validate_path, PathError, MAX_PATH_DEPTH, MAX_PATH_LENGTH};
