//! json-arr-util - Leaf utilities for json-arr
//!
//! Helpers shared by the path and collection crates: lookup fallbacks, a
//! seedable sampler, scalar stringification, key casing and value ordering.

pub mod fallback;
pub mod key_cmp;
pub mod sampler;
pub mod strings;
pub mod truthy;
pub mod value_cmp;

// Re-exports for convenience
pub use fallback::Fallback;
pub use key_cmp::key_cmp;
pub use sampler::Sampler;
pub use strings::{convert_case, finish, number_to_string, split_words, to_plain_string, KeyCase};
pub use truthy::{is_empty_value, is_truthy};
pub use value_cmp::value_cmp;
