//! String utilities.
//!
//! Scalar stringification, key-case conversion and small text helpers.

mod as_string;
mod case;
mod util;

pub use as_string::{number_to_string, to_plain_string};
pub use case::{convert_case, split_words, KeyCase};
pub use util::{finish, is_separator, is_word_char};
