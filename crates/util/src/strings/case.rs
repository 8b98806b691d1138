use super::util::is_separator;

/// Target casing for mapping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    /// `foo_bar`
    #[default]
    Snake,
    /// `fooBar`
    Camel,
    /// `foo-bar`
    Kebab,
    /// `FooBar`
    Studly,
    /// Plain lowercase, no word splitting.
    Lower,
    /// Plain uppercase, no word splitting.
    Upper,
}

/// Split an identifier into words.
///
/// Breaks on separators, on a lowercase/digit to uppercase transition, and
/// before the last capital of an acronym run (`HTTPServer` → `HTTP`, `Server`).
///
/// # Examples
///
/// ```
/// use json_arr_util::strings::split_words;
///
/// assert_eq!(split_words("fooBar_baz-qux"), vec!["foo", "Bar", "baz", "qux"]);
/// assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
/// ```
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if is_separator(ch) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Convert an identifier to the given case.
///
/// # Examples
///
/// ```
/// use json_arr_util::strings::{convert_case, KeyCase};
///
/// assert_eq!(convert_case("firstName", KeyCase::Snake), "first_name");
/// assert_eq!(convert_case("first_name", KeyCase::Camel), "firstName");
/// assert_eq!(convert_case("first name", KeyCase::Kebab), "first-name");
/// assert_eq!(convert_case("first-name", KeyCase::Studly), "FirstName");
/// ```
pub fn convert_case(s: &str, case: KeyCase) -> String {
    match case {
        KeyCase::Lower => s.to_lowercase(),
        KeyCase::Upper => s.to_uppercase(),
        KeyCase::Snake => join_lower(s, "_"),
        KeyCase::Kebab => join_lower(s, "-"),
        KeyCase::Studly => split_words(s).iter().map(|w| capitalize(w)).collect(),
        KeyCase::Camel => split_words(s)
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
    }
}

fn join_lower(s: &str, glue: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(glue)
}
