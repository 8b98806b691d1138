/// Whether a character can be part of a word in an identifier.
///
/// Letters and digits in any script count.
///
/// ```
/// use json_arr_util::strings::is_word_char;
///
/// assert!(is_word_char('x'));
/// assert!(is_word_char('7'));
/// assert!(!is_word_char('-'));
/// ```
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Check if a character separates words in an identifier.
///
/// Anything that is not a letter or digit counts: `_`, `-`, `.`, whitespace.
pub fn is_separator(ch: char) -> bool {
    !is_word_char(ch)
}

/// Append `cap` to `s` unless it already ends with it.
///
/// # Examples
///
/// ```
/// use json_arr_util::strings::finish;
///
/// assert_eq!(finish("color: red", ";"), "color: red;");
/// assert_eq!(finish("color: red;", ";"), "color: red;");
/// ```
pub fn finish(s: &str, cap: &str) -> String {
    if cap.is_empty() {
        return s.to_string();
    }
    let trimmed = s.trim_end_matches(cap);
    let mut out = String::with_capacity(trimmed.len() + cap.len());
    out.push_str(trimmed);
    out.push_str(cap);
    out
}
