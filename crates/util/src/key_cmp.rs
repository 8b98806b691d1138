use std::cmp::Ordering;

fn as_int(key: &str) -> Option<i64> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Compare two mapping keys.
///
/// Keys that look like integers compare numerically, so `"10"` sorts after
/// `"9"`, and come before all other keys. The rest compare lexicographically.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use json_arr_util::key_cmp::key_cmp;
///
/// assert_eq!(key_cmp("9", "10"), Ordering::Less);
/// assert_eq!(key_cmp("b", "a"), Ordering::Greater);
/// assert_eq!(key_cmp("a", "a"), Ordering::Equal);
/// ```
pub fn key_cmp(a: &str, b: &str) -> Ordering {
    match (as_int(a), as_int(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
