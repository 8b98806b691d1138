//! Joining container values into text.

use json_arr_util::{finish, is_truthy, to_plain_string};
use serde_json::Value;

use crate::entries::{entries, named_key, values, wrap};

/// Join values with `glue`, using `final_glue` before the last one.
///
/// Values are rendered in their plain string form. An empty `final_glue`
/// behaves like `None`.
///
/// # Example
///
/// ```
/// use json_arr::join;
/// use serde_json::json;
///
/// let doc = json!(["a", "b", "c"]);
/// assert_eq!(join(&doc, ", ", None), "a, b, c");
/// assert_eq!(join(&doc, ", ", Some(" and ")), "a, b and c");
/// assert_eq!(join(&json!(["a"]), ", ", Some(" and ")), "a");
/// ```
pub fn join(container: &Value, glue: &str, final_glue: Option<&str>) -> String {
    let mut parts: Vec<String> = values(container).into_iter().map(to_plain_string).collect();

    let Some(final_glue) = final_glue.filter(|g| !g.is_empty()) else {
        return parts.join(glue);
    };

    match parts.pop() {
        None => String::new(),
        Some(last) if parts.is_empty() => last,
        Some(last) => format!("{}{final_glue}{last}", parts.join(glue)),
    }
}

/// Build a space-separated class list.
///
/// Positional entries are always included. Named entries are included by
/// name when their value is truthy.
///
/// # Example
///
/// ```
/// use json_arr::to_css_classes;
/// use serde_json::json;
///
/// let classes = json!({"0": "p-4", "font-bold": true, "bg-red": false});
/// assert_eq!(to_css_classes(&classes), "p-4 font-bold");
/// ```
pub fn to_css_classes(list: &Value) -> String {
    conditional_list(list, |item| item)
}

/// Build a style attribute, terminating every declaration with `;`.
///
/// # Example
///
/// ```
/// use json_arr::to_css_styles;
/// use serde_json::json;
///
/// let styles = json!({"0": "font-weight: bold", "color: red;": true, "margin: 0": false});
/// assert_eq!(to_css_styles(&styles), "font-weight: bold; color: red;");
/// ```
pub fn to_css_styles(list: &Value) -> String {
    conditional_list(list, |item| finish(&item, ";"))
}

fn conditional_list(list: &Value, render: impl Fn(String) -> String) -> String {
    let list = wrap(list.clone());
    entries(&list)
        .into_iter()
        .filter_map(|(key, constraint)| match named_key(&key) {
            None => Some(to_plain_string(constraint)),
            Some(name) if is_truthy(constraint) => Some(name),
            Some(_) => None,
        })
        .map(render)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_empty() {
        assert_eq!(join(&json!([]), ",", None), "");
        assert_eq!(join(&json!([]), ",", Some(" or ")), "");
    }

    #[test]
    fn test_join_two_uses_final_glue() {
        assert_eq!(join(&json!(["x", "y"]), ", ", Some(" or ")), "x or y");
    }

    #[test]
    fn test_join_empty_final_glue() {
        assert_eq!(join(&json!([1, 2, 3]), "-", Some("")), "1-2-3");
    }

    #[test]
    fn test_join_mapping_values_and_scalars() {
        assert_eq!(join(&json!({"a": 1, "b": true, "c": null}), "|", None), "1|1|");
        assert_eq!(join(&json!(5), ",", None), "");
    }

    #[test]
    fn test_css_classes_from_scalar() {
        assert_eq!(to_css_classes(&json!("btn")), "btn");
        assert_eq!(to_css_classes(&json!(null)), "");
    }

    #[test]
    fn test_css_classes_sequence() {
        assert_eq!(to_css_classes(&json!(["a", "b"])), "a b");
    }

    #[test]
    fn test_css_classes_truthiness() {
        let list = json!({"on": 1, "zero": 0, "str": "0", "empty": "", "yes": "yes"});
        assert_eq!(to_css_classes(&list), "on yes");
    }

    #[test]
    fn test_css_styles_finish() {
        assert_eq!(to_css_styles(&json!(["a: 1", "b: 2;"])), "a: 1; b: 2;");
    }
}
