//! String helpers.

use crate::Value;
use tracing::trace;

/// Upper-cases the first character of a string value and lower-cases the rest.
///
/// Anything that is not a string (including undefined) yields `""`.
///
/// # Examples
///
/// ```rust
/// use loosely::{capitalize, Value};
///
/// assert_eq!(capitalize(&Value::from("FRED")), "Fred");
/// assert_eq!(capitalize(&Value::from("")), "");
/// assert_eq!(capitalize(&Value::Undefined), "");
/// ```
#[must_use]
pub fn capitalize(text: &Value) -> String {
    match text {
        Value::String(s) => capitalize_str(s),
        other => {
            trace!(kind = other.kind(), "capitalize: not a string, returning empty string");
            String::new()
        }
    }
}

/// Upper-cases the first character of `text` and lower-cases the rest.
///
/// Case mapping is full Unicode. A first character without a case (whitespace,
/// punctuation, emoji) is kept as is. So is one whose upper-case form spans
/// several characters, such as `ß`: the result stays stable when capitalized again.
///
/// # Examples
///
/// ```rust
/// use loosely::capitalize_str;
///
/// assert_eq!(capitalize_str("hElLo"), "Hello");
/// assert_eq!(capitalize_str("åbc"), "Åbc");
/// assert_eq!(capitalize_str("  aBC"), "  abc");
/// assert_eq!(capitalize_str("ßMALL"), "ßmall");
/// ```
#[must_use]
pub fn capitalize_str(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(first),
    }
    out.push_str(&chars.as_str().to_lowercase());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Map;

    #[test]
    fn test_single_character() {
        assert_eq!(capitalize_str("f"), "F");
        assert_eq!(capitalize_str("F"), "F");
    }

    #[test]
    fn test_mixed_case_words() {
        assert_eq!(capitalize_str("javaScript"), "Javascript");
        assert_eq!(capitalize_str("fresh fruits"), "Fresh fruits");
        assert_eq!(capitalize_str("CUCUMBER"), "Cucumber");
        assert_eq!(capitalize_str("Car"), "Car");
    }

    #[test]
    fn test_uncased_first_character() {
        assert_eq!(capitalize_str(" hello"), " hello");
        assert_eq!(capitalize_str("!wow"), "!wow");
        assert_eq!(capitalize_str("1ST"), "1st");
        assert_eq!(capitalize_str("😀"), "😀");
        assert_eq!(capitalize_str("😀HI"), "😀hi");
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(capitalize_str("åBÇ"), "Åbç");
        assert_eq!(capitalize_str("éCOLE"), "École");
        assert_eq!(capitalize_str("ΣΟΦΙΑ"), "Σοφια");
    }

    #[test]
    fn test_multi_char_uppercase_is_left_alone() {
        assert_eq!(capitalize_str("ßMALL"), "ßmall");
        assert_eq!(capitalize_str(&capitalize_str("ßMALL")), "ßmall");
    }

    #[test]
    fn test_non_string_values() {
        assert_eq!(capitalize(&Value::Undefined), "");
        assert_eq!(capitalize(&Value::Null), "");
        assert_eq!(capitalize(&Value::from(42)), "");
        assert_eq!(capitalize(&Value::Object(Map::new())), "");
        assert_eq!(capitalize(&Value::Array(vec![Some(Value::from("a"))])), "");
    }
}
