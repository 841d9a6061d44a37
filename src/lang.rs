//! Checks and coercions on single values.
//!
//! - [`default_to`]: substitute a fallback for null, undefined and NaN
//! - [`eq`]: equality without coercion
//! - [`is_empty`]: undefined, empty string, or empty sequence
//! - [`to_number`] / [`to_number_with`]: numeric coercion that yields NaN instead of failing

use crate::{Number, NumberOptions, Value};
use tracing::trace;

/// Returns `fallback` when `value` is null, undefined, or NaN; otherwise `value`.
///
/// Falsy-but-valid values such as `0`, `false` and `""` are kept.
///
/// # Examples
///
/// ```rust
/// use loosely::{default_to, Value};
///
/// let zero = Value::from(0);
/// assert_eq!(default_to(&Value::Null, &zero), &zero);
/// assert_eq!(default_to(&Value::from(f64::NAN), &zero), &zero);
/// assert_eq!(default_to(&Value::from(0), &Value::from(1)), &Value::from(0));
/// ```
#[must_use]
pub fn default_to<'a>(value: &'a Value, fallback: &'a Value) -> &'a Value {
    if value.is_nullish() || value.is_nan() {
        fallback
    } else {
        value
    }
}

/// Compares two values without coercion.
///
/// Primitives are equal when they are the same kind holding the same value.
/// Numbers compare by numeric value (`1 == 1.0`, `NaN == NaN`, `0 == -0`).
/// Arrays and objects are only equal to themselves: both arguments must be
/// the same borrowed value.
///
/// # Examples
///
/// ```rust
/// use loosely::{eq, value, Value};
///
/// assert!(eq(&Value::from("example"), &Value::from("example")));
/// assert!(!eq(&Value::from("1"), &Value::from(1)));
///
/// let list = value!([1, 2]);
/// assert!(eq(&list, &list));
/// assert!(!eq(&list, &list.clone()));
/// ```
#[must_use]
pub fn eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x.same_value_zero(y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            std::ptr::eq(a, b)
        }
        _ => false,
    }
}

/// Returns `true` for undefined, the empty string, and sequences of length zero.
///
/// Everything else is not empty, including null, numbers, booleans, records,
/// and sequences whose only slots are holes.
///
/// # Examples
///
/// ```rust
/// use loosely::{is_empty, value, Value};
///
/// assert!(is_empty(&Value::Undefined));
/// assert!(is_empty(&value!("")));
/// assert!(is_empty(&value!([])));
/// assert!(!is_empty(&value!("example")));
/// assert!(!is_empty(&value!([_])));
/// ```
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Undefined => true,
        Value::String(s) => s.is_empty(),
        Value::Array(slots) => slots.is_empty(),
        _ => false,
    }
}

/// Coerces a value to a [`Number`] with the default [`NumberOptions`].
///
/// Numbers come back unchanged. Text is parsed; anything that does not read
/// as a number is [`Number::NaN`]. This never fails.
///
/// | input | result |
/// |-------|--------|
/// | `true` / `false` | `1` / `0` |
/// | `null` | `0` |
/// | `undefined` | NaN |
/// | `" 1.1 "` | `1.1` |
/// | `""` | `0` |
/// | `"0x1f"` | `31` |
/// | `"text"` | NaN |
/// | arrays, objects | NaN |
///
/// # Examples
///
/// ```rust
/// use loosely::{to_number, Number, Value};
///
/// assert_eq!(to_number(&Value::from(1)), Number::Integer(1));
/// assert_eq!(to_number(&Value::from("1.1")), Number::Float(1.1));
/// assert!(to_number(&Value::from("text")).is_nan());
/// ```
#[must_use]
pub fn to_number(value: &Value) -> Number {
    to_number_with(value, &NumberOptions::default())
}

/// Coerces a value to a [`Number`] using the given options.
#[must_use]
pub fn to_number_with(value: &Value, options: &NumberOptions) -> Number {
    match value {
        Value::Number(n) => *n,
        Value::Bool(b) => Number::Integer(i64::from(*b)),
        Value::Null => Number::Integer(0),
        Value::Undefined => Number::NaN,
        Value::String(s) => parse_number(s, options),
        Value::Array(_) | Value::Object(_) => {
            trace!(kind = value.kind(), "to_number: not coercible, returning NaN");
            Number::NaN
        }
    }
}

fn parse_number(text: &str, options: &NumberOptions) -> Number {
    let text = if options.trim {
        text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
    } else {
        text
    };

    if text.is_empty() {
        return if options.blank_as_zero {
            Number::Integer(0)
        } else {
            Number::NaN
        };
    }

    if options.radix_prefixes {
        if let Some(number) = parse_radix(text) {
            return number;
        }
    }

    if options.infinity_literals {
        match text {
            "Infinity" | "+Infinity" => return Number::Infinity,
            "-Infinity" => return Number::NegativeInfinity,
            _ => {}
        }
    }

    if !is_decimal_literal(text) {
        trace!(text, "to_number: unparseable text, returning NaN");
        return Number::NaN;
    }

    if !text.contains(['.', 'e', 'E']) {
        match text.parse::<i64>() {
            // `-0` keeps its sign through the float path
            Ok(0) if text.starts_with('-') => {}
            Ok(i) => return Number::Integer(i),
            Err(_) => {}
        }
    }

    text.parse::<f64>().map(Number::from).unwrap_or(Number::NaN)
}

/// Reads `0b`/`0o`/`0x` text. `None` means the text carries no radix prefix.
fn parse_radix(text: &str) -> Option<Number> {
    let (signed, unsigned) = match text.strip_prefix(['+', '-']) {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let prefix = unsigned.get(..2)?;
    let radix = if prefix.eq_ignore_ascii_case("0b") {
        2
    } else if prefix.eq_ignore_ascii_case("0o") {
        8
    } else if prefix.eq_ignore_ascii_case("0x") {
        16
    } else {
        return None;
    };

    let digits = &unsigned[2..];
    if signed || digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(Number::NaN);
    }

    Some(match u64::from_str_radix(digits, radix) {
        Ok(v) => Number::from(v),
        // Too wide for u64; accumulate in floating point instead
        Err(_) => Number::from(digits.chars().fold(0.0_f64, |acc, c| {
            acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
        })),
    })
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let mut mantissa_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exponent_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }

    i == bytes.len()
}
