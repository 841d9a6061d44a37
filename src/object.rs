//! Keyed lookups with a fallback.
//!
//! A lookup "misses" when the key is absent, when the stored value is
//! [`Value::Undefined`], when the slot is a hole, or when the container is not
//! a record or sequence at all. Every miss returns the caller's fallback.

use crate::value::UNDEFINED;
use crate::Value;
use tracing::trace;

/// Returns the value stored under `key`, or `fallback` on a miss.
///
/// Records are looked up by key. Sequences accept a key that reads as an index.
///
/// # Examples
///
/// ```rust
/// use loosely::{get, value, Value};
///
/// let product = value!({ "name": "cabbage", "price": 1 });
/// let unknown = Value::from("unknown");
///
/// assert_eq!(get(&product, "name", &unknown), &Value::from("cabbage"));
/// assert_eq!(get(&product, "category", &unknown), &unknown);
/// assert_eq!(get(&value!(["a", "b"]), "1", &unknown), &Value::from("b"));
/// ```
#[must_use]
pub fn get<'a>(record: &'a Value, key: &str, fallback: &'a Value) -> &'a Value {
    lookup(record, key).unwrap_or(fallback)
}

/// Like [`get`] with [`Value::Undefined`] as the fallback.
#[must_use]
pub fn get_or_undefined<'a>(record: &'a Value, key: &str) -> &'a Value {
    get(record, key, &UNDEFINED)
}

/// Walks a dotted/bracketed path such as `"a.b[0].c"` and returns what it
/// reaches, or `fallback` as soon as a segment misses.
///
/// If the whole path is itself a key of the record (`"a.b"` stored literally),
/// that entry wins. Bracketed segments may be quoted: `a["x.y"]`.
///
/// # Examples
///
/// ```rust
/// use loosely::{get_path, value, Value};
///
/// let order = value!({ "items": [{ "name": "cabbage" }], "a.b": 1 });
/// let none = Value::Null;
///
/// assert_eq!(get_path(&order, "items[0].name", &none), &Value::from("cabbage"));
/// assert_eq!(get_path(&order, "items[1].name", &none), &none);
/// assert_eq!(get_path(&order, "a.b", &none), &Value::from(1));
/// ```
#[must_use]
pub fn get_path<'a>(value: &'a Value, path: &str, fallback: &'a Value) -> &'a Value {
    if let Some(direct) = lookup(value, path) {
        return direct;
    }

    let mut current = value;
    for segment in parse_path(path) {
        match lookup(current, &segment) {
            Some(next) => current = next,
            None => return fallback,
        }
    }
    current
}

fn lookup<'a>(container: &'a Value, key: &str) -> Option<&'a Value> {
    let found = match container {
        Value::Object(map) => map.get(key),
        Value::Array(slots) => parse_index(key)
            .and_then(|index| slots.get(index))
            .and_then(Option::as_ref),
        other => {
            trace!(kind = other.kind(), key, "get: not a record or sequence");
            None
        }
    };
    found.filter(|v| !v.is_undefined())
}

/// Canonical non-negative integers only: `"1"` but not `"+1"`, `"01"` or `" 1"`.
fn parse_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if !canonical {
        return None;
    }
    key.parse().ok()
}

/// Splits `a.b[0]["c.d"]` into `["a", "b", "0", "c.d"]`.
///
/// A dot always opens a segment, so `"a."` ends with an empty key. An
/// unterminated bracket takes the rest of the path: `"a[0"` is `["a", "0"]`.
fn parse_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    // Whether `current` is a segment that must be emitted, even if empty
    let mut open = true;
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                segments.push(std::mem::take(&mut current));
                open = true;
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                let quote = chars.next_if(|c| *c == '"' || *c == '\'');
                let mut inner = String::new();
                while let Some(c) = chars.next() {
                    if Some(c) == quote && chars.peek() == Some(&']') {
                        chars.next();
                        break;
                    }
                    if quote.is_none() && c == ']' {
                        break;
                    }
                    inner.push(c);
                }
                segments.push(inner);
                // A bracket closes a segment; a dot right after it opens the next one
                open = chars.next_if_eq(&'.').is_some();
            }
            _ => {
                current.push(ch);
                open = true;
            }
        }
    }

    if open {
        segments.push(current);
    }
    segments
}
