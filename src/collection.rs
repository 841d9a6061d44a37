//! Single-pass traversal helpers over sequence values.
//!
//! Every helper visits each slot exactly once, in order, and never touches the
//! input. Holes are handed to callbacks as [`Value::Undefined`], so a callback
//! runs once per index whether or not the slot is assigned. Results are dense.
//!
//! ```rust
//! use loosely::{filter, map, reduce, value, Value};
//!
//! let prices = value!([1, 3, 10]);
//!
//! let cheap = filter(&prices, |price, _| price.as_i64().is_some_and(|p| p < 5));
//! assert_eq!(cheap, value!([1, 3]));
//!
//! let doubled = map(&prices, |price, _| Value::from(price.as_i64().unwrap_or(0) * 2));
//! assert_eq!(doubled, value!([2, 6, 20]));
//!
//! let total = reduce(&prices, |sum, price, _| sum + price.as_i64().unwrap_or(0), 0);
//! assert_eq!(total, 14);
//! ```

use crate::value::UNDEFINED;
use crate::Value;
use tracing::trace;

/// Present slots as values, with holes read as undefined.
fn elements(slots: &[Option<Value>]) -> impl Iterator<Item = (usize, &Value)> {
    slots
        .iter()
        .map(|slot| slot.as_ref().unwrap_or(&UNDEFINED))
        .enumerate()
}

/// Returns a sequence of the elements for which `predicate` returns `true`.
///
/// The predicate receives each element and its index. A non-sequence input
/// yields an empty sequence.
#[must_use]
pub fn filter<P>(sequence: &Value, mut predicate: P) -> Value
where
    P: FnMut(&Value, usize) -> bool,
{
    let Some(slots) = sequence.as_array() else {
        trace!(kind = sequence.kind(), "filter: not a sequence, returning empty");
        return Value::Array(Vec::new());
    };

    let mut kept = Vec::new();
    for (index, element) in elements(slots) {
        if predicate(element, index) {
            kept.push(Some(element.clone()));
        }
    }
    Value::Array(kept)
}

/// Returns a sequence of `transform` applied to every element, same length and order.
///
/// A non-sequence input yields an empty sequence.
#[must_use]
pub fn map<F>(sequence: &Value, mut transform: F) -> Value
where
    F: FnMut(&Value, usize) -> Value,
{
    let Some(slots) = sequence.as_array() else {
        trace!(kind = sequence.kind(), "map: not a sequence, returning empty");
        return Value::Array(Vec::new());
    };

    let mut mapped = Vec::with_capacity(slots.len());
    for (index, element) in elements(slots) {
        mapped.push(Some(transform(element, index)));
    }
    Value::Array(mapped)
}

/// Folds the elements left to right, starting from `initial`.
///
/// The reducer receives the accumulator, the element and its index. An empty
/// or non-sequence input returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use loosely::{reduce, value};
///
/// assert_eq!(reduce(&value!([]), |total: i64, _, _| total + 20, 10), 10);
/// ```
pub fn reduce<A, F>(sequence: &Value, mut reducer: F, initial: A) -> A
where
    F: FnMut(A, &Value, usize) -> A,
{
    let Some(slots) = sequence.as_array() else {
        trace!(kind = sequence.kind(), "reduce: not a sequence, returning initial");
        return initial;
    };

    let mut accumulator = initial;
    for (index, element) in elements(slots) {
        accumulator = reducer(accumulator, element, index);
    }
    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{get, value, Map};

    fn products() -> Value {
        value!([
            { "name": "cabbage", "price": 1 },
            { "name": "cucumber", "price": 3 },
            { "name": "ground beef", "price": 10 }
        ])
    }

    fn price(product: &Value) -> i64 {
        get(product, "price", &Value::from(0)).as_i64().unwrap_or(0)
    }

    fn len(value: &Value) -> usize {
        value.as_array().map_or(0, Vec::len)
    }

    #[test]
    fn test_filter_counts() {
        let items = products();
        assert_eq!(len(&filter(&items, |p, _| price(p) < 5)), 2);
        assert_eq!(len(&filter(&items, |_, _| false)), 0);
        assert_eq!(len(&filter(&items, |p, _| price(p) < 100)), 3);
        assert_eq!(len(&filter(&value!([]), |_, _| true)), 0);
    }

    #[test]
    fn test_filter_densifies_holes() {
        let sparse = value!([1, _, 3]);
        let all = filter(&sparse, |_, _| true);
        assert_eq!(all, Value::dense([Value::from(1), Value::Undefined, Value::from(3)]));

        let present = filter(&sparse, |v, _| !v.is_undefined());
        assert_eq!(present, value!([1, 3]));
    }

    #[test]
    fn test_map_collects_names() {
        let names = map(&products(), |p, _| get(p, "name", &Value::Undefined).clone());
        assert_eq!(names, value!(["cabbage", "cucumber", "ground beef"]));
    }

    #[test]
    fn test_map_visits_every_index_in_order() {
        let mut seen = Vec::new();
        let out = map(&value!(["a", _, "c"]), |v, i| {
            seen.push(i);
            Value::from(v.is_undefined())
        });
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(out, value!([false, true, false]));
    }

    #[test]
    fn test_reduce_sums_prices() {
        assert_eq!(reduce(&products(), |sum, p, _| sum + price(p), 0), 1 + 3 + 10);
    }

    #[test]
    fn test_reduce_is_left_to_right() {
        let joined = reduce(
            &value!(["a", "b", "c"]),
            |mut acc: String, v, _| {
                acc.push_str(v.as_str().unwrap_or("?"));
                acc
            },
            String::new(),
        );
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_non_sequence_fallbacks() {
        let record = Value::Object(Map::new());
        assert_eq!(filter(&record, |_, _| true), value!([]));
        assert_eq!(map(&Value::from("abc"), |v, _| v.clone()), value!([]));
        assert_eq!(reduce(&Value::Null, |n: i32, _, _| n + 1, 7), 7);
    }
}
