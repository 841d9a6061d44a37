//! Sequence partitioning.
//!
//! ## How It Works
//!
//! ```text
//! size = 2
//!
//! Sequence: [a, b, c, d, e]
//!
//! Group 0: [a, b]
//! Group 1: [c, d]
//! Group 2: [e]        <- remainder
//! ```
//!
//! Holes travel with their position. `[1, _, 3]` chunked by 2 gives `[[1, _], [3]]`,
//! and the second slot of the first group is still a hole, not an undefined value.

use crate::{to_number, Value};
use tracing::trace;

/// Splits a sequence value into consecutive groups of at most `size` slots.
///
/// `size` is coerced to a number and floored. Anything below 1 (zero,
/// negatives, NaN, a non-numeric value, or [`Value::Undefined`] for "not given")
/// counts as 1. A non-sequence input yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use loosely::{chunk, value};
///
/// assert_eq!(chunk(&value!([1, 2, 3, 4]), 2), value!([[1, 2], [3, 4]]));
/// assert_eq!(chunk(&value!([1, 2, 3, 4, 5]), 2.7), value!([[1, 2], [3, 4], [5]]));
/// assert_eq!(chunk(&value!(["x", "y"]), 0), value!([["x"], ["y"]]));
/// assert_eq!(chunk(&value!({}), 2), value!([]));
///
/// let groups = chunk(&value!([1, _, 3]), 2);
/// assert_eq!(groups, value!([[1, _], [3]]));
/// ```
#[must_use]
pub fn chunk(sequence: &Value, size: impl Into<Value>) -> Value {
    let Value::Array(slots) = sequence else {
        trace!(kind = sequence.kind(), "chunk: not a sequence, returning empty");
        return Value::Array(Vec::new());
    };

    let size = normalize_size(&size.into());
    Value::Array(
        chunk_slice(slots, size)
            .into_iter()
            .map(|group| Some(Value::Array(group)))
            .collect(),
    )
}

/// Splits `items` into consecutive groups of at most `size` items.
///
/// A `size` of 0 is treated as 1. Only the last group may be shorter.
///
/// # Examples
///
/// ```rust
/// use loosely::chunk_slice;
///
/// assert_eq!(chunk_slice(&[1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
/// assert_eq!(chunk_slice(&[1, 2], 0), vec![vec![1], vec![2]]);
/// assert!(chunk_slice::<u8>(&[], 3).is_empty());
/// ```
#[must_use]
pub fn chunk_slice<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size.max(1)).map(<[T]>::to_vec).collect()
}

/// Floors the coerced size; float-to-int `as` saturates, sending NaN and negatives to 0.
fn normalize_size(size: &Value) -> usize {
    let floored = to_number(size).as_f64().floor();
    (floored as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{value, Map, Number};

    fn ints(values: &[i64]) -> Value {
        Value::dense(values.iter().map(|&i| Value::from(i)))
    }

    #[test]
    fn test_even_split() {
        assert_eq!(
            chunk(&value!(["a", "b", "c", "d"]), 2),
            value!([["a", "b"], ["c", "d"]])
        );
    }

    #[test]
    fn test_remainder_goes_last() {
        assert_eq!(
            chunk(&value!(["a", "b", "c", "d"]), 3),
            value!([["a", "b", "c"], ["d"]])
        );
    }

    #[test]
    fn test_size_larger_than_input() {
        assert_eq!(chunk(&ints(&[1, 2]), 10), value!([[1, 2]]));
        assert_eq!(
            chunk(&ints(&[1, 2]), Value::Number(Number::Infinity)),
            value!([[1, 2]])
        );
    }

    #[test]
    fn test_size_normalization() {
        let input = ints(&[1, 2, 3]);
        let singles = value!([[1], [2], [3]]);

        assert_eq!(chunk(&input, Value::Undefined), singles);
        assert_eq!(chunk(&input, 0), singles);
        assert_eq!(chunk(&input, -2), singles);
        assert_eq!(chunk(&input, 0.5), singles);
        assert_eq!(chunk(&input, f64::NAN), singles);
        assert_eq!(chunk(&input, Value::Number(Number::NegativeInfinity)), singles);
        assert_eq!(chunk(&input, value!([[1], [2], [3]])), singles);
        assert_eq!(chunk(&ints(&[1, 2]), 1.001), value!([[1], [2]]));
    }

    #[test]
    fn test_size_is_coerced_from_text() {
        assert_eq!(chunk(&ints(&[1, 2, 3]), "2"), value!([[1, 2], [3]]));
        assert_eq!(chunk(&ints(&[1, 2, 3]), "lots"), value!([[1], [2], [3]]));
    }

    #[test]
    fn test_empty_and_non_sequence_input() {
        assert_eq!(chunk(&value!([]), 3), value!([]));
        assert_eq!(chunk(&Value::Object(Map::new()), 2), value!([]));
        assert_eq!(chunk(&Value::from("abcd"), 2), value!([]));
        assert_eq!(chunk(&Value::Undefined, 2), value!([]));
    }

    #[test]
    fn test_holes_are_preserved() {
        let input = Value::Array(vec![Some(Value::from(1)), None, Some(Value::from(3))]);
        let groups = chunk(&input, 2);
        let groups = groups.as_array().unwrap();

        assert_eq!(groups.len(), 2);
        let first = groups[0].as_ref().and_then(Value::as_array).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0], Some(Value::from(1)));
        assert!(first[1].is_none());

        let second = groups[1].as_ref().and_then(Value::as_array).unwrap();
        assert_eq!(second, &vec![Some(Value::from(3))]);
    }

    #[test]
    fn test_hole_differs_from_present_undefined() {
        let input = Value::Array(vec![Some(Value::Undefined), None]);
        let groups = chunk(&input, 2);
        let first = groups.as_array().unwrap()[0]
            .as_ref()
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(first[0], Some(Value::Undefined));
        assert_eq!(first[1], None);
    }

    #[test]
    fn test_chunk_slice_typed() {
        assert_eq!(
            chunk_slice(&["a", "b", "c"], 1),
            vec![vec!["a"], vec!["b"], vec!["c"]]
        );
        assert_eq!(chunk_slice(&[1, 2, 3, 4], 4), vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn test_input_untouched() {
        let input = ints(&[1, 2, 3]);
        let before = input.clone();
        let _ = chunk(&input, 2);
        assert_eq!(input, before);
    }
}
