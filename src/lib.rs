//! # loosely
//!
//! Fallback-first helpers for chunking, capitalizing, defaulting, comparing,
//! filtering, mapping, reducing, emptiness checks and numeric coercion over
//! loosely-typed values.
//!
//! ## What does "loosely" mean here?
//!
//! Data that crosses a dynamic boundary (parsed JSON, script bindings, user
//! records) does not always have the shape a function expects. Every helper in
//! this crate accepts a [`Value`], checks its shape at runtime, and resolves a
//! mismatch to a documented fallback instead of failing:
//!
//! | helper | on a shape mismatch |
//! |--------|---------------------|
//! | [`chunk`] | empty sequence |
//! | [`capitalize`] | empty string |
//! | [`to_number`] | [`Number::NaN`] |
//! | [`filter`] / [`map`] | empty sequence |
//! | [`reduce`] | the initial accumulator |
//! | [`get`] / [`get_path`] | the caller's fallback |
//!
//! ## Key Features
//!
//! - **Holes survive**: sequences are `Vec<Option<Value>>`, and [`chunk`] keeps a
//!   hole a hole instead of turning it into a present undefined
//! - **Missing vs. null**: [`Value::Undefined`] and [`Value::Null`] are distinct
//! - **Serde bridge**: [`to_value`] turns any `T: Serialize` into a [`Value`], and
//!   [`Value`] itself deserializes from any serde format
//! - **Typed cores**: [`chunk_slice`] and [`capitalize_str`] for callers that
//!   already hold static types
//!
//! ## Quick Start
//!
//! ```rust
//! use loosely::{capitalize, chunk, default_to, is_empty, to_number, value, Number, Value};
//!
//! assert_eq!(chunk(&value!([1, 2, 3]), 2), value!([[1, 2], [3]]));
//! assert_eq!(capitalize(&value!("FRED")), "Fred");
//! assert_eq!(to_number(&value!("1.1")), Number::Float(1.1));
//! assert!(is_empty(&value!([])));
//!
//! let fallback = value!(0);
//! assert_eq!(default_to(&Value::Null, &fallback), &fallback);
//! ```
//!
//! ### Working with records
//!
//! ```rust
//! use loosely::{filter, get, map, reduce, value, Value};
//!
//! let products = value!([
//!     { "name": "cabbage", "price": 1 },
//!     { "name": "cucumber", "price": 3 },
//!     { "name": "ground beef", "price": 10 }
//! ]);
//! let zero = Value::from(0);
//! let price = |p: &Value| get(p, "price", &zero).as_i64().unwrap_or(0);
//!
//! let cheap = filter(&products, |p, _| price(p) < 5);
//! assert_eq!(cheap.as_array().map(Vec::len), Some(2));
//!
//! let names = map(&products, |p, _| get(p, "name", &Value::Undefined).clone());
//! assert_eq!(names, value!(["cabbage", "cucumber", "ground beef"]));
//!
//! assert_eq!(reduce(&products, |sum, p, _| sum + price(p), 0), 14);
//! ```
//!
//! ## Diagnostics
//!
//! Fallback paths emit `tracing` events at `TRACE` level naming the helper and
//! the kind of value it received. Install any `tracing` subscriber to see them.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics and no `Result` returns from the helpers; errors only come from
//!   [`to_value`] and the `TryFrom<Value>` conversions

pub mod array;
pub mod collection;
pub mod error;
pub mod lang;
pub mod macros;
pub mod map;
pub mod object;
pub mod options;
pub mod ser;
pub mod string;
pub mod value;

pub use array::{chunk, chunk_slice};
pub use collection::{filter, map, reduce};
pub use error::{Error, Result};
pub use lang::{default_to, eq, is_empty, to_number, to_number_with};
pub use map::Map;
pub use object::{get, get_or_undefined, get_path};
pub use options::NumberOptions;
pub use ser::ValueSerializer;
pub use string::{capitalize, capitalize_str};
pub use value::{Number, Value};

use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// This is how statically-typed data reaches the helpers in this crate.
///
/// # Examples
///
/// ```rust
/// use loosely::{chunk, to_value, value};
///
/// let groups = chunk(&to_value(&vec![1, 2, 3]).unwrap(), 2);
/// assert_eq!(groups, value!([[1, 2], [3]]));
/// ```
///
/// # Errors
///
/// Returns an error for shapes a [`Value`] cannot represent (enum variants
/// carrying data, map keys that are not scalars).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
