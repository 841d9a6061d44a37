//! Dynamic value representation for loosely-typed input.
//!
//! This module provides the [`Value`] enum that every helper in this crate accepts.
//! It mirrors the shapes a caller can hand across a dynamic boundary (parsed JSON,
//! user-supplied records, script bindings) and keeps two distinctions that plain
//! Rust types lose:
//!
//! - **Missing vs. null**: [`Value::Undefined`] is "no value was supplied",
//!   [`Value::Null`] is an explicit null.
//! - **Holes vs. present values**: sequences hold `Option<Value>` slots. A `None`
//!   slot is a hole (no assigned value), which is different from a slot holding
//!   `Some(Value::Undefined)`.
//!
//! ## Core Types
//!
//! - [`Value`]: undefined, null, bool, number, string, array, object
//! - [`Number`]: integers, finite floats, and the special values (Infinity, -Infinity, NaN)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use loosely::{value, Value};
//!
//! let missing = Value::Undefined;
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Sparse sequence with a hole at index 1
//! let sparse = value!([1, _, 3]);
//! assert_eq!(sparse.as_array().map(|slots| slots[1].is_none()), Some(true));
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use loosely::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.kind(), "number");
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use loosely::Value;
//! use std::convert::TryFrom;
//!
//! let num: i64 = i64::try_from(Value::from(42)).unwrap();
//! assert_eq!(num, 42);
//! assert!(i64::try_from(Value::from("42")).is_err());
//! ```

use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed value as received from a loosely-typed caller.
///
/// Sequences are stored as `Vec<Option<Value>>` so that sparse input keeps its
/// holes through every transformation that promises to preserve them.
///
/// # Examples
///
/// ```rust
/// use loosely::{Number, Value};
///
/// let undefined = Value::default();
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(undefined.is_undefined());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Option<Value>>),
    Object(Map),
}

/// Shared missing-value sentinel, handed to callbacks in place of holes.
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// A numeric value: an integer, a finite float, or one of the special values.
///
/// `Float` never holds a non-finite value. Converting an `f64` with [`From`]
/// routes infinities and NaN to their dedicated variants, so [`Number::NaN`]
/// is the single not-a-number sentinel.
///
/// # Examples
///
/// ```rust
/// use loosely::Number;
///
/// assert_eq!(Number::from(3.5), Number::Float(3.5));
/// assert_eq!(Number::from(f64::NAN), Number::NaN);
/// assert_eq!(Number::from(f64::INFINITY), Number::Infinity);
/// assert!(Number::NaN.is_nan());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Number;
    ///
    /// assert!(Number::Integer(42).is_integer());
    /// assert!(!Number::Float(3.5).is_integer());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a finite floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Returns `true` if this is the not-a-number sentinel.
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Number::NaN)
    }

    /// Converts this number to an `i64` if it is integral and in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                // i64::MAX as f64 rounds up to 2^63, which is already out of range
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_f64(), 42.0);
    /// assert_eq!(Number::Infinity.as_f64(), f64::INFINITY);
    /// assert!(Number::NaN.as_f64().is_nan());
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }

    /// Numeric equality where NaN equals NaN and `0 == -0`.
    ///
    /// Integers and floats are one numeric type here, so `1` equals `1.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Number;
    ///
    /// assert!(Number::Integer(1).same_value_zero(&Number::Float(1.0)));
    /// assert!(Number::NaN.same_value_zero(&Number::NaN));
    /// assert!(Number::Float(0.0).same_value_zero(&Number::Float(-0.0)));
    /// ```
    #[must_use]
    pub fn same_value_zero(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::NaN, Number::NaN) => true,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Float(value as f64),
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

impl Value {
    /// Returns `true` if the value is the missing-value sentinel.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if the value is an explicit null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is null or undefined.
    #[inline]
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a number holding the NaN sentinel.
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Value::Number(Number::NaN))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Short lowercase name of the variant, used in diagnostics and errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Value;
    ///
    /// assert_eq!(Value::Undefined.kind(), "undefined");
    /// assert_eq!(Value::from(vec![Value::from(1)]).kind(), "array");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    ///
    /// No coercion happens here; see [`crate::to_number`] for that.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::{Number, Value};
    ///
    /// assert_eq!(Value::Number(Number::Integer(42)).as_i64(), Some(42));
    /// assert_eq!(Value::Number(Number::Float(42.5)).as_i64(), None);
    /// assert_eq!(Value::from("42").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is an array, returns its slots (holes are `None`).
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Option<Value>>> {
        match self {
            Value::Array(slots) => Some(slots),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Builds a dense array from present values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Value;
    ///
    /// let arr = Value::dense([Value::from(1), Value::from(2)]);
    /// assert_eq!(arr.as_array().map(Vec::len), Some(2));
    /// ```
    pub fn dense<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(values.into_iter().map(Some).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(slots) => {
                // Holes render as empty positions: [1,,3]
                write!(
                    f,
                    "[{}]",
                    slots
                        .iter()
                        .map(|slot| slot.as_ref().map(|v| v.to_string()).unwrap_or_default())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Object(_) => write!(f, "{{object}}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(n.as_f64()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(slots) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(slots.len()))?;
                for slot in slots {
                    seq.serialize_element(slot)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut slots = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element::<Value>()? {
                    slots.push(Some(elem));
                }
                Ok(Value::Array(slots))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting typed values
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value.as_i64() {
            Some(i) => Ok(i),
            None => Err(crate::Error::type_mismatch("integer", value.kind())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(crate::Error::type_mismatch("number", other.kind())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("boolean", other.kind())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.kind())),
        }
    }
}

// From implementations for building values from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::dense(value)
    }
}

impl From<Vec<Option<Value>>> for Value {
    fn from(value: Vec<Option<Value>>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::Number(Number::Integer(42));
        assert_eq!(i64::try_from(value).unwrap(), 42);

        let value = Value::Number(Number::Float(42.0));
        assert_eq!(i64::try_from(value).unwrap(), 42);

        let err = i64::try_from(Value::from("test")).unwrap_err();
        assert!(err.to_string().contains("expected integer, found string"));
    }

    #[test]
    fn test_as_i64_rejects_floats_past_i64_range() {
        let huge = crate::to_number(&Value::from("9223372036854775808"));
        assert!(huge.is_float());
        assert_eq!(huge.as_i64(), None);
        assert_eq!(Value::Number(huge).as_i64(), None);
        assert!(matches!(
            i64::try_from(Value::Number(huge)),
            Err(crate::Error::TypeMismatch { .. })
        ));

        assert_eq!(Number::Float(i64::MIN as f64).as_i64(), Some(i64::MIN));
        assert_eq!(Number::Float(9.0e18).as_i64(), Some(9_000_000_000_000_000_000));
    }

    #[test]
    fn test_tryfrom_f64() {
        assert_eq!(f64::try_from(Value::from(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(Value::from(42)).unwrap(), 42.0);
        assert_eq!(
            f64::try_from(Value::Number(Number::Infinity)).unwrap(),
            f64::INFINITY
        );
        assert!(f64::try_from(Value::Undefined).is_err());
    }

    #[test]
    fn test_tryfrom_bool_and_string() {
        assert!(bool::try_from(Value::Bool(true)).unwrap());
        assert!(bool::try_from(Value::from(1)).is_err());
        assert_eq!(String::try_from(Value::from("hello")).unwrap(), "hello");
        assert!(String::try_from(Value::Null).is_err());
    }

    #[test]
    fn test_from_f64_routes_special_values() {
        assert_eq!(Value::from(f64::NAN), Value::Number(Number::NaN));
        assert_eq!(
            Value::from(f64::NEG_INFINITY),
            Value::Number(Number::NegativeInfinity)
        );
        assert_eq!(Value::from(1.5), Value::Number(Number::Float(1.5)));
        assert_eq!(Number::from(u64::MAX), Number::Float(u64::MAX as f64));
    }

    #[test]
    fn test_from_collections() {
        let dense = Value::from(vec![Value::from(1), Value::from(2)]);
        assert_eq!(
            dense,
            Value::Array(vec![Some(Value::from(1)), Some(Value::from(2))])
        );

        let sparse = Value::from(vec![Some(Value::from(1)), None]);
        assert_eq!(sparse.as_array().map(|s| s[1].is_none()), Some(true));

        let mut map = Map::new();
        map.insert("key".to_string(), Value::from(42));
        assert_eq!(Value::from(map.clone()), Value::Object(map));
    }

    #[test]
    fn test_same_value_zero() {
        assert!(Number::Integer(3).same_value_zero(&Number::Float(3.0)));
        assert!(!Number::Integer(3).same_value_zero(&Number::Float(3.5)));
        assert!(Number::NaN.same_value_zero(&Number::NaN));
        assert!(!Number::NaN.same_value_zero(&Number::Integer(0)));
        assert!(Number::Infinity.same_value_zero(&Number::Infinity));
        assert!(!Number::Infinity.same_value_zero(&Number::NegativeInfinity));
    }

    #[test]
    fn test_display_keeps_holes_visible() {
        let value = Value::Array(vec![Some(Value::from(1)), None, Some(Value::from(3))]);
        assert_eq!(value.to_string(), "[1,,3]");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Number(Number::NaN).to_string(), "NaN");
    }

    #[test]
    fn test_json_boundary() {
        let value: Value = serde_json::from_str(r#"{"name":"cabbage","price":1,"tags":[null,2.5]}"#)
            .unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("name").and_then(Value::as_str), Some("cabbage"));
        assert_eq!(obj.get("price").and_then(Value::as_i64), Some(1));
        assert_eq!(
            obj.get("tags"),
            Some(&Value::Array(vec![
                Some(Value::Null),
                Some(Value::Number(Number::Float(2.5)))
            ]))
        );

        // Holes and undefined have no JSON spelling; both become null
        let sparse = Value::Array(vec![Some(Value::from(1)), None, Some(Value::Undefined)]);
        assert_eq!(serde_json::to_string(&sparse).unwrap(), "[1,null,null]");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::Bool(false).kind(), "boolean");
        assert_eq!(Value::from("x").kind(), "string");
        assert_eq!(Value::Object(Map::new()).kind(), "object");
    }
}
