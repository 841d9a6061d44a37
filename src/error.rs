//! Error types for value conversion.
//!
//! The helper functions never fail: every expected shape mismatch resolves to a
//! documented fallback. Errors only show up at the edges where a conversion
//! genuinely cannot produce a value:
//!
//! - **Type Mismatches**: `TryFrom<Value>` for a primitive that the value does not hold
//! - **Unsupported Types**: Rust shapes [`crate::to_value`] has no representation for
//! - **Custom**: messages raised through serde's `ser::Error`/`de::Error`
//!
//! ## Examples
//!
//! ```rust
//! use loosely::{Error, Value};
//! use std::convert::TryFrom;
//!
//! let result = bool::try_from(Value::from("yes"));
//! assert!(matches!(result, Err(Error::TypeMismatch { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while converting values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The value held a different kind than the caller asked for
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported type for conversion into a value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for shapes that cannot become a value.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates a plain message error.
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
