//! Configuration options for numeric coercion.
//!
//! [`NumberOptions`] controls how [`crate::to_number_with`] reads text. The
//! defaults match [`crate::to_number`]:
//!
//! - surrounding whitespace (and a byte order mark) is trimmed
//! - `0b`, `0o` and `0x` prefixes select base 2, 8 and 16
//! - `Infinity` / `-Infinity` are accepted
//! - blank text coerces to `0`
//!
//! ## Examples
//!
//! ```rust
//! use loosely::{to_number_with, Number, NumberOptions, Value};
//!
//! let hex = Value::from("0x1f");
//! assert_eq!(to_number_with(&hex, &NumberOptions::new()), Number::Integer(31));
//!
//! // Only plain decimal text, nothing implicit
//! let strict = NumberOptions::strict();
//! assert_eq!(to_number_with(&hex, &strict), Number::NaN);
//! assert_eq!(to_number_with(&Value::from(""), &strict), Number::NaN);
//! ```

/// Knobs for turning text into a [`crate::Number`].
///
/// # Examples
///
/// ```rust
/// use loosely::NumberOptions;
///
/// let options = NumberOptions::new()
///     .with_radix_prefixes(false)
///     .with_blank_as_zero(false);
/// assert!(options.trim);
/// assert!(!options.radix_prefixes);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberOptions {
    pub trim: bool,
    pub radix_prefixes: bool,
    pub infinity_literals: bool,
    pub blank_as_zero: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        NumberOptions {
            trim: true,
            radix_prefixes: true,
            infinity_literals: true,
            blank_as_zero: true,
        }
    }
}

impl NumberOptions {
    /// Creates the default options used by [`crate::to_number`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loosely::NumberOptions;
    ///
    /// let options = NumberOptions::new();
    /// assert!(options.radix_prefixes);
    /// assert!(options.blank_as_zero);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that accept only untrimmed decimal text.
    ///
    /// Radix prefixes, infinity literals and blank-as-zero are all off.
    #[must_use]
    pub fn strict() -> Self {
        NumberOptions {
            trim: false,
            radix_prefixes: false,
            infinity_literals: false,
            blank_as_zero: false,
        }
    }

    /// Sets whether surrounding whitespace and U+FEFF are removed before parsing.
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Sets whether `0b`, `0o` and `0x` prefixed text is read in that base.
    #[must_use]
    pub fn with_radix_prefixes(mut self, enabled: bool) -> Self {
        self.radix_prefixes = enabled;
        self
    }

    /// Sets whether `Infinity`, `+Infinity` and `-Infinity` are accepted.
    #[must_use]
    pub fn with_infinity_literals(mut self, enabled: bool) -> Self {
        self.infinity_literals = enabled;
        self
    }

    /// Sets whether empty (or, when trimming, all-whitespace) text becomes `0`.
    ///
    /// When disabled, blank text is NaN.
    #[must_use]
    pub fn with_blank_as_zero(mut self, enabled: bool) -> Self {
        self.blank_as_zero = enabled;
        self
    }
}
