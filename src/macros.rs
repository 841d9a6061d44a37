/// Builds a [`Value`](crate::Value) from literal syntax.
///
/// - `undefined`, `null`, `true`, `false` map to their variants
/// - `[a, _, c]` builds a sequence; `_` leaves a hole at that position
/// - `{"key": value, ...}` builds a record in the written order
/// - anything else goes through `Value::from`
///
/// Array elements and record values must be single token trees, so negative
/// numbers nested inside are written in parentheses: `value!([1, (-2)])`.
///
/// ```rust
/// use loosely::{value, Value};
///
/// let sparse = value!([1, _, 3]);
/// assert_eq!(sparse, Value::Array(vec![Some(Value::from(1)), None, Some(Value::from(3))]));
///
/// let product = value!({ "name": "cabbage", "price": 1, "tags": ["green", (-1)] });
/// assert!(product.is_object());
/// ```
#[macro_export]
macro_rules! value {
    // Sequence slots: `_` is a hole
    (@slot _) => {
        ::std::option::Option::None
    };

    (@slot $elem:tt) => {
        ::std::option::Option::Some($crate::value!($elem))
    };

    (undefined) => {
        $crate::Value::Undefined
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!(@slot $elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
