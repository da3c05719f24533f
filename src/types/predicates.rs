//! Free-standing type predicates.
//!
//! Each predicate is a pure `fn(&Value) -> bool`: it never panics and never
//! mutates its input.

use crate::value::Value;

/// Returns `true` if the value is text.
#[inline]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Returns `true` if the value is a sequential collection.
#[inline]
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns `true` if the value is an arbitrary-precision integer.
#[inline]
pub const fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

/// Returns `true` if the value is a boolean.
#[inline]
pub const fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

/// Returns `true` if the value is callable.
#[inline]
pub const fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Returns `true` if the value is a finite number with no fractional part.
///
/// ```rust
/// use lambdascript::types::is_integer;
/// use lambdascript::value::Value;
///
/// assert!(is_integer(&Value::from(10)));
/// assert!(is_integer(&Value::from(-5)));
/// assert!(!is_integer(&Value::from(2.5)));
/// assert!(!is_integer(&Value::from(f64::INFINITY)));
/// assert!(!is_integer(&Value::bigint(10)));
/// ```
#[inline]
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) => number.is_finite() && number.fract() == 0.0,
        _ => false,
    }
}

/// Returns `true` if the value is the not-a-number sentinel.
#[inline]
pub const fn is_nan(value: &Value) -> bool {
    match value {
        Value::Number(number) => number.is_nan(),
        _ => false,
    }
}

/// Returns `true` if the value is a number other than `NaN`.
#[inline]
pub const fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(number) => !number.is_nan(),
        _ => false,
    }
}

/// Returns `true` if the value is `null`.
#[inline]
pub const fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Returns `true` if the value is a keyed mapping. Arrays are excluded.
#[inline]
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns `true` if the value is a symbol.
#[inline]
pub const fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// Returns `true` if the value is `undefined`.
#[inline]
pub const fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// Returns `true` if the value is `undefined`, `null` or `NaN`.
///
/// ```rust
/// use lambdascript::types::is_non_value;
/// use lambdascript::value::Value;
///
/// assert!(is_non_value(&Value::Undefined));
/// assert!(is_non_value(&Value::Null));
/// assert!(is_non_value(&Value::NAN));
///
/// assert!(!is_non_value(&Value::from(0)));
/// assert!(!is_non_value(&Value::from("")));
/// assert!(!is_non_value(&Value::from(false)));
/// ```
#[inline]
pub const fn is_non_value(value: &Value) -> bool {
    is_undefined(value) || is_null(value) || is_nan(value)
}

/// Returns `true` if the value is anything other than a non-value.
#[inline]
pub const fn is_present(value: &Value) -> bool {
    !is_non_value(value)
}

/// Returns `true` if the value is a number, `NaN` included.
#[inline]
pub const fn is_any_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Returns `true` if the value is a keyed container, arrays included.
#[inline]
pub const fn is_any_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
