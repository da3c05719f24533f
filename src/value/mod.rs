//! Dynamic values classified by the type predicates.
//!
//! [`Value`] models a value of unknown shape: the predicates in
//! [`crate::types`] and the assertion engine in [`crate::exc`] inspect it
//! without ever mutating it.
//!
//! # Examples
//!
//! ```rust
//! use lambdascript::value::{Symbol, Value};
//!
//! let values = [
//!     Value::Undefined,
//!     Value::Null,
//!     Value::from(true),
//!     Value::from(2.5),
//!     Value::bigint(10),
//!     Value::from("text"),
//!     Value::from(Symbol::new("token")),
//!     Value::array([Value::from(1), Value::from(2)]),
//!     Value::object([("key", Value::from(1))]),
//! ];
//!
//! let names: Vec<&str> = values.iter().map(Value::type_name).collect();
//! assert_eq!(
//!     names,
//!     ["undefined", "null", "boolean", "number", "bigint", "string", "symbol", "object", "object"]
//! );
//! ```

mod function;
mod symbol;

use std::collections::BTreeMap;
use std::fmt;

pub use function::Function;
pub use symbol::Symbol;

/// A value of unknown shape.
///
/// Numbers are IEEE-754 doubles, so the not-a-number sentinel is an ordinary
/// [`Value::Number`]. Equality follows strict equality: `NaN` is not equal to
/// itself, symbols and functions compare by identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The "never assigned" sentinel.
    #[default]
    Undefined,
    /// The "intentionally absent" sentinel.
    Null,
    /// Logical true/false.
    Boolean(bool),
    /// Ordinary numeric value, `NaN` included.
    Number(f64),
    /// Arbitrary-precision integer, distinct from [`Value::Number`].
    BigInt(i128),
    /// Text.
    String(String),
    /// Unique opaque identifier token.
    Symbol(Symbol),
    /// Callable value.
    Function(Function),
    /// Sequential, index-ordered collection.
    Array(Vec<Self>),
    /// Keyed mapping container.
    Object(BTreeMap<String, Self>),
}

impl Value {
    /// The not-a-number sentinel.
    pub const NAN: Self = Self::Number(f64::NAN);

    /// Creates a [`Value::BigInt`].
    #[inline]
    pub const fn bigint(value: i128) -> Self {
        Self::BigInt(value)
    }

    /// Creates a [`Value::Array`] from any sequence of values.
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Array(elements.into_iter().collect())
    }

    /// Creates a [`Value::Object`] from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Creates a [`Value::Function`] from a closure.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&[Self]) -> Self + Send + Sync + 'static,
    {
        Self::Function(Function::new(function))
    }

    /// Returns the runtime category name of this value.
    ///
    /// Arrays and mappings both report `"object"`; `null` and `undefined`
    /// report themselves.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Function(_) => "function",
            Self::Array(_) | Self::Object(_) => "object",
        }
    }

    /// Returns the numeric payload, if any.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(flag) => write!(formatter, "{flag}"),
            Self::Number(number) if number.is_nan() => formatter.write_str("NaN"),
            Self::Number(number) if number.is_infinite() => {
                if number.is_sign_positive() {
                    formatter.write_str("Infinity")
                } else {
                    formatter.write_str("-Infinity")
                }
            }
            Self::Number(number) => write!(formatter, "{number}"),
            Self::BigInt(integer) => write!(formatter, "{integer}"),
            Self::String(text) => formatter.write_str(text),
            Self::Symbol(symbol) => write!(formatter, "{symbol}"),
            Self::Function(_) => formatter.write_str("function"),
            Self::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    match element {
                        Self::Undefined | Self::Null => {}
                        other => write!(formatter, "{other}")?,
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_nan_is_not_equal_to_itself() {
        assert_ne!(Value::NAN, Value::NAN);
    }

    #[rstest]
    fn test_default_is_undefined() {
        assert_eq!(Value::default(), Value::Undefined);
    }

    #[rstest]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::Null, "null")]
    #[case(Value::from(5), "5")]
    #[case(Value::from(9.5), "9.5")]
    #[case(Value::NAN, "NaN")]
    #[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::bigint(10), "10")]
    #[case(Value::array([Value::from(1), Value::Null, Value::from("a")]), "1,,a")]
    #[case(Value::object([("k", Value::from(1))]), "[object Object]")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_option_none_becomes_null() {
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Boolean(true));
    }

    #[rstest]
    fn test_functions_compare_by_identity() {
        let function = Value::function(|_| Value::Null);
        let same = function.clone();
        let other = Value::function(|_| Value::Null);

        assert_eq!(function, same);
        assert_ne!(function, other);
    }
}
