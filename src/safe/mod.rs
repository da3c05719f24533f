//! Safe-Coercion Guards.
//!
//! Each guard returns its input when it satisfies one predicate and a
//! fallback otherwise. A [`Fallback`] is either a literal value, returned as
//! is, or a producer whose output is re-checked and replaced by [`EMPTY`] when
//! it fails too. The guards never fail.
//!
//! # Examples
//!
//! ```rust
//! use lambdascript::safe::{self, EMPTY, Fallback};
//! use lambdascript::value::Value;
//!
//! assert_eq!(safe::str(&Value::from("kept"), Fallback::default()), Value::from("kept"));
//! assert_eq!(safe::str(&Value::from(123), "default value"), Value::from("default value"));
//!
//! let describe = Fallback::produce(|value| Value::from(format!("Value is: {value}")));
//! assert_eq!(safe::str(&Value::Null, describe), Value::from("Value is: null"));
//!
//! let echo = Fallback::produce(Value::clone);
//! assert_eq!(safe::str(&Value::object([("k", Value::Null)]), echo), EMPTY);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::types::{Predicate, is_integer, is_numeric, is_string};
use crate::value::Value;

/// The empty-string placeholder.
pub const EMPTY: Value = Value::String(String::new());

/// Replacement used by a guard when the value fails its predicate.
#[derive(Clone)]
pub enum Fallback {
    /// Returned unchanged.
    Literal(Value),
    /// Called with the rejected value; its output must pass the predicate.
    Produce(Arc<dyn Fn(&Value) -> Value + Send + Sync>),
}

impl Fallback {
    /// Creates a producer fallback.
    pub fn produce<F>(producer: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::Produce(Arc::new(producer))
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Self::Literal(EMPTY)
    }
}

impl fmt::Debug for Fallback {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => formatter.debug_tuple("Literal").field(value).finish(),
            Self::Produce(_) => formatter.debug_tuple("Produce").field(&"<producer>").finish(),
        }
    }
}

impl From<Value> for Fallback {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

macro_rules! literal_fallback {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for Fallback {
                fn from(value: $source) -> Self {
                    Self::Literal(Value::from(value))
                }
            }
        )+
    };
}

literal_fallback!(bool, f64, i32, u32, &str, String);

fn guard(value: &Value, fallback: Fallback, predicate: Predicate) -> Value {
    if predicate(value) {
        return value.clone();
    }
    match fallback {
        Fallback::Literal(placeholder) => placeholder,
        Fallback::Produce(producer) => {
            let produced = producer(value);
            if predicate(&produced) { produced } else { EMPTY }
        }
    }
}

/// Guards against non-string values.
pub fn str(value: &Value, fallback: impl Into<Fallback>) -> Value {
    guard(value, fallback.into(), is_string)
}

/// Guards against values that are not numbers, or are `NaN`.
///
/// ```rust
/// use lambdascript::safe::{self, EMPTY, Fallback};
/// use lambdascript::value::Value;
///
/// assert_eq!(safe::numeric(&Value::from(2.5), 0), Value::from(2.5));
/// assert_eq!(safe::numeric(&Value::NAN, 0), Value::from(0));
///
/// let text = Fallback::produce(|_| Value::from("not a number"));
/// assert_eq!(safe::numeric(&Value::object([("k", Value::Null)]), text), EMPTY);
/// ```
pub fn numeric(value: &Value, fallback: impl Into<Fallback>) -> Value {
    guard(value, fallback.into(), is_numeric)
}

/// Guards against values that are not integral numbers.
pub fn int(value: &Value, fallback: impl Into<Fallback>) -> Value {
    guard(value, fallback.into(), is_integer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_literal_fallback_is_not_rechecked() {
        assert_eq!(int(&Value::from(2.5), "zero"), Value::from("zero"));
    }

    #[rstest]
    fn test_default_fallback_is_empty() {
        assert_eq!(numeric(&Value::from("1"), Fallback::default()), EMPTY);
    }

    #[rstest]
    fn test_producer_is_not_called_for_valid_value() {
        let fallback = Fallback::produce(|_| unreachable!("valid input must be returned as is"));
        assert_eq!(int(&Value::from(10), fallback), Value::from(10));
    }

    #[rstest]
    fn test_producer_receives_rejected_value() {
        let parse = Fallback::produce(|value| {
            value
                .as_str()
                .and_then(|text| text.parse::<i32>().ok())
                .map_or(Value::NAN, Value::from)
        });
        assert_eq!(int(&Value::from("5"), parse.clone()), Value::from(5));
        assert_eq!(int(&Value::from("five"), parse), EMPTY);
    }
}
