//! Type Predicate Registry.
//!
//! This module answers "does value V satisfy category C?" for a fixed,
//! closed set of categories:
//!
//! | tag | holds when |
//! |---|---|
//! | `string` | the value is text |
//! | `array` | the value is a sequential collection |
//! | `bigint` | the value is an arbitrary-precision integer |
//! | `boolean` | the value is true/false |
//! | `function` | the value is callable |
//! | `integer` | the value is a number with no fractional part |
//! | `nan` | the value is the not-a-number sentinel |
//! | `numeric` | the value is a number and not `NaN` |
//! | `null` | the value is `null` |
//! | `object` | the value is a keyed mapping, arrays excluded |
//! | `symbol` | the value is a unique identifier token |
//! | `undefined` | the value is `undefined` |
//! | `non-value` | the value is `undefined`, `null` or `NaN` |
//! | `any-number` | the value is a number, `NaN` included |
//! | `any-object` | the value is a keyed container, arrays included |
//!
//! `NaN` is at once "numeric type" and "not a valid number": `numeric`
//! excludes it, `any-number` includes it. Likewise `object` excludes arrays
//! while `any-object` includes them.
//!
//! # Examples
//!
//! ```rust
//! use lambdascript::types::{TypeTag, is_any_object, is_object};
//! use lambdascript::value::Value;
//!
//! let list = Value::array([]);
//! assert!(!is_object(&list));
//! assert!(is_any_object(&list));
//!
//! let tag: TypeTag = "any-object".parse().unwrap();
//! assert!(tag.test(&list));
//! ```

mod predicates;
mod tag;

pub use predicates::{
    is_any_number, is_any_object, is_array, is_bigint, is_boolean, is_function, is_integer,
    is_nan, is_non_value, is_null, is_numeric, is_object, is_present, is_string, is_symbol,
    is_undefined,
};
pub use tag::{Predicate, TypeTag, UnknownTag, predicate_for};
