use std::fmt;
use std::str::FromStr;

use super::predicates;
use crate::value::Value;

/// Signature shared by every registry predicate.
pub type Predicate = fn(&Value) -> bool;

/// The closed set of recognized type categories.
///
/// A tag carries no behavior of its own; [`TypeTag::predicate`] looks up the
/// registry entry for it. The lookup is an exhaustive `match`, so every tag
/// has exactly one predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// Text.
    String,
    /// Sequential collection.
    Array,
    /// Arbitrary-precision integer.
    BigInt,
    /// Logical true/false.
    Boolean,
    /// Callable.
    Function,
    /// Number without fractional part.
    Integer,
    /// The not-a-number sentinel.
    NaN,
    /// Number other than `NaN`.
    Numeric,
    /// `null`.
    Null,
    /// Keyed mapping, arrays excluded.
    Object,
    /// Unique identifier token.
    Symbol,
    /// `undefined`.
    Undefined,
    /// `undefined`, `null` or `NaN`.
    NonValue,
    /// Any number, `NaN` included.
    AnyNumber,
    /// Any keyed container, arrays included.
    AnyObject,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::String,
        Self::Array,
        Self::BigInt,
        Self::Boolean,
        Self::Function,
        Self::Integer,
        Self::NaN,
        Self::Numeric,
        Self::Null,
        Self::Object,
        Self::Symbol,
        Self::Undefined,
        Self::NonValue,
        Self::AnyNumber,
        Self::AnyObject,
    ];

    /// Returns the stable name of this tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array => "array",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Integer => "integer",
            Self::NaN => "nan",
            Self::Numeric => "numeric",
            Self::Null => "null",
            Self::Object => "object",
            Self::Symbol => "symbol",
            Self::Undefined => "undefined",
            Self::NonValue => "non-value",
            Self::AnyNumber => "any-number",
            Self::AnyObject => "any-object",
        }
    }

    /// Returns the registry predicate for this tag.
    pub const fn predicate(self) -> Predicate {
        match self {
            Self::String => predicates::is_string,
            Self::Array => predicates::is_array,
            Self::BigInt => predicates::is_bigint,
            Self::Boolean => predicates::is_boolean,
            Self::Function => predicates::is_function,
            Self::Integer => predicates::is_integer,
            Self::NaN => predicates::is_nan,
            Self::Numeric => predicates::is_numeric,
            Self::Null => predicates::is_null,
            Self::Object => predicates::is_object,
            Self::Symbol => predicates::is_symbol,
            Self::Undefined => predicates::is_undefined,
            Self::NonValue => predicates::is_non_value,
            Self::AnyNumber => predicates::is_any_number,
            Self::AnyObject => predicates::is_any_object,
        }
    }

    /// Applies this tag's predicate to a value.
    ///
    /// ```rust
    /// use lambdascript::types::TypeTag;
    /// use lambdascript::value::Value;
    ///
    /// assert!(TypeTag::AnyNumber.test(&Value::NAN));
    /// assert!(!TypeTag::Numeric.test(&Value::NAN));
    /// ```
    #[inline]
    pub fn test(self, value: &Value) -> bool {
        (self.predicate())(value)
    }

    /// Looks a tag up by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Error returned when a name or token matches no [`TypeTag`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag: {token}")]
pub struct UnknownTag {
    /// Rendering of the token that failed to resolve.
    pub token: String,
}

impl UnknownTag {
    /// Creates a new `UnknownTag` for the given token rendering.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl FromStr for TypeTag {
    type Err = UnknownTag;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| UnknownTag::new(name))
    }
}

impl TryFrom<&Value> for TypeTag {
    type Error = UnknownTag;

    /// Resolves a runtime tag token.
    ///
    /// `undefined` and `null` resolve by identity before any name lookup;
    /// symbols resolve through their description and strings through their
    /// text.
    fn try_from(token: &Value) -> Result<Self, Self::Error> {
        match token {
            Value::Undefined => Ok(Self::Undefined),
            Value::Null => Ok(Self::Null),
            Value::Symbol(symbol) => symbol
                .description()
                .and_then(Self::from_name)
                .ok_or_else(|| UnknownTag::new(symbol.to_string())),
            Value::String(name) => name.parse(),
            other => Err(UnknownTag::new(other.to_string())),
        }
    }
}

/// Looks a registry predicate up by tag name.
pub fn predicate_for(name: &str) -> Option<Predicate> {
    TypeTag::from_name(name).map(TypeTag::predicate)
}

static_assertions::assert_impl_all!(TypeTag: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;
    use rstest::rstest;

    #[rstest]
    fn test_names_round_trip_for_every_tag() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.name().parse::<TypeTag>(), Ok(tag));
        }
    }

    #[rstest]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = TypeTag::ALL.iter().map(|tag| tag.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TypeTag::ALL.len());
    }

    #[rstest]
    fn test_unknown_name() {
        let error = "float".parse::<TypeTag>().unwrap_err();
        assert_eq!(error.to_string(), "unknown type tag: float");
    }

    #[rstest]
    #[case(Value::Undefined, TypeTag::Undefined)]
    #[case(Value::Null, TypeTag::Null)]
    #[case(Value::from(Symbol::new("integer")), TypeTag::Integer)]
    #[case(Value::from("any-object"), TypeTag::AnyObject)]
    fn test_token_resolution(#[case] token: Value, #[case] expected: TypeTag) {
        assert_eq!(TypeTag::try_from(&token), Ok(expected));
    }

    #[rstest]
    #[case(Value::from(Symbol::anonymous()))]
    #[case(Value::from(Symbol::new("float")))]
    #[case(Value::from(3))]
    fn test_token_resolution_fails(#[case] token: Value) {
        assert!(TypeTag::try_from(&token).is_err());
    }

    #[rstest]
    fn test_predicate_for() {
        let is_numeric = predicate_for("numeric").unwrap();
        assert!(is_numeric(&Value::from(1)));
        assert!(predicate_for("float").is_none());
    }
}
