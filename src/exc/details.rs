use std::fmt;

use smallvec::SmallVec;

use crate::types::TypeTag;
use crate::value::Value;

/// Tag names requested by one check, in the order given.
pub type CheckedTags = SmallVec<[&'static str; 4]>;

/// Record of the first failed type check.
///
/// Built once per failing [`check`](super::check) and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct AssertionDetails {
    /// The offending value.
    pub value: Value,
    /// The first tag the value failed.
    pub tag: TypeTag,
    /// Name of the failing tag.
    pub expected: &'static str,
    /// Runtime category of the value (see [`Value::type_name`]).
    pub actual: &'static str,
    /// Every tag name originally requested.
    pub checked: CheckedTags,
}

impl AssertionDetails {
    pub(crate) fn new(value: &Value, tag: TypeTag, tags: &[TypeTag]) -> Self {
        Self {
            value: value.clone(),
            tag,
            expected: tag.name(),
            actual: value.type_name(),
            checked: tags.iter().map(|tag| tag.name()).collect(),
        }
    }
}

impl fmt::Display for AssertionDetails {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "expected {}, got {} (checked: {})",
            self.expected,
            self.actual,
            self.checked.join(", ")
        )
    }
}

/// Formatter producing the [`Display`](fmt::Display) rendering of the details.
///
/// ```rust
/// use lambdascript::exc::{check, default_message};
/// use lambdascript::types::TypeTag;
/// use lambdascript::value::Value;
///
/// let assertion = check(&Value::Null, &[TypeTag::NonValue, TypeTag::String]);
/// let error = assertion.fail_hard(default_message).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "type mismatch: expected string, got null (checked: non-value, string)"
/// );
/// ```
pub fn default_message(details: &AssertionDetails) -> String {
    details.to_string()
}
