//! Type Assertion Engine.
//!
//! [`check`] runs an ordered list of [`TypeTag`]s against a value and keeps a
//! record of the first one that fails. The resulting [`Assertion`] never
//! decides how loud the failure is; the caller picks one of three reports:
//!
//! - [`Assertion::query`]: error-level diagnostic, returns `false`
//! - [`Assertion::warn`]: warning-level diagnostic, returns `false`
//! - [`Assertion::fail_hard`]: returns [`TypeMismatch`] for the caller to
//!   propagate with `?`
//!
//! All three return success without calling the formatter when every check
//! passed.
//!
//! # Examples
//!
//! ```rust
//! use lambdascript::exc::{TypeMismatch, check};
//! use lambdascript::types::TypeTag;
//! use lambdascript::value::Value;
//!
//! fn shout(value: &Value) -> Result<String, TypeMismatch> {
//!     check(value, &[TypeTag::String]).fail_hard(|details| {
//!         format!("shout needs {}, got {}", details.expected, details.actual)
//!     })?;
//!     Ok(value.as_str().unwrap_or_default().to_uppercase())
//! }
//!
//! assert_eq!(shout(&Value::from("hi")).unwrap(), "HI");
//! assert_eq!(
//!     shout(&Value::Null).unwrap_err().message,
//!     "shout needs string, got null"
//! );
//! ```

mod details;
mod sink;

pub use details::{AssertionDetails, CheckedTags, default_message};
pub use sink::{DiagnosticSink, Level, RecordingSink, TracingSink};

use crate::types::{TypeTag, UnknownTag};
use crate::value::Value;

/// Error produced by [`Assertion::fail_hard`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("type mismatch: {message}")]
pub struct TypeMismatch {
    /// Output of the caller's formatter.
    pub message: String,
    /// The failed check.
    pub details: AssertionDetails,
}

/// How loudly [`Assertion::report`] surfaces a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Error-level diagnostic, boolean result.
    Query,
    /// Warning-level diagnostic, boolean result.
    Warn,
    /// Raised [`TypeMismatch`].
    FailHard,
}

/// Outcome of one [`check`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assertion {
    failure: Option<AssertionDetails>,
}

impl Assertion {
    /// Returns `true` if some tag failed.
    #[inline]
    pub const fn has_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Returns the failure record, if any.
    #[inline]
    pub const fn details(&self) -> Option<&AssertionDetails> {
        self.failure.as_ref()
    }

    /// Reports a failure at error level through `tracing`.
    pub fn query<F>(&self, formatter: F) -> bool
    where
        F: Fn(&AssertionDetails) -> String,
    {
        self.query_to(TracingSink, formatter)
    }

    /// Reports a failure at error level through the given sink.
    pub fn query_to<S, F>(&self, mut sink: S, formatter: F) -> bool
    where
        S: DiagnosticSink,
        F: Fn(&AssertionDetails) -> String,
    {
        match &self.failure {
            None => true,
            Some(details) => {
                sink.error(&formatter(details));
                false
            }
        }
    }

    /// Reports a failure at warning level through `tracing`.
    pub fn warn<F>(&self, formatter: F) -> bool
    where
        F: Fn(&AssertionDetails) -> String,
    {
        self.warn_to(TracingSink, formatter)
    }

    /// Reports a failure at warning level through the given sink.
    pub fn warn_to<S, F>(&self, mut sink: S, formatter: F) -> bool
    where
        S: DiagnosticSink,
        F: Fn(&AssertionDetails) -> String,
    {
        match &self.failure {
            None => true,
            Some(details) => {
                sink.warning(&formatter(details));
                false
            }
        }
    }

    /// Turns a failure into a [`TypeMismatch`] carrying the formatted message.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] if some tag failed.
    pub fn fail_hard<F>(&self, formatter: F) -> Result<(), TypeMismatch>
    where
        F: Fn(&AssertionDetails) -> String,
    {
        match &self.failure {
            None => Ok(()),
            Some(details) => Err(TypeMismatch {
                message: formatter(details),
                details: details.clone(),
            }),
        }
    }

    /// Reports with a caller-selected severity through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] only for [`Severity::FailHard`].
    pub fn report<F>(&self, severity: Severity, formatter: F) -> Result<bool, TypeMismatch>
    where
        F: Fn(&AssertionDetails) -> String,
    {
        self.report_to(TracingSink, severity, formatter)
    }

    /// Reports with a caller-selected severity through the given sink.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] only for [`Severity::FailHard`].
    pub fn report_to<S, F>(
        &self,
        sink: S,
        severity: Severity,
        formatter: F,
    ) -> Result<bool, TypeMismatch>
    where
        S: DiagnosticSink,
        F: Fn(&AssertionDetails) -> String,
    {
        match severity {
            Severity::Query => Ok(self.query_to(sink, formatter)),
            Severity::Warn => Ok(self.warn_to(sink, formatter)),
            Severity::FailHard => self.fail_hard(formatter).map(|()| true),
        }
    }
}

/// Checks `value` against `tags` in order, recording the first failure.
///
/// An empty tag list always passes.
pub fn check(value: &Value, tags: &[TypeTag]) -> Assertion {
    let failure = tags
        .iter()
        .copied()
        .find(|tag| !tag.test(value))
        .map(|tag| AssertionDetails::new(value, tag, tags));
    Assertion { failure }
}

/// Checks `value` against tags given as runtime tokens.
///
/// `Value::Undefined` and `Value::Null` stand for the `undefined` and `null`
/// tags themselves; symbols and strings resolve by tag name.
///
/// ```rust
/// use lambdascript::exc::check_tokens;
/// use lambdascript::value::{Symbol, Value};
///
/// let string_tag = Value::from(Symbol::new("string"));
///
/// let assertion = check_tokens(&Value::Null, &[Value::Null]).unwrap();
/// assert!(!assertion.has_failure());
///
/// let assertion = check_tokens(&Value::Null, &[Value::Null, string_tag]).unwrap();
/// assert_eq!(assertion.details().unwrap().expected, "string");
/// ```
///
/// # Errors
///
/// Returns [`UnknownTag`] for the first token naming no category, before any
/// predicate runs.
pub fn check_tokens(value: &Value, tags: &[Value]) -> Result<Assertion, UnknownTag> {
    let tags = tags
        .iter()
        .map(TypeTag::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(check(value, &tags))
}
