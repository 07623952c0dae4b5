//! Validation error records and message templates.
//!
//! Failures are accumulated as data, never raised: every check appends a
//! [`ValidationError`] to its sink and reports `false` to its caller. The
//! boolean is the only control-flow signal that crosses the validation
//! boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract failure category, independent of the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Payload absent, unparseable, or a required value left unspecified.
    MissingOrUndecodable,
    /// Value not found in an expected code set or literal list.
    NotInAllowedSet,
    /// Field-name set does not match any admissible shape for the frequency.
    ShapeMismatch,
    /// A field is populated where the rules require it to be absent.
    ExpectedEmpty,
    /// A structured object was expected.
    ExpectedObject,
    /// Catch-all for an unresolved or otherwise inapplicable rule.
    GenericInvalid,
}

impl ErrorKind {
    /// Returns the category name used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingOrUndecodable => "missing_or_undecodable",
            ErrorKind::NotInAllowedSet => "not_in_allowed_set",
            ErrorKind::ShapeMismatch => "shape_mismatch",
            ErrorKind::ExpectedEmpty => "expected_empty",
            ErrorKind::ExpectedObject => "expected_object",
            ErrorKind::GenericInvalid => "generic_invalid",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Fixed message templates. Callers surface these verbatim.
pub(crate) const MSG_SPECIFY: &str = "Value should be specified.";
pub(crate) const MSG_CANT_DECODE: &str = "Can't decode value. Invalid format.";
pub(crate) const MSG_OBJECT: &str = "The value should be an object.";
pub(crate) const MSG_EMPTY: &str = "The value should be empty.";
pub(crate) const MSG_INVALID: &str = "Invalid value.";

/// One recorded validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Failure category.
    pub kind: ErrorKind,
    /// Fixed-template message for rendering.
    pub message: String,
    /// Dotted path of the offending field, e.g. `scheduler_options.period`.
    pub field: String,
    /// Numeric code; `-1` until distinct codes are assigned.
    pub code: i32,
}

impl ValidationError {
    /// Creates an error with the default `-1` code.
    pub fn new(kind: ErrorKind, message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: field.into(),
            code: -1,
        }
    }

    /// Raw value was absent or failed to decode.
    pub fn cant_decode(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingOrUndecodable, MSG_CANT_DECODE, field)
    }

    /// A required value was left unspecified.
    pub fn not_specified(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingOrUndecodable, MSG_SPECIFY, field)
    }

    /// Value (or one of its elements) is outside the admissible set.
    pub fn not_in_set<S: AsRef<str>>(set: &[S], field: impl Into<String>) -> Self {
        let joined = set
            .iter()
            .map(|item| item.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(
            ErrorKind::NotInAllowedSet,
            format!("Value should be in the set {{{joined}}}."),
            field,
        )
    }

    /// No admissible shape matches the provided field names.
    pub fn shape_mismatch(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::ShapeMismatch, MSG_INVALID, field)
    }

    /// A value is present where the rules require none.
    pub fn expected_empty(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpectedEmpty, MSG_EMPTY, field)
    }

    /// A structured object was expected.
    pub fn expected_object(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpectedObject, MSG_OBJECT, field)
    }

    /// A rule could not be applied to the value.
    pub fn invalid(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::GenericInvalid, MSG_INVALID, field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
