//! Error types for Failable

use std::fmt;

use thiserror::Error;

/// Error produced when a value does not satisfy a validation rule.
///
/// Every variant exposes a machine readable [`identifier`](Self::identifier)
/// and a human readable [`reason`](Self::reason).
///
/// # Examples
///
/// ```
/// use failable_core::ValidationError;
///
/// let err = ValidationError::new("valueTooSmall", "Value passed in is less than 1000");
/// assert_eq!(err.identifier(), "valueTooSmall");
/// assert_eq!(err.to_string(), "valueTooSmall: Value passed in is less than 1000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A domain rule rejected the value.
    #[error("{identifier}: {reason}")]
    Rule { identifier: String, reason: String },

    /// Type-erased dispatch received a value of the wrong type.
    #[error("invalidType: Cannot convert value to rule supported type `{expected}`")]
    InvalidType { expected: &'static str },

    /// Both operands of a combination were already invalid.
    #[error(transparent)]
    Joined(#[from] JoinedError),
}

impl ValidationError {
    /// Creates a rule violation with the given identifier and reason.
    pub fn new(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Rule {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Creates the error reported when a value cannot be downcast to `T`.
    pub fn invalid_type<T: ?Sized>() -> Self {
        ValidationError::InvalidType {
            expected: std::any::type_name::<T>(),
        }
    }

    /// Joins two independent failures into one error.
    pub fn joined(left: ValidationError, right: ValidationError) -> Self {
        ValidationError::Joined(JoinedError::new(left, right))
    }

    /// Returns the machine readable identifier.
    pub fn identifier(&self) -> &str {
        match self {
            ValidationError::Rule { identifier, .. } => identifier,
            ValidationError::InvalidType { .. } => "invalidType",
            ValidationError::Joined(_) => "joinedFailure",
        }
    }

    /// Returns the human readable reason.
    pub fn reason(&self) -> String {
        match self {
            ValidationError::Rule { reason, .. } => reason.clone(),
            ValidationError::InvalidType { expected } => {
                format!("Cannot convert value to rule supported type `{}`", expected)
            }
            ValidationError::Joined(joined) => joined.to_string(),
        }
    }

    /// Returns true if this error joins two failures.
    pub fn is_joined(&self) -> bool {
        matches!(self, ValidationError::Joined(_))
    }

    pub(crate) fn length_too_long(max: usize) -> Self {
        Self::new(
            "lengthTooLong",
            format!("Length of collection value is greater than {}", max),
        )
    }

    pub(crate) fn length_too_short(min: usize) -> Self {
        Self::new(
            "lengthTooShort",
            format!("Length of collection value is less than {}", min),
        )
    }

    pub(crate) fn value_too_great(max: impl fmt::Display) -> Self {
        Self::new(
            "valueTooGreat",
            format!("Value passed in is greater than {}", max),
        )
    }

    pub(crate) fn value_too_small(min: impl fmt::Display) -> Self {
        Self::new("valueTooSmall", format!("Value passed in is less than {}", min))
    }

    pub(crate) fn no_regex_match(pattern: &str) -> Self {
        Self::new(
            "noRegexMatch",
            format!("Unable to find match for pattern `{}` in value", pattern),
        )
    }

    pub(crate) fn value_is_nil() -> Self {
        Self::new("valueIsNil", "Expected value to exist. Found `None` instead.")
    }

    pub(crate) fn unexpected_nil<T: ?Sized>() -> Self {
        Self::new(
            "unexpectedNil",
            format!(
                "Cannot initialize value of type `{}` from `None`",
                std::any::type_name::<T>()
            ),
        )
    }

    pub(crate) fn invalid_magnitude() -> Self {
        Self::new(
            "invalidMagnitude",
            "A number's magnitude must be a valid absolute value, i.e. never negative.",
        )
    }

    pub(crate) fn invalid_bounds(start: impl fmt::Debug, end: impl fmt::Debug) -> Self {
        Self::new(
            "invalidBounds",
            format!("Range start {:?} is greater than range end {:?}", start, end),
        )
    }

    pub(crate) fn division_by_zero() -> Self {
        Self::new("divisionByZero", "Checked division received a zero divisor")
    }

    pub(crate) fn assignment_interrupted() -> Self {
        Self::new(
            "assignmentInterrupted",
            "Compound assignment did not complete; the previous value was lost",
        )
    }

    pub(crate) fn arithmetic_overflow(op: &str) -> Self {
        Self::new(
            "arithmeticOverflow",
            format!("Checked {} overflowed the value type", op),
        )
    }
}

/// Simultaneous failure of both inputs to a combination.
///
/// Displays as `(left|right)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedError {
    left: Box<ValidationError>,
    right: Box<ValidationError>,
}

impl JoinedError {
    /// Creates a new joined error.
    pub fn new(left: ValidationError, right: ValidationError) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns the error held by the left operand.
    pub fn left(&self) -> &ValidationError {
        &self.left
    }

    /// Returns the error held by the right operand.
    pub fn right(&self) -> &ValidationError {
        &self.right
    }
}

impl fmt::Display for JoinedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{})", self.left, self.right)
    }
}

impl std::error::Error for JoinedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.left.as_ref())
    }
}

/// Result type alias for validation outcomes.
pub type ValidationResult<T = ()> = std::result::Result<T, ValidationError>;

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Deserializer;
    use serde::ser::{SerializeStruct, Serializer};
    use serde::{Deserialize, Serialize};

    use super::ValidationError;

    impl Serialize for ValidationError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("ValidationError", 2)?;
            state.serialize_field("identifier", self.identifier())?;
            state.serialize_field("reason", &self.reason())?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    struct Wire {
        identifier: String,
        reason: String,
    }

    impl<'de> Deserialize<'de> for ValidationError {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let wire = Wire::deserialize(deserializer)?;
            Ok(ValidationError::new(wire.identifier, wire.reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_accessors() {
        let err = ValidationError::new("id", "I gotta reason");
        assert_eq!(err.identifier(), "id");
        assert_eq!(err.reason(), "I gotta reason");
        assert!(!err.is_joined());
    }

    #[test]
    fn test_invalid_type() {
        let err = ValidationError::invalid_type::<bool>();
        assert_eq!(err.identifier(), "invalidType");
        assert_eq!(
            err.reason(),
            "Cannot convert value to rule supported type `bool`"
        );
    }

    #[test]
    fn test_joined_display() {
        let err = ValidationError::joined(
            ValidationError::new("a", "left failed"),
            ValidationError::new("b", "right failed"),
        );
        assert_eq!(err.identifier(), "joinedFailure");
        assert_eq!(err.to_string(), "(a: left failed|b: right failed)");
        assert!(err.is_joined());
    }

    #[test]
    fn test_joined_parts() {
        let joined = JoinedError::new(
            ValidationError::new("a", "x"),
            ValidationError::new("b", "y"),
        );
        assert_eq!(joined.left().identifier(), "a");
        assert_eq!(joined.right().identifier(), "b");
        assert!(std::error::Error::source(&joined).is_some());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(ValidationError::new("a", "x"), ValidationError::new("a", "x"));
        assert_ne!(ValidationError::new("a", "x"), ValidationError::new("a", "y"));
    }
}
