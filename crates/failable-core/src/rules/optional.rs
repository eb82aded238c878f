//! Rules for optional values.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{ValidationError, ValidationResult};
use crate::rule::{RuleRunner, ValidationRule};

/// Requires an `Option` to be `Some`; `None` fails with `valueIsNil`.
pub struct NotNone<U>(PhantomData<fn() -> U>);

impl<U> NotNone<U> {
    /// Creates the rule.
    pub const fn new() -> Self {
        NotNone(PhantomData)
    }
}

impl<U: 'static> ValidationRule for NotNone<U> {
    type Supported = Option<U>;

    fn validate(&self, value: &Option<U>) -> ValidationResult {
        match value {
            Some(_) => Ok(()),
            None => Err(ValidationError::value_is_nil()),
        }
    }
}

impl<U> Default for NotNone<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Clone for NotNone<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for NotNone<U> {}

impl<U> fmt::Debug for NotNone<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NotNone<{}>", std::any::type_name::<U>())
    }
}

/// Runs `R` on the wrapped value when present; `None` passes.
///
/// ```
/// use failable_core::{IfPresent, LengthRule, ValidationRule};
///
/// let rule = IfPresent::new(LengthRule::<String>::between(10, 1028));
/// assert!(rule.run(&None).is_ok());
/// assert!(rule.run(&Some("Long long ago".to_string())).is_ok());
/// assert!(rule.run(&Some("x".repeat(9))).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IfPresent<R> {
    inner: R,
}

impl<R> IfPresent<R> {
    /// Wraps `inner`.
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// The rule applied to present values.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: ValidationRule> ValidationRule for IfPresent<R> {
    type Supported = Option<R::Supported>;

    fn validate(&self, value: &Option<R::Supported>) -> ValidationResult {
        match value {
            Some(present) => RuleRunner::run(&self.inner, present),
            None => Ok(()),
        }
    }
}
