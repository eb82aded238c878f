//! Constrained value container
//!
//! [`ConstrainedValue`] holds either a value that is known to satisfy its
//! rule, or the error explaining why the last constructed or assigned value
//! did not. The only ways to produce a state are construction and
//! [`assign`](ConstrainedValue::assign), and both run the full rule tree.

mod combine;
mod ops;
#[cfg(feature = "serde")]
mod serde;


pub use combine::{combine, combine_with, try_combine};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::rule::{RuleRunner, ValidationRule};

#[derive(Clone)]
enum State<T> {
    Value(T),
    Error(ValidationError),
}

impl<T> State<T> {
    /// Moves the state out, leaving an `assignmentInterrupted` error behind
    /// until the caller stores the outcome.
    fn take(&mut self) -> ValidationResult<T> {
        let interrupted = State::Error(ValidationError::assignment_interrupted());
        match std::mem::replace(self, interrupted) {
            State::Value(value) => Ok(value),
            State::Error(err) => Err(err),
        }
    }
}

/// A value of type `T` that always satisfies the rule `R`, or the error
/// explaining why it does not.
///
/// # Mutation
///
/// There is no raw setter. [`assign`](Self::assign) runs the rule on the
/// candidate and replaces the whole state with the outcome: an invalid
/// candidate discards the previously valid value and leaves the container
/// in the error state.
///
/// # Examples
///
/// ```
/// use failable_core::{ConstrainedValue, RangeRule};
///
/// let mut pin = ConstrainedValue::with_rule(5_000, RangeRule::between(1_000, 9_999));
/// assert_eq!(pin.get(), Some(&5_000));
///
/// let err = pin.assign(999).unwrap_err();
/// assert_eq!(err.identifier(), "valueTooSmall");
/// assert_eq!(pin.get(), None);
/// assert_eq!(pin.error(), Some(&err));
///
/// pin.assign(1_234).unwrap();
/// assert_eq!(pin.get(), Some(&1_234));
/// ```
#[derive(Clone)]
pub struct ConstrainedValue<T, R> {
    state: State<T>,
    rule: R,
}

impl<T, R> ConstrainedValue<T, R>
where
    R: ValidationRule<Supported = T>,
{
    /// Validates `value` with a default-constructed rule.
    pub fn new(value: T) -> Self
    where
        R: Default,
    {
        Self::with_rule(value, R::default())
    }

    /// Validates `value` with the given rule instance.
    pub fn with_rule(value: T, rule: R) -> Self {
        let state = Self::check(&rule, value);
        Self { state, rule }
    }

    /// Validates `value`, returning the error instead of an errored container.
    pub fn try_new(value: T) -> ValidationResult<Self>
    where
        R: Default,
    {
        Self::new(value).verified()
    }

    /// Validates `value` with `rule`, returning the error instead of an
    /// errored container.
    pub fn try_with_rule(value: T, rule: R) -> ValidationResult<Self> {
        Self::with_rule(value, rule).verified()
    }

    /// Validates an optional raw value; `None` produces an `unexpectedNil`
    /// error state.
    pub fn from_option(value: Option<T>) -> Self
    where
        R: Default,
    {
        match value {
            Some(value) => Self::new(value),
            None => Self::failed(ValidationError::unexpected_nil::<T>(), R::default()),
        }
    }

    /// Replaces the state with the outcome of validating `candidate`.
    ///
    /// On failure the previous value is discarded, the error is stored and a
    /// copy of it is returned.
    pub fn assign(&mut self, candidate: T) -> ValidationResult {
        match RuleRunner::run(&self.rule, &candidate) {
            Ok(()) => {
                self.state = State::Value(candidate);
                Ok(())
            }
            Err(err) => {
                debug!(
                    event = "assign_rejected",
                    rule = self.rule.name(),
                    identifier = err.identifier()
                );
                self.state = State::Error(err.clone());
                Err(err)
            }
        }
    }

    /// Re-runs the rule on the held value.
    ///
    /// An errored container returns its stored error unchanged.
    pub fn revalidate(&mut self) -> ValidationResult {
        let outcome = match &self.state {
            State::Value(value) => RuleRunner::run(&self.rule, value),
            State::Error(err) => return Err(err.clone()),
        };
        if let Err(err) = &outcome {
            self.state = State::Error(err.clone());
        }
        outcome
    }

    /// Swaps in a new rule instance and re-validates the held value against it.
    pub fn replace_rule(&mut self, rule: R) -> ValidationResult {
        self.rule = rule;
        self.revalidate()
    }

    /// Transforms the value, keeping the same rule. The result is re-validated.
    pub fn update<F>(self, transform: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        match self.state {
            State::Value(value) => Self::with_rule(transform(value), self.rule),
            State::Error(err) => Self::failed(err, self.rule),
        }
    }

    /// Like [`update`](Self::update) with a fallible transform.
    pub fn try_update<F>(self, transform: F) -> Self
    where
        F: FnOnce(T) -> ValidationResult<T>,
    {
        match self.state {
            State::Value(value) => match transform(value) {
                Ok(value) => Self::with_rule(value, self.rule),
                Err(err) => Self::failed(err, self.rule),
            },
            State::Error(err) => Self::failed(err, self.rule),
        }
    }

    /// Converts the value into a container of another type and rule.
    pub fn map<U, R2, F>(self, transform: F) -> ConstrainedValue<U, R2>
    where
        R2: ValidationRule<Supported = U> + Default,
        F: FnOnce(T) -> U,
    {
        self.map_with(R2::default(), transform)
    }

    /// Converts the value into a container checked by `rule`.
    pub fn map_with<U, R2, F>(self, rule: R2, transform: F) -> ConstrainedValue<U, R2>
    where
        R2: ValidationRule<Supported = U>,
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Value(value) => ConstrainedValue::with_rule(transform(value), rule),
            State::Error(err) => ConstrainedValue::failed(err, rule),
        }
    }

    /// Chains a transform that itself produces a constrained value.
    pub fn and_then<U, R2, F>(self, transform: F) -> ConstrainedValue<U, R2>
    where
        R2: ValidationRule<Supported = U> + Default,
        F: FnOnce(T) -> ConstrainedValue<U, R2>,
    {
        match self.state {
            State::Value(value) => transform(value),
            State::Error(err) => ConstrainedValue::failed(err, R2::default()),
        }
    }

    pub(crate) fn failed(err: ValidationError, rule: R) -> Self {
        Self {
            state: State::Error(err),
            rule,
        }
    }

    fn check(rule: &R, value: T) -> State<T> {
        match RuleRunner::run(rule, &value) {
            Ok(()) => State::Value(value),
            Err(err) => State::Error(err),
        }
    }
}

impl<T, R> ConstrainedValue<T, R> {
    /// The held value, or `None` if the container is in the error state.
    pub fn get(&self) -> Option<&T> {
        match &self.state {
            State::Value(value) => Some(value),
            State::Error(_) => None,
        }
    }

    /// The held error, or `None` if the container holds a valid value.
    pub fn error(&self) -> Option<&ValidationError> {
        match &self.state {
            State::Value(_) => None,
            State::Error(err) => Some(err),
        }
    }

    /// Returns true if the container holds a valid value.
    pub fn is_valid(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// Borrowing view of the state.
    pub fn as_result(&self) -> Result<&T, &ValidationError> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Error(err) => Err(err),
        }
    }

    /// Returns the value, or the stored error.
    pub fn into_result(self) -> ValidationResult<T> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Error(err) => Err(err),
        }
    }

    /// Returns the value, dropping any stored error.
    pub fn into_inner(self) -> Option<T> {
        self.into_result().ok()
    }

    /// Returns the container itself if valid, or its stored error.
    pub fn verified(self) -> ValidationResult<Self> {
        match self.state {
            State::Value(_) => Ok(self),
            State::Error(err) => Err(err),
        }
    }

    /// The rule instance checking this container.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub(crate) fn into_parts(self) -> (Result<T, ValidationError>, R) {
        let state = match self.state {
            State::Value(value) => Ok(value),
            State::Error(err) => Err(err),
        };
        (state, self.rule)
    }
}

impl<T, R> Default for ConstrainedValue<T, R>
where
    T: Default,
    R: ValidationRule<Supported = T> + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug, R> fmt::Debug for ConstrainedValue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => f.debug_tuple("Value").field(value).finish(),
            State::Error(err) => f.debug_tuple("Error").field(err).finish(),
        }
    }
}

impl<T: fmt::Display, R> fmt::Display for ConstrainedValue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => value.fmt(f),
            State::Error(err) => write!(f, "error({})", err),
        }
    }
}

impl<T: PartialEq, R1, R2> PartialEq<ConstrainedValue<T, R2>> for ConstrainedValue<T, R1> {
    fn eq(&self, other: &ConstrainedValue<T, R2>) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq, R> Eq for ConstrainedValue<T, R> {}

impl<T: PartialOrd, R1, R2> PartialOrd<ConstrainedValue<T, R2>> for ConstrainedValue<T, R1> {
    /// Valid values compare by value; two errored containers are equal; a
    /// valid and an errored container are unordered.
    fn partial_cmp(&self, other: &ConstrainedValue<T, R2>) -> Option<Ordering> {
        match (self.get(), other.get()) {
            (Some(left), Some(right)) => left.partial_cmp(right),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl<T: Hash, R> Hash for ConstrainedValue<T, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
