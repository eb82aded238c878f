//! Range rules for ordered values.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::marker::PhantomData;

use num_traits::Zero;

use crate::error::{ValidationError, ValidationResult};
use crate::rule::ValidationRule;

/// Requires a value to lie within optional inclusive bounds.
///
/// The maximum is checked first: a value above it fails with
/// `valueTooGreat`, a value below the minimum with `valueTooSmall`. A
/// missing bound is not checked, which allows one-sided ranges.
///
/// # Examples
///
/// ```
/// use failable_core::{RangeRule, ValidationRule};
///
/// let pin = RangeRule::between(1_000, 9_999);
/// assert!(pin.run(&5_000).is_ok());
/// assert_eq!(pin.run(&999).unwrap_err().identifier(), "valueTooSmall");
/// assert_eq!(pin.run(&10_000).unwrap_err().identifier(), "valueTooGreat");
///
/// let positive = RangeRule::at_least(0.0);
/// assert!(positive.run(&42.0).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRule<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> RangeRule<T> {
    /// Creates a rule with the given optional bounds.
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Value between `min` and `max`, inclusive.
    pub const fn between(min: T, max: T) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Value of at least `min`.
    pub const fn at_least(min: T) -> Self {
        Self::new(Some(min), None)
    }

    /// Value of at most `max`.
    pub const fn at_most(max: T) -> Self {
        Self::new(None, Some(max))
    }

    /// Lower bound, if any.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// Upper bound, if any.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }
}

impl<T> Default for RangeRule<T> {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl<T> ValidationRule for RangeRule<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    type Supported = T;

    fn validate(&self, value: &T) -> ValidationResult {
        // Unordered values such as NaN fail the first bound present.
        if let Some(max) = &self.max {
            if !is_le(value, max) {
                return Err(ValidationError::value_too_great(max));
            }
        }
        if let Some(min) = &self.min {
            if !is_le(min, value) {
                return Err(ValidationError::value_too_small(min));
            }
        }
        Ok(())
    }
}

/// [`RangeRule`] over `i64` with bounds fixed in the type.
///
/// ```
/// use failable_core::{ConstrainedValue, FixedRange};
///
/// type Pin = ConstrainedValue<i64, FixedRange<1_000, 9_999>>;
///
/// let mut pin = Pin::new(5_000);
/// assert!(pin.assign(999).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedRange<const MIN: i64, const MAX: i64>;

impl<const MIN: i64, const MAX: i64> ValidationRule for FixedRange<MIN, MAX> {
    type Supported = i64;

    fn validate(&self, value: &i64) -> ValidationResult {
        RangeRule::between(MIN, MAX).validate(value)
    }
}

/// Rejects negative values with `invalidMagnitude`.
pub struct MagnitudeRule<T>(PhantomData<fn() -> T>);

impl<T> MagnitudeRule<T> {
    /// Creates the rule.
    pub const fn new() -> Self {
        MagnitudeRule(PhantomData)
    }
}

impl<T> ValidationRule for MagnitudeRule<T>
where
    T: Zero + PartialOrd + 'static,
{
    type Supported = T;

    fn validate(&self, value: &T) -> ValidationResult {
        if !is_le(&T::zero(), value) {
            return Err(ValidationError::invalid_magnitude());
        }
        Ok(())
    }
}

impl<T> Default for MagnitudeRule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MagnitudeRule<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MagnitudeRule<T> {}

impl<T> fmt::Debug for MagnitudeRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MagnitudeRule<{}>", std::any::type_name::<T>())
    }
}

/// `lhs <= rhs`, false when the two are unordered.
pub(crate) fn is_le<T: PartialOrd + ?Sized>(lhs: &T, rhs: &T) -> bool {
    matches!(lhs.partial_cmp(rhs), Some(Ordering::Less | Ordering::Equal))
}
