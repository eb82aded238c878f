//! Rule for ranges built from two constrained values.

use std::fmt::Debug;
use std::ops::RangeInclusive;

use crate::error::{ValidationError, ValidationResult};
use crate::rule::{RuleRunner, ValidationRule};
use super::range::is_le;

/// Requires a well-ordered `RangeInclusive` whose endpoints satisfy `R`.
///
/// A range whose start is greater than its end, or unordered with it, fails
/// with `invalidBounds`;
/// otherwise the start and then the end are run through `R`'s rule tree.
///
/// ```
/// use failable_core::{BoundsRule, RangeRule, ValidationRule};
///
/// let rule = BoundsRule::new(RangeRule::between(0, 100));
/// assert!(rule.run(&(10..=20)).is_ok());
/// assert_eq!(rule.run(&(20..=10)).unwrap_err().identifier(), "invalidBounds");
/// assert_eq!(rule.run(&(10..=200)).unwrap_err().identifier(), "valueTooGreat");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsRule<R> {
    inner: R,
}

impl<R> BoundsRule<R> {
    /// Applies `inner` to both endpoints.
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// The rule applied to the endpoints.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R> ValidationRule for BoundsRule<R>
where
    R: ValidationRule,
    R::Supported: PartialOrd + Debug,
{
    type Supported = RangeInclusive<R::Supported>;

    fn validate(&self, value: &RangeInclusive<R::Supported>) -> ValidationResult {
        let (start, end) = (value.start(), value.end());
        if !is_le(start, end) {
            return Err(ValidationError::invalid_bounds(start, end));
        }
        RuleRunner::run(&self.inner, start)?;
        RuleRunner::run(&self.inner, end)
    }
}
