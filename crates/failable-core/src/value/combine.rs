//! Pairwise combination of constrained values.

use std::fmt::Debug;
use std::ops::RangeInclusive;

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};
use tracing::debug;

use super::{ConstrainedValue, State};
use crate::error::{ValidationError, ValidationResult};
use crate::rule::{AppendedRule, RuleRunner, ValidationRule};
use crate::rules::BoundsRule;

/// Combines two constrained values with `op`, checking the result against
/// both input rules.
///
/// - Both valid: `op` runs and its result is validated against
///   `AppendedRule<R1, R2>`.
/// - Both errored: the result holds a joined error and `op` never runs.
/// - One errored: the result holds that error and `op` never runs.
///
/// # Examples
///
/// ```
/// use failable_core::{combine, ConstrainedValue, RangeRule};
///
/// let small = ConstrainedValue::with_rule(4, RangeRule::at_most(10));
/// let positive = ConstrainedValue::with_rule(3, RangeRule::at_least(0));
///
/// let sum = combine(small, positive, |a, b| a + b);
/// assert_eq!(sum.get(), Some(&7));
/// ```
pub fn combine<T, R1, R2, F>(
    left: ConstrainedValue<T, R1>,
    right: ConstrainedValue<T, R2>,
    op: F,
) -> ConstrainedValue<T, AppendedRule<R1, R2>>
where
    T: 'static,
    R1: ValidationRule<Supported = T>,
    R2: ValidationRule<Supported = T>,
    F: FnOnce(T, T) -> T,
{
    try_combine(left, right, |a, b| Ok(op(a, b)))
}

/// Like [`combine`] with an operation that can itself fail.
pub fn try_combine<T, R1, R2, F>(
    left: ConstrainedValue<T, R1>,
    right: ConstrainedValue<T, R2>,
    op: F,
) -> ConstrainedValue<T, AppendedRule<R1, R2>>
where
    T: 'static,
    R1: ValidationRule<Supported = T>,
    R2: ValidationRule<Supported = T>,
    F: FnOnce(T, T) -> ValidationResult<T>,
{
    let (left, left_rule) = left.into_parts();
    let (right, right_rule) = right.into_parts();
    let rule = AppendedRule::new(left_rule, right_rule);
    match zip(left, right).and_then(|(a, b)| op(a, b)) {
        Ok(value) => ConstrainedValue::with_rule(value, rule),
        Err(err) => ConstrainedValue::failed(err, rule),
    }
}

/// Combines two constrained values of arbitrary types into a container
/// checked by an explicit `rule`.
///
/// Error propagation follows [`combine`].
pub fn combine_with<A, B, O, R1, R2, RO, F>(
    left: ConstrainedValue<A, R1>,
    right: ConstrainedValue<B, R2>,
    rule: RO,
    op: F,
) -> ConstrainedValue<O, RO>
where
    R1: ValidationRule<Supported = A>,
    R2: ValidationRule<Supported = B>,
    RO: ValidationRule<Supported = O>,
    F: FnOnce(A, B) -> O,
{
    let (left, _) = left.into_parts();
    let (right, _) = right.into_parts();
    match zip(left, right) {
        Ok((a, b)) => ConstrainedValue::with_rule(op(a, b), rule),
        Err(err) => ConstrainedValue::failed(err, rule),
    }
}

fn zip<A, B>(
    left: Result<A, ValidationError>,
    right: Result<B, ValidationError>,
) -> ValidationResult<(A, B)> {
    match (left, right) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(l), Err(r)) => {
            debug!(event = "combine_short_circuit", left = %l, right = %r);
            Err(ValidationError::joined(l, r))
        }
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => {
            debug!(event = "combine_short_circuit", error = %err);
            Err(err)
        }
    }
}

impl<T, R1> ConstrainedValue<T, R1>
where
    T: 'static,
    R1: ValidationRule<Supported = T>,
{
    /// Builds the closed range `self..=end`, checking both endpoints against
    /// both input rules.
    ///
    /// ```
    /// use failable_core::{ConstrainedValue, RangeRule};
    ///
    /// let start = ConstrainedValue::with_rule(1, RangeRule::at_least(0));
    /// let end = ConstrainedValue::with_rule(5, RangeRule::at_most(10));
    /// assert_eq!(start.range_to(end).get(), Some(&(1..=5)));
    /// ```
    pub fn range_to<R2>(
        self,
        end: ConstrainedValue<T, R2>,
    ) -> ConstrainedValue<RangeInclusive<T>, BoundsRule<AppendedRule<R1, R2>>>
    where
        T: PartialOrd + Debug,
        R2: ValidationRule<Supported = T>,
    {
        let (start, left_rule) = self.into_parts();
        let (end, right_rule) = end.into_parts();
        let rule = BoundsRule::new(AppendedRule::new(left_rule, right_rule));
        match zip(start, end) {
            Ok((start, end)) => ConstrainedValue::with_rule(start..=end, rule),
            Err(err) => ConstrainedValue::failed(err, rule),
        }
    }

    /// The smaller of the two values, checked against both rules.
    pub fn min_with<R2>(
        self,
        other: ConstrainedValue<T, R2>,
    ) -> ConstrainedValue<T, AppendedRule<R1, R2>>
    where
        T: PartialOrd,
        R2: ValidationRule<Supported = T>,
    {
        combine(self, other, |a, b| if b < a { b } else { a })
    }

    /// The larger of the two values, checked against both rules.
    pub fn max_with<R2>(
        self,
        other: ConstrainedValue<T, R2>,
    ) -> ConstrainedValue<T, AppendedRule<R1, R2>>
    where
        T: PartialOrd,
        R2: ValidationRule<Supported = T>,
    {
        combine(self, other, |a, b| if b > a { b } else { a })
    }

    /// Addition that fails with `arithmeticOverflow` instead of overflowing.
    pub fn checked_add<R2>(
        self,
        rhs: ConstrainedValue<T, R2>,
    ) -> ConstrainedValue<T, AppendedRule<R1, R2>>
    where
        T: CheckedAdd,
        R2: ValidationRule<Supported = T>,
    {
        try_combine(self, rhs, |a, b| {
            a.checked_add(&b)
                .ok_or_else(|| ValidationError::arithmetic_overflow("addition"))
        })
    }

    /// Subtraction that fails with `arithmeticOverflow` instead of overflowing.
    pub fn checked_sub<R2>(
        self,
        rhs: ConstrainedValue<T, R2>,
    ) -> ConstrainedValue<T, AppendedRule<R1, R2>>
    where
        T: CheckedSub,
        R2: ValidationRule<Supported = T>,
    {
        try_combine(self, rhs, |a, b| {
            a.checked_sub(&b)
                .ok_or_else(|| ValidationError::arithmetic_overflow("subtraction"))
        })
    }

    /// Multiplication that fails with `arithmeticOverflow` instead of overflowing.
    pub fn checked_mul<R2>(
        self,
        rhs: ConstrainedValue<T, R2>,
    ) -> ConstrainedValue<T, AppendedRule<R1, R2>>
    where
        T: CheckedMul,
        R2: ValidationRule<Supported = T>,
    {
        try_combine(self, rhs, |a, b| {
            a.checked_mul(&b)
                .ok_or_else(|| ValidationError::arithmetic_overflow("multiplication"))
        })
    }

    /// Division that fails with `divisionByZero` on a zero divisor and
    /// `arithmeticOverflow` on overflow.
    pub fn checked_div<R2>(
        self,
        rhs: ConstrainedValue<T, R2>,
    ) -> ConstrainedValue<T, AppendedRule<R1, R2>>
    where
        T: CheckedDiv + Zero,
        R2: ValidationRule<Supported = T>,
    {
        try_combine(self, rhs, |a, b| {
            if b.is_zero() {
                return Err(ValidationError::division_by_zero());
            }
            a.checked_div(&b)
                .ok_or_else(|| ValidationError::arithmetic_overflow("division"))
        })
    }

    /// Applies `op` in place, checking the result against this container's
    /// rule and then `rhs`'s rule. The outcome replaces the state.
    ///
    /// If `op` panics the container is left holding an
    /// `assignmentInterrupted` error.
    pub(crate) fn combine_assign<R2, F>(&mut self, rhs: ConstrainedValue<T, R2>, op: F)
    where
        R2: ValidationRule<Supported = T>,
        F: FnOnce(T, T) -> T,
    {
        let left = self.state.take();
        let (right, right_rule) = rhs.into_parts();

        let outcome = zip(left, right).and_then(|(a, b)| {
            let value = op(a, b);
            RuleRunner::run(&self.rule, &value)?;
            RuleRunner::run(&right_rule, &value)?;
            Ok(value)
        });
        self.state = match outcome {
            Ok(value) => State::Value(value),
            Err(err) => State::Error(err),
        };
    }
}
