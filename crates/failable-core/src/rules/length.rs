//! Length rules for collections and strings.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::marker::PhantomData;

use crate::error::{ValidationError, ValidationResult};
use crate::rule::ValidationRule;

/// A value with a countable length.
///
/// Strings are measured in `char`s, not bytes.
pub trait Measured {
    /// Number of elements in the value.
    fn measure(&self) -> usize;
}

impl<T> Measured for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for VecDeque<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for Box<[T]> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Measured for [T; N] {
    fn measure(&self) -> usize {
        N
    }
}

impl Measured for String {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl<K, V, S> Measured for HashMap<K, V, S> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T, S> Measured for HashSet<T, S> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<K, V> Measured for BTreeMap<K, V> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for BTreeSet<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

/// Requires the length of a value to lie within `[min, max]`.
///
/// The maximum is checked first: a value that is too long fails with
/// `lengthTooLong`, one that is too short with `lengthTooShort`.
///
/// # Examples
///
/// ```
/// use failable_core::{LengthRule, ValidationRule};
///
/// let rule = LengthRule::<Vec<bool>>::between(10, 1028);
/// assert_eq!(rule.run(&vec![true; 9]).unwrap_err().identifier(), "lengthTooShort");
/// assert!(rule.run(&vec![true; 1028]).is_ok());
/// assert_eq!(rule.run(&vec![true; 1029]).unwrap_err().identifier(), "lengthTooLong");
/// ```
pub struct LengthRule<C> {
    min: usize,
    max: usize,
    _marker: PhantomData<fn() -> C>,
}

impl<C> LengthRule<C> {
    /// Length between `min` and `max`, inclusive.
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            _marker: PhantomData,
        }
    }

    /// Length of at most `max`.
    pub const fn at_most(max: usize) -> Self {
        Self::between(0, max)
    }

    /// Length of at least `min`.
    pub const fn at_least(min: usize) -> Self {
        Self::between(min, usize::MAX)
    }

    /// Minimum length.
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Maximum length.
    pub const fn max(&self) -> usize {
        self.max
    }
}

impl<C: Measured + 'static> ValidationRule for LengthRule<C> {
    type Supported = C;

    fn validate(&self, value: &C) -> ValidationResult {
        let length = value.measure();
        if length > self.max {
            return Err(ValidationError::length_too_long(self.max));
        }
        if length < self.min {
            return Err(ValidationError::length_too_short(self.min));
        }
        Ok(())
    }
}

impl<C> Default for LengthRule<C> {
    fn default() -> Self {
        Self::between(0, usize::MAX)
    }
}

impl<C> Clone for LengthRule<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for LengthRule<C> {}

impl<C> PartialEq for LengthRule<C> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<C> fmt::Debug for LengthRule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LengthRule")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

/// [`LengthRule`] with bounds fixed in the type.
///
/// ```
/// use failable_core::{ConstrainedValue, FixedLength};
///
/// type Story = ConstrainedValue<String, FixedLength<String, 1, 1028>>;
///
/// assert!(Story::new("the quick brown fox...".to_string()).is_valid());
/// assert!(!Story::new(String::new()).is_valid());
/// ```
pub struct FixedLength<C, const MIN: usize, const MAX: usize>(PhantomData<fn() -> C>);

impl<C: Measured + 'static, const MIN: usize, const MAX: usize> ValidationRule
    for FixedLength<C, MIN, MAX>
{
    type Supported = C;

    fn validate(&self, value: &C) -> ValidationResult {
        LengthRule::<C>::between(MIN, MAX).validate(value)
    }
}

impl<C, const MIN: usize, const MAX: usize> Default for FixedLength<C, MIN, MAX> {
    fn default() -> Self {
        FixedLength(PhantomData)
    }
}

impl<C, const MIN: usize, const MAX: usize> Clone for FixedLength<C, MIN, MAX> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const MIN: usize, const MAX: usize> Copy for FixedLength<C, MIN, MAX> {}

impl<C, const MIN: usize, const MAX: usize> fmt::Debug for FixedLength<C, MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedLength<{}..={}>", MIN, MAX)
    }
}
