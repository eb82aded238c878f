//! Per-element rule for collections.

use std::fmt;
use std::marker::PhantomData;

use crate::error::ValidationResult;
use crate::rule::{RuleRunner, ValidationRule};

/// Runs `R`'s full rule tree on every element of a collection.
///
/// Elements are checked in iteration order and the first failure is
/// reported.
///
/// ```
/// use failable_core::{ElementRule, LengthRule, ValidationRule};
///
/// let rule = ElementRule::<Vec<String>, _>::new(LengthRule::<String>::at_most(4));
/// assert!(rule.run(&vec!["G".into(), "OOOO".into()]).is_ok());
/// assert_eq!(
///     rule.run(&vec!["G".into(), "World".into()]).unwrap_err().identifier(),
///     "lengthTooLong",
/// );
/// ```
pub struct ElementRule<C, R> {
    inner: R,
    _marker: PhantomData<fn() -> C>,
}

impl<C, R> ElementRule<C, R> {
    /// Applies `inner` to each element.
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// The rule applied to each element.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<C, R> ValidationRule for ElementRule<C, R>
where
    C: 'static,
    R: ValidationRule,
    for<'a> &'a C: IntoIterator<Item = &'a R::Supported>,
{
    type Supported = C;

    fn validate(&self, value: &C) -> ValidationResult {
        value
            .into_iter()
            .try_for_each(|element| RuleRunner::run(&self.inner, element))
    }
}

impl<C, R: Default> Default for ElementRule<C, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<C, R: Clone> Clone for ElementRule<C, R> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<C, R: fmt::Debug> fmt::Debug for ElementRule<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRule")
            .field("inner", &self.inner)
            .finish()
    }
}
