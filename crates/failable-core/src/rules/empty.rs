//! NoRule - the rule that accepts every value

use std::fmt;
use std::marker::PhantomData;

use crate::rule::ValidationRule;

/// A rule for any type that always succeeds.
///
/// `ConstrainedValue<T, NoRule<T>>` is a container that can never be in the
/// error state through construction or assignment.
pub struct NoRule<T>(PhantomData<fn() -> T>);

impl<T> NoRule<T> {
    /// Creates the rule.
    pub const fn new() -> Self {
        NoRule(PhantomData)
    }
}

impl<T: 'static> ValidationRule for NoRule<T> {
    type Supported = T;
}

impl<T> Default for NoRule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NoRule<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NoRule<T> {}

impl<T> fmt::Debug for NoRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoRule<{}>", std::any::type_name::<T>())
    }
}
