//! Conjunction of two independently declared rules.

use smallvec::smallvec;

use super::{AnyRule, Subrules, ValidationRule};

/// A rule that holds when both `R1` and `R2` hold.
///
/// Its own check always passes; its sub-rules are exactly `[R1, R2]`, so
/// `R1`'s whole tree is evaluated before `R2`'s. Produced automatically when
/// two constrained values are combined.
///
/// # Examples
///
/// ```
/// use failable_core::{AppendedRule, RangeRule, ValidationRule};
///
/// let rule = AppendedRule::new(RangeRule::at_least(0), RangeRule::at_most(10));
/// assert!(rule.run(&5).is_ok());
/// assert_eq!(rule.run(&-1).unwrap_err().identifier(), "valueTooSmall");
/// assert_eq!(rule.run(&11).unwrap_err().identifier(), "valueTooGreat");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendedRule<R1, R2> {
    left: R1,
    right: R2,
}

impl<R1, R2> AppendedRule<R1, R2> {
    /// Creates a rule requiring both `left` and `right`.
    pub fn new(left: R1, right: R2) -> Self {
        Self { left, right }
    }

    /// The rule evaluated first.
    pub fn left(&self) -> &R1 {
        &self.left
    }

    /// The rule evaluated second.
    pub fn right(&self) -> &R2 {
        &self.right
    }

    /// Splits back into the two rules.
    pub fn into_parts(self) -> (R1, R2) {
        (self.left, self.right)
    }
}

impl<T, R1, R2> ValidationRule for AppendedRule<R1, R2>
where
    T: 'static,
    R1: ValidationRule<Supported = T>,
    R2: ValidationRule<Supported = T>,
{
    type Supported = T;

    fn subrules(&self) -> Subrules<'_> {
        let left: &dyn AnyRule = &self.left;
        let right: &dyn AnyRule = &self.right;
        smallvec![left, right]
    }
}
