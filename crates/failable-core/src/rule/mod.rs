//! Validation rule abstraction
//!
//! A rule checks values of a single `Supported` type and may declare an
//! ordered list of sub-rules. Sub-rules are held as type-erased [`AnyRule`]
//! objects so that a rule tree can mix invariants declared for unrelated
//! types; [`RuleRunner`] only descends into the sub-rules whose supported
//! type matches the value being checked.

mod appended;
mod erased;
mod runner;


pub use appended::AppendedRule;
pub use erased::AnyRule;
pub use runner::RuleRunner;

use smallvec::SmallVec;

use crate::error::ValidationResult;

/// Ordered list of sub-rules returned by [`ValidationRule::subrules`].
pub type Subrules<'a> = SmallVec<[&'a dyn AnyRule; 4]>;

/// An invariant that values of type `Supported` must satisfy.
///
/// Both [`validate`](Self::validate) and [`subrules`](Self::subrules) have
/// default implementations, so a rule with an empty body accepts everything
/// and a rule that only overrides `subrules` is a pure grouping of other rules.
///
/// Rules are checked through [`RuleRunner`], which runs the rule's own check
/// first and then its sub-rules depth-first in declaration order.
///
/// # Examples
///
/// ```
/// use failable_core::{ValidationError, ValidationResult, ValidationRule};
///
/// struct IsTrue;
///
/// impl ValidationRule for IsTrue {
///     type Supported = bool;
///
///     fn validate(&self, value: &bool) -> ValidationResult {
///         if *value {
///             Ok(())
///         } else {
///             Err(ValidationError::new("expectedTrue", "Bool value must be `true`"))
///         }
///     }
/// }
///
/// assert!(IsTrue.run(&true).is_ok());
/// assert_eq!(IsTrue.run(&false).unwrap_err().identifier(), "expectedTrue");
/// ```
pub trait ValidationRule: Send + Sync + 'static {
    /// The type of value this rule checks.
    type Supported: 'static;

    /// Checks a single value against this rule only, ignoring sub-rules.
    fn validate(&self, value: &Self::Supported) -> ValidationResult {
        let _ = value;
        Ok(())
    }

    /// Rules that must also hold, in evaluation order.
    fn subrules(&self) -> Subrules<'_> {
        Subrules::new()
    }

    /// Name used in log events.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Runs this rule and its applicable sub-rules against `value`.
    fn run(&self, value: &Self::Supported) -> ValidationResult
    where
        Self: Sized,
    {
        RuleRunner::run(self, value)
    }
}
