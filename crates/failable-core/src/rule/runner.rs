//! Depth-first rule tree evaluation.

use std::any::{Any, TypeId};

use tracing::{debug, trace};

use super::{AnyRule, Subrules, ValidationRule};
use crate::error::ValidationResult;

/// Evaluates a rule tree against a value.
///
/// Evaluation order:
/// 1. The rule's own check. On failure the error is returned and no
///    sub-rule is visited.
/// 2. Each sub-rule in declaration order, recursively, so a sub-rule's own
///    sub-rules are finished before its next sibling starts.
///
/// The first failure ends the run. Sub-rules whose supported type differs
/// from the value's type are skipped by [`run`](Self::run) and
/// [`run_erased`](Self::run_erased); [`run_unfiltered`](Self::run_unfiltered)
/// visits them anyway and reports `invalidType` for them.
///
/// # Examples
///
/// ```
/// use failable_core::{RangeRule, RuleRunner};
///
/// let rule = RangeRule::between(1_000, 9_999);
/// assert!(RuleRunner::run(&rule, &5_000).is_ok());
/// assert_eq!(RuleRunner::run(&rule, &999).unwrap_err().identifier(), "valueTooSmall");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleRunner;

impl RuleRunner {
    /// Runs `rule` and its type-compatible sub-rules against `value`.
    pub fn run<R: ValidationRule>(rule: &R, value: &R::Supported) -> ValidationResult {
        Self::visit(rule, value, Some(TypeId::of::<R::Supported>()))
    }

    /// Runs a type-erased rule tree, filtering sub-rules by the root rule's
    /// supported type.
    ///
    /// Fails with `invalidType` if `value` is not of the root's supported type.
    pub fn run_erased(rule: &dyn AnyRule, value: &dyn Any) -> ValidationResult {
        Self::visit(rule, value, Some(rule.supported_type()))
    }

    /// Runs a type-erased rule tree without filtering sub-rules.
    ///
    /// Any sub-rule declared for a different type fails with `invalidType`.
    pub fn run_unfiltered(rule: &dyn AnyRule, value: &dyn Any) -> ValidationResult {
        Self::visit(rule, value, None)
    }

    /// Sub-rules of `rule` that support the same type as `rule` itself.
    pub fn applicable_subrules(rule: &dyn AnyRule) -> Subrules<'_> {
        let supported = rule.supported_type();
        rule.subrules_any()
            .into_iter()
            .filter(|sub| sub.supported_type() == supported)
            .collect()
    }

    fn visit(rule: &dyn AnyRule, value: &dyn Any, filter: Option<TypeId>) -> ValidationResult {
        trace!(event = "rule_check", rule = rule.rule_name());

        if let Err(err) = rule.validate_any(value) {
            debug!(
                event = "rule_failed",
                rule = rule.rule_name(),
                identifier = err.identifier()
            );
            return Err(err);
        }

        for sub in rule.subrules_any() {
            if let Some(expected) = filter {
                if sub.supported_type() != expected {
                    trace!(
                        event = "subrule_skipped",
                        rule = sub.rule_name(),
                        supported = sub.supported_type_name()
                    );
                    continue;
                }
            }
            Self::visit(sub, value, filter)?;
        }

        Ok(())
    }
}
