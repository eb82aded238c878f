//! Ordering and propagation laws of the rule runner and combinators.

use failable_core::{
    combine, AnyRule, AppendedRule, ConstrainedValue, RuleRunner, Subrules, ValidationRule,
};
use failable_test::{CallCounter, CountingRule, FailingRule, IsTrue};
use smallvec::smallvec;

/// Groups a failing check with counting sub-rules of two different types.
struct Guarded {
    fail_self: bool,
    ints: CountingRule<i32>,
    flags: CountingRule<bool>,
}

impl ValidationRule for Guarded {
    type Supported = i32;

    fn validate(&self, _value: &i32) -> failable_core::ValidationResult {
        if self.fail_self {
            Err(failable_core::ValidationError::new("guard", "Guard tripped"))
        } else {
            Ok(())
        }
    }

    fn subrules(&self) -> Subrules<'_> {
        let ints: &dyn AnyRule = &self.ints;
        let flags: &dyn AnyRule = &self.flags;
        smallvec![ints, flags]
    }
}

fn guarded(fail_self: bool, counter: &CallCounter) -> Guarded {
    Guarded {
        fail_self,
        ints: CountingRule::new(counter.clone()),
        flags: CountingRule::new(counter.clone()),
    }
}

#[test]
fn test_own_failure_skips_subrules() {
    let counter = CallCounter::new();
    let err = RuleRunner::run(&guarded(true, &counter), &1).unwrap_err();
    assert_eq!(err.identifier(), "guard");
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_only_matching_subrules_run() {
    let counter = CallCounter::new();
    RuleRunner::run(&guarded(false, &counter), &1).unwrap();
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_first_failure_wins() {
    let rule = AppendedRule::new(
        FailingRule::<i32>::new("first"),
        FailingRule::<i32>::new("second"),
    );
    assert_eq!(rule.run(&0).unwrap_err().identifier(), "first");
}

#[test]
fn test_erased_type_mismatch() {
    let rule: &dyn AnyRule = &IsTrue;
    let err = rule.validate_any(&5_i32).unwrap_err();
    assert_eq!(err.identifier(), "invalidType");
}

#[test]
fn test_construction_runs_rule_once() {
    let counter = CallCounter::new();
    let value = ConstrainedValue::with_rule(3, CountingRule::<i32>::new(counter.clone()));
    assert!(value.is_valid());
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_combination_of_errors_joins_both() {
    let counter = CallCounter::new();
    let left = ConstrainedValue::with_rule(1, FailingRule::<i32>::new("left"));
    let right = ConstrainedValue::with_rule(2, FailingRule::<i32>::new("right"));

    let out = combine(left, right, counter.wrap(|a: i32, b: i32| a * b));
    let joined = match out.error() {
        Some(failable_core::ValidationError::Joined(joined)) => joined.clone(),
        other => panic!("expected joined error, got {other:?}"),
    };
    assert_eq!(joined.left().identifier(), "left");
    assert_eq!(joined.right().identifier(), "right");
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_combined_result_checked_by_both_rules() {
    let counter = CallCounter::new();
    let left = ConstrainedValue::with_rule(2, CountingRule::<i32>::new(counter.clone()));
    let right = ConstrainedValue::with_rule(3, CountingRule::<i32>::new(counter.clone()));
    assert_eq!(counter.count(), 2);

    let sum = left + right;
    assert_eq!(sum.get(), Some(&5));
    assert_eq!(counter.count(), 4);
}
