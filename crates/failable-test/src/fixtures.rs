//! Rule fixtures shared by the test suites.

use std::marker::PhantomData;

use failable_core::{LengthRule, RangeRule, ValidationError, ValidationResult, ValidationRule};

/// Smallest accepted four-digit pin.
pub const PIN_MIN: i32 = 1_000;
/// Largest accepted four-digit pin.
pub const PIN_MAX: i32 = 9_999;

/// Range rule accepting four-digit pins.
pub fn pin_rule() -> RangeRule<i32> {
    RangeRule::between(PIN_MIN, PIN_MAX)
}

/// Length rule accepting between 10 and 1028 flags.
pub fn bits_rule() -> LengthRule<Vec<bool>> {
    LengthRule::between(10, 1028)
}

/// Accepts only `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsTrue;

impl ValidationRule for IsTrue {
    type Supported = bool;

    fn validate(&self, value: &bool) -> ValidationResult {
        if *value {
            Ok(())
        } else {
            Err(ValidationError::new(
                "expectedTrue",
                "Bool value must be `true`",
            ))
        }
    }
}

/// Rejects every value with a fixed identifier.
#[derive(Debug)]
pub struct FailingRule<T> {
    identifier: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FailingRule<T> {
    pub fn new(identifier: &'static str) -> Self {
        Self {
            identifier,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for FailingRule<T> {
    fn clone(&self) -> Self {
        Self::new(self.identifier)
    }
}

impl<T: 'static> ValidationRule for FailingRule<T> {
    type Supported = T;

    fn validate(&self, _value: &T) -> ValidationResult {
        Err(ValidationError::new(self.identifier, "Always fails"))
    }
}
