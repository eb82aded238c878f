//! Failable Core - Validation rules and constrained values
//!
//! This crate provides the fundamental abstractions for Failable:
//! - [`ValidationRule`] for declaring invariants over a single value type
//! - [`RuleRunner`] for checking a rule tree in a fixed, depth-first order
//! - Built-in rules for lengths, ranges, patterns and optionals
//! - [`ConstrainedValue`], a container that only ever holds a valid value
//!   or the error explaining why it does not
//!
//! # Example
//!
//! ```
//! use failable_core::{ConstrainedValue, LengthRule};
//!
//! let mut bits = ConstrainedValue::with_rule(vec![true; 10], LengthRule::between(10, 1028));
//! assert!(bits.is_valid());
//!
//! assert!(bits.assign(vec![false; 1029]).is_err());
//! assert_eq!(bits.error().unwrap().identifier(), "lengthTooLong");
//! ```

pub mod error;
pub mod rule;
pub mod rules;
pub mod value;

pub use error::{JoinedError, ValidationError, ValidationResult};
pub use rule::{AnyRule, AppendedRule, RuleRunner, Subrules, ValidationRule};
pub use rules::{
    BoundsRule, ElementRule, FixedLength, FixedRange, IfPresent, LengthRule, MagnitudeRule,
    Measured, NoRule, NotNone, PatternRule, RangeRule,
};
pub use value::{combine, combine_with, try_combine, ConstrainedValue};
