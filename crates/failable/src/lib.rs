//! Failable - Values that always satisfy their validation rules
//!
//! Declare invariants once as rules, then hold values in a
//! [`ConstrainedValue`] that can only ever contain a value passing them.
//!
//! # Example
//!
//! ```rust
//! use failable::prelude::*;
//!
//! let mut pin = ConstrainedValue::with_rule(5_000, RangeRule::between(1_000, 9_999));
//! assert!(pin.assign(10_000).is_err());
//! assert_eq!(pin.error().unwrap().identifier(), "valueTooGreat");
//!
//! let total = ConstrainedValue::with_rule(1_000, RangeRule::at_least(0))
//!     + ConstrainedValue::with_rule(2_000, RangeRule::at_most(5_000));
//! assert_eq!(total.get(), Some(&3_000));
//! ```

// Errors
pub use failable_core::{JoinedError, ValidationError, ValidationResult};

// Rule abstraction
pub use failable_core::{AnyRule, AppendedRule, RuleRunner, Subrules, ValidationRule};

// Built-in rules
pub use failable_core::{
    BoundsRule, ElementRule, FixedLength, FixedRange, IfPresent, LengthRule, MagnitudeRule,
    Measured, NoRule, NotNone, PatternRule, RangeRule,
};

// Constrained values
pub use failable_core::{combine, combine_with, try_combine, ConstrainedValue};

// Declarative configuration
pub use failable_config::{ConfigError, RuleConfig, RuleSpec};

#[cfg(feature = "logging")]
pub mod logging;

pub mod prelude {
    pub use failable_core::{
        combine, ConstrainedValue, IfPresent, LengthRule, NoRule, NotNone, PatternRule,
        RangeRule, ValidationError, ValidationResult, ValidationRule,
    };
}
