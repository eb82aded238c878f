//! Built-in validation rules
//!
//! Rules are plain values: parameterized rules such as [`LengthRule`] and
//! [`RangeRule`] carry their bounds, while the const-generic variants
//! ([`FixedLength`], [`FixedRange`]) implement `Default` so they can be named
//! purely by type.

mod bounds;
mod element;
mod empty;
mod length;
mod optional;
mod pattern;
mod range;

#[cfg(test)]
mod tests;

pub use bounds::BoundsRule;
pub use element::ElementRule;
pub use empty::NoRule;
pub use length::{FixedLength, LengthRule, Measured};
pub use optional::{IfPresent, NotNone};
pub use pattern::PatternRule;
pub use range::{FixedRange, MagnitudeRule, RangeRule};
