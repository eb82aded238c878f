//! Shared test fixtures for Failable crates.
//!
//! - [`counting`] - Rules and operations that record how often they run
//! - [`fixtures`] - Small rules and rule presets used across test suites
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! failable-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use failable_test::counting::{CallCounter, CountingRule};
//! use failable_test::fixtures::{pin_rule, IsTrue};
//! ```

pub mod counting;
pub mod fixtures;

pub use counting::{CallCounter, CountingRule};
pub use fixtures::{bits_rule, pin_rule, FailingRule, IsTrue, PIN_MAX, PIN_MIN};
