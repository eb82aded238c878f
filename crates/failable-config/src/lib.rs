//! Configuration system for Failable.
//!
//! Load rule parameters from TOML or YAML so that bounds and patterns can
//! change without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use failable_config::RuleConfig;
//! use failable_core::ConstrainedValue;
//!
//! let config = RuleConfig::from_toml_str(r#"
//!     [rules.story]
//!     type = "length"
//!     min = 10
//!     max = 1028
//!
//!     [rules.pin]
//!     type = "range"
//!     min = 1000
//!     max = 9999
//! "#).unwrap();
//!
//! let pin = ConstrainedValue::with_rule(5_000, config.range_rule::<i32>("pin").unwrap());
//! assert!(pin.is_valid());
//!
//! let story = config.length_rule::<String>("story").unwrap();
//! assert_eq!(story.max(), 1028);
//! ```
//!
//! Use an empty config when the file is missing:
//!
//! ```
//! use failable_config::RuleConfig;
//!
//! let config = RuleConfig::load("rules.toml").unwrap_or_default();
//! // Proceeds with no named rules if the file doesn't exist
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use failable_core::{LengthRule, Measured, PatternRule, RangeRule};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Rule `{name}` is a {found} rule, not a {expected} rule")]
    KindMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Named rule parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleConfig {
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSpec>,
}

impl RuleConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validated()
    }

    /// Adds or replaces a named rule.
    pub fn with_rule(mut self, name: impl Into<String>, spec: RuleSpec) -> Self {
        self.rules.insert(name.into(), spec);
        self
    }

    /// Checks every rule for inverted bounds and empty patterns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, spec) in &self.rules {
            spec.validate()
                .map_err(|reason| ConfigError::Invalid(format!("rule `{name}`: {reason}")))?;
        }
        Ok(())
    }

    /// Builds the length rule named `name`.
    pub fn length_rule<C: Measured>(&self, name: &str) -> Result<LengthRule<C>, ConfigError> {
        match self.get(name)? {
            RuleSpec::Length(spec) => Ok(LengthRule::between(
                spec.min.unwrap_or(0),
                spec.max.unwrap_or(usize::MAX),
            )),
            other => Err(mismatch(name, "length", other)),
        }
    }

    /// Builds the integer range rule named `name`, converting the bounds to `T`.
    pub fn range_rule<T>(&self, name: &str) -> Result<RangeRule<T>, ConfigError>
    where
        T: TryFrom<i64> + PartialOrd + Display,
    {
        match self.get(name)? {
            RuleSpec::Range(spec) => {
                let min = spec.min.map(|bound| convert(name, bound)).transpose()?;
                let max = spec.max.map(|bound| convert(name, bound)).transpose()?;
                Ok(RangeRule::new(min, max))
            }
            other => Err(mismatch(name, "range", other)),
        }
    }

    /// Builds the floating-point range rule named `name`.
    pub fn float_range_rule(&self, name: &str) -> Result<RangeRule<f64>, ConfigError> {
        match self.get(name)? {
            RuleSpec::FloatRange(spec) => Ok(RangeRule::new(spec.min, spec.max)),
            other => Err(mismatch(name, "float_range", other)),
        }
    }

    /// Compiles the pattern rule named `name`.
    pub fn pattern_rule(&self, name: &str) -> Result<PatternRule, ConfigError> {
        match self.get(name)? {
            RuleSpec::Pattern(spec) => Ok(PatternRule::new(&spec.pattern)?),
            other => Err(mismatch(name, "pattern", other)),
        }
    }

    fn get(&self, name: &str) -> Result<&RuleSpec, ConfigError> {
        self.rules
            .get(name)
            .ok_or_else(|| ConfigError::UnknownRule(name.to_string()))
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        debug!(event = "rule_config_loaded", rules = self.rules.len());
        Ok(self)
    }
}

/// Parameters of a single named rule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleSpec {
    Length(LengthSpec),
    Range(RangeSpec),
    FloatRange(FloatRangeSpec),
    Pattern(PatternSpec),
}

impl RuleSpec {
    /// Name of the rule kind, as written in the `type` key.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleSpec::Length(_) => "length",
            RuleSpec::Range(_) => "range",
            RuleSpec::FloatRange(_) => "float_range",
            RuleSpec::Pattern(_) => "pattern",
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            RuleSpec::Length(spec) => check_bounds(spec.min, spec.max),
            RuleSpec::Range(spec) => check_bounds(spec.min, spec.max),
            RuleSpec::FloatRange(spec) => check_bounds(spec.min, spec.max),
            RuleSpec::Pattern(spec) if spec.pattern.is_empty() => {
                Err("pattern must not be empty".to_string())
            }
            RuleSpec::Pattern(_) => Ok(()),
        }
    }
}

/// Collection length bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LengthSpec {
    #[serde(default)]
    pub min: Option<usize>,
    #[serde(default)]
    pub max: Option<usize>,
}

/// Integer bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RangeSpec {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

/// Floating-point bounds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FloatRangeSpec {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Regular expression the value must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PatternSpec {
    pub pattern: String,
}

fn check_bounds<T: PartialOrd + Display>(min: Option<T>, max: Option<T>) -> Result<(), String> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(format!("min {min} is greater than max {max}")),
        _ => Ok(()),
    }
}

fn convert<T: TryFrom<i64>>(name: &str, bound: i64) -> Result<T, ConfigError> {
    T::try_from(bound).map_err(|_| {
        ConfigError::Invalid(format!(
            "rule `{name}`: bound {bound} does not fit in {}",
            std::any::type_name::<T>()
        ))
    })
}

fn mismatch(name: &str, expected: &'static str, found: &RuleSpec) -> ConfigError {
    ConfigError::KindMismatch {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}
