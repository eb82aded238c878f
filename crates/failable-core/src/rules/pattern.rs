//! Regular expression rule for strings.

use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::rule::ValidationRule;

/// Requires a string to contain a match for a regular expression.
///
/// The match may occur anywhere in the value; anchor the pattern with `^`
/// and `$` to require a whole-string match. Fails with `noRegexMatch`.
///
/// # Examples
///
/// ```
/// use failable_core::{PatternRule, ValidationRule};
///
/// let phone = PatternRule::new(r"^1?-?\(?[0-9]{3}\)?-?[0-9]{3}-?[0-9]{4}$").unwrap();
/// assert!(phone.run(&"7319434316".to_string()).is_ok());
/// assert_eq!(phone.run(&String::new()).unwrap_err().identifier(), "noRegexMatch");
/// ```
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
}

impl PatternRule {
    /// Compiles `pattern` into a rule.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for PatternRule {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl ValidationRule for PatternRule {
    type Supported = String;

    fn validate(&self, value: &String) -> ValidationResult {
        if self.regex.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::no_regex_match(self.pattern()))
        }
    }
}
