//! Serde-loadable rule configuration.
//!
//! Lets a host keep its field policies in a config file and turn them into
//! [`Rules`] at startup.
//!
//! ```rust
//! use field_rules::{Rules, RulesConfig};
//!
//! let config: RulesConfig = serde_json::from_str(r#"{
//!     "field": "password",
//!     "min_length": 8,
//!     "min_digits": 1
//! }"#).unwrap();
//!
//! let rules = Rules::try_from(config).unwrap();
//! assert!(rules.is_valid("hunter22"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::rules::Rules;

/// Pattern plus the message shown when the input does not match it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub pattern: String,
    pub message: String,
    #[serde(default)]
    pub case_insensitive: bool,
}

/// Plain-data form of [`Rules`]. Omitted numbers default to 0 (unchecked)
/// and whitespace defaults to not allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_match: Option<MatchConfig>,
    pub min_length: usize,
    pub max_length: usize,
    pub min_letters: usize,
    pub min_digits: usize,
    pub min_symbols: usize,
    pub allow_whitespace: bool,
}

impl TryFrom<RulesConfig> for Rules {
    type Error = RulesError;

    fn try_from(config: RulesConfig) -> Result<Self, Self::Error> {
        let mut rules = Rules::new(config.field)
            .with_length(config.min_length, config.max_length)
            .with_min_letters(config.min_letters)
            .with_min_digits(config.min_digits)
            .with_min_symbols(config.min_symbols)
            .with_allow_whitespace(config.allow_whitespace);

        if let Some(m) = config.must_match {
            let case_insensitive = m.case_insensitive;
            rules = rules.must_match_with(&m.pattern, m.message, |b| {
                b.case_insensitive(case_insensitive)
            })?;
        }

        Ok(rules)
    }
}
