//! Rule-based string validation library
//!
//! This library checks a single field value (a password, a username, ...)
//! against a configurable rule set and reports every violated rule as a
//! field-tagged error. It can also describe a rule set as a list of
//! requirement hints for display next to the input.
//!
//! # Features
//!
//! - `serde`: Enables [`RulesConfig`] for loading rules from configuration,
//!   and `Serialize` for the error types
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use field_rules::{Rules, evaluate, describe};
//!
//! // Build the rules once (e.g. at startup)
//! let rules = Rules::new("password")
//!     .with_length(8, 64)
//!     .with_min_digits(1)
//!     .with_min_symbols(1);
//!
//! assert_eq!(evaluate(&rules, "MyP@ssw0rd!"), Ok(()));
//!
//! let errors = evaluate(&rules, "pass word").unwrap_err();
//! assert_eq!(
//!     errors.messages(),
//!     vec![
//!         "Must contain at least 1 numbers",
//!         "Must contain at least 1 symbols",
//!         "No whitespace permitted",
//!     ]
//! );
//!
//! println!("Requirements: {:?}", describe(&rules));
//! ```

// Internal modules
mod describer;
mod error;
mod evaluator;
mod rules;
mod sections;
mod tally;

#[cfg(feature = "serde")]
mod config;

// Public API
pub use describer::describe;
pub use error::{ErrorList, FieldError, RulesError, ValidationResult};
pub use evaluator::{evaluate, evaluate_secret, is_valid};
pub use rules::Rules;
pub use tally::Tally;

#[cfg(feature = "serde")]
pub use config::{MatchConfig, RulesConfig};
