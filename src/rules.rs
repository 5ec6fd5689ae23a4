//! Rule configuration for a single field.

use regex::{Regex, RegexBuilder};

use crate::error::{RulesError, ValidationResult};

/// Pattern the whole input must match, with the message shown when it doesn't.
#[derive(Debug, Clone)]
pub(crate) struct MatchRule {
    /// Pattern as supplied by the caller.
    pub source: String,
    /// `source` anchored to both ends of the input.
    pub regex: Regex,
    pub message: String,
}

/// Validation policy for one field.
///
/// Built once (usually at startup) with [`Rules::new`] and the `with_*`
/// setters, then shared across any number of evaluations. Evaluation only
/// borrows the rules, so a `Rules` can sit in a `static` or an `Arc` and be
/// used from many threads at once.
///
/// A bound or minimum of `0` means "not checked". Contradictory settings
/// (e.g. `min_length > max_length`) are accepted and simply never pass.
#[derive(Debug, Clone)]
pub struct Rules {
    pub(crate) field: String,
    pub(crate) must_match: Option<MatchRule>,
    pub(crate) min_length: usize,
    pub(crate) max_length: usize,
    pub(crate) min_letters: usize,
    pub(crate) min_digits: usize,
    pub(crate) min_symbols: usize,
    pub(crate) allow_whitespace: bool,
}

impl Rules {
    /// Empty rule set for `field`: no bounds, no minimums, whitespace rejected.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            must_match: None,
            min_length: 0,
            max_length: 0,
            min_letters: 0,
            min_digits: 0,
            min_symbols: 0,
            allow_whitespace: false,
        }
    }

    /// Requires the whole input to match `pattern`.
    ///
    /// The pattern is anchored at both ends, so `[a-z]+` rejects `"abc1"`.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidPattern`] if `pattern` does not compile.
    pub fn must_match(self, pattern: &str, message: impl Into<String>) -> Result<Self, RulesError> {
        self.must_match_with(pattern, message, |builder| builder)
    }

    /// Same as [`Rules::must_match`], with builder options for the pattern.
    ///
    /// `configure` receives the [`RegexBuilder`] for the anchored pattern, so
    /// options such as `case_insensitive` or `size_limit` apply to the regex
    /// the evaluator actually runs.
    ///
    /// ```rust
    /// use field_rules::Rules;
    ///
    /// let rules = Rules::new("username")
    ///     .must_match_with("[a-z]+", "Letters only", |b| b.case_insensitive(true))
    ///     .unwrap();
    /// assert!(rules.is_valid("ABC"));
    /// ```
    pub fn must_match_with<F>(
        self,
        pattern: &str,
        message: impl Into<String>,
        configure: F,
    ) -> Result<Self, RulesError>
    where
        F: FnOnce(&mut RegexBuilder) -> &mut RegexBuilder,
    {
        let mut builder = RegexBuilder::new(&format!(r"\A(?:{})\z", pattern));
        let regex = configure(&mut builder).build().map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to compile match pattern `{}`: {}", pattern, source);
            RulesError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(self.with_match_rule(pattern.to_string(), regex, message.into()))
    }

    fn with_match_rule(mut self, source: String, regex: Regex, message: String) -> Self {
        self.must_match = Some(MatchRule {
            source,
            regex,
            message,
        });
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Sets both length bounds at once.
    pub fn with_length(self, min: usize, max: usize) -> Self {
        self.with_min_length(min).with_max_length(max)
    }

    pub fn with_min_letters(mut self, min: usize) -> Self {
        self.min_letters = min;
        self
    }

    pub fn with_min_digits(mut self, min: usize) -> Self {
        self.min_digits = min;
        self
    }

    pub fn with_min_symbols(mut self, min: usize) -> Self {
        self.min_symbols = min;
        self
    }

    pub fn with_allow_whitespace(mut self, allow: bool) -> Self {
        self.allow_whitespace = allow;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// The match pattern as originally supplied, without anchoring.
    pub fn pattern(&self) -> Option<&str> {
        self.must_match.as_ref().map(|m| m.source.as_str())
    }

    pub fn match_error(&self) -> Option<&str> {
        self.must_match.as_ref().map(|m| m.message.as_str())
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn min_letters(&self) -> usize {
        self.min_letters
    }

    pub fn min_digits(&self) -> usize {
        self.min_digits
    }

    pub fn min_symbols(&self) -> usize {
        self.min_symbols
    }

    pub fn allow_whitespace(&self) -> bool {
        self.allow_whitespace
    }

    /// Evaluates `input` against these rules. See [`crate::evaluate`].
    pub fn errors(&self, input: &str) -> ValidationResult {
        crate::evaluate(self, input)
    }

    /// `true` when `input` violates none of these rules.
    pub fn is_valid(&self, input: &str) -> bool {
        crate::is_valid(self, input)
    }

    /// Human-readable requirement list. See [`crate::describe`].
    pub fn requirements(&self) -> Vec<String> {
        crate::describe(self)
    }
}
