//! Pattern section - checks the input against the configured match pattern.

use super::{SectionResult, Subject};
use crate::rules::Rules;

/// Checks that the whole input matches the configured pattern.
///
/// # Returns
/// - `Some(message)` with the caller-supplied match error on mismatch
/// - `None` if the input matches or no pattern is configured
pub fn pattern_section(rules: &Rules, subject: &Subject<'_>) -> SectionResult {
    let rule = rules.must_match.as_ref()?;
    if rule.regex.is_match(subject.text) {
        None
    } else {
        Some(rule.message.clone())
    }
}

/// The match error doubles as the description of the pattern.
pub fn pattern_requirement(rules: &Rules) -> Option<String> {
    rules.match_error().map(str::to_string)
}
