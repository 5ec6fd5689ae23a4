//! Length section - checks the input against the length bounds.

use super::{SectionResult, Subject};
use crate::rules::Rules;

/// Checks the character count against `min_length` and `max_length`.
///
/// Violating either bound yields the same combined message.
///
/// # Returns
/// - `Some(message)` if the input is too short or too long
/// - `None` if it is within the configured bounds
pub fn length_section(rules: &Rules, subject: &Subject<'_>) -> SectionResult {
    let too_short = rules.min_length > 0 && subject.length < rules.min_length;
    let too_long = rules.max_length > 0 && subject.length > rules.max_length;
    if too_short || too_long {
        length_requirement(rules)
    } else {
        None
    }
}

/// Describes whichever length bounds are set.
pub fn length_requirement(rules: &Rules) -> Option<String> {
    match (rules.min_length, rules.max_length) {
        (0, 0) => None,
        (min, 0) => Some(format!("Must be at least {} characters", min)),
        (0, max) => Some(format!("Must be at most {} characters", max)),
        (min, max) => Some(format!("Must be between {} and {} characters", min, max)),
    }
}
