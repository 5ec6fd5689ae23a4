//! Whitespace section.

use super::{SectionResult, Subject};
use crate::rules::Rules;

/// Rejects any whitespace character unless the rules allow it.
///
/// There is no matching requirement text: the whitespace policy only shows
/// up as a violation, never in the describer's list.
pub fn whitespace_section(rules: &Rules, subject: &Subject<'_>) -> SectionResult {
    if !rules.allow_whitespace && subject.tally.whitespace > 0 {
        Some("No whitespace permitted".to_string())
    } else {
        None
    }
}
