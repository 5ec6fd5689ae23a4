//! Rule evaluation sections
//!
//! Each section checks one rule of a [`Rules`] value against a prepared
//! [`Subject`]. Sections that have a general requirement text also expose it
//! for the describer.

mod length;
mod pattern;
mod variety;
mod whitespace;

pub use length::{length_requirement, length_section};
pub use pattern::{pattern_requirement, pattern_section};
pub use variety::{
    digits_requirement, digits_section, letters_requirement, letters_section,
    symbols_requirement, symbols_section,
};
pub use whitespace::whitespace_section;

use crate::rules::Rules;
use crate::tally::Tally;

/// Input prepared once per evaluation and shared by every section.
pub struct Subject<'a> {
    pub text: &'a str,
    /// Length in characters, not bytes.
    pub length: usize,
    pub tally: Tally,
}

impl<'a> Subject<'a> {
    pub fn new(text: &'a str) -> Self {
        let tally = Tally::of(text);
        Self {
            text,
            length: tally.total(),
            tally,
        }
    }
}

/// Result type for section evaluation functions.
/// - `Some(message)` - the rule was violated
/// - `None` - the rule holds or is not configured
pub type SectionResult = Option<String>;

/// Signature shared by all sections.
pub type Section = fn(&Rules, &Subject<'_>) -> SectionResult;
