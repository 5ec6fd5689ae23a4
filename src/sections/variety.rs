//! Character variety sections - minimum letter, digit and symbol counts.

use super::{SectionResult, Subject};
use crate::rules::Rules;

fn minimum(count: usize, min: usize, what: &str) -> SectionResult {
    if count < min {
        requirement(min, what)
    } else {
        None
    }
}

fn requirement(min: usize, what: &str) -> Option<String> {
    if min > 0 {
        Some(format!("Must contain at least {} {}", min, what))
    } else {
        None
    }
}

pub fn letters_section(rules: &Rules, subject: &Subject<'_>) -> SectionResult {
    minimum(subject.tally.letters, rules.min_letters, "letters")
}

pub fn digits_section(rules: &Rules, subject: &Subject<'_>) -> SectionResult {
    minimum(subject.tally.digits, rules.min_digits, "numbers")
}

pub fn symbols_section(rules: &Rules, subject: &Subject<'_>) -> SectionResult {
    minimum(subject.tally.symbols, rules.min_symbols, "symbols")
}

pub fn letters_requirement(rules: &Rules) -> Option<String> {
    requirement(rules.min_letters, "letters")
}

pub fn digits_requirement(rules: &Rules) -> Option<String> {
    requirement(rules.min_digits, "numbers")
}

pub fn symbols_requirement(rules: &Rules) -> Option<String> {
    requirement(rules.min_symbols, "symbols")
}
