//! Character tally - classifies every input character into one category.

use regex::Regex;
use std::sync::OnceLock;

// Unicode general category L, general category Nd, and the White_Space property
static LETTER_REGEX: OnceLock<Regex> = OnceLock::new();
static DIGIT_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn letter_regex() -> &'static Regex {
    LETTER_REGEX.get_or_init(|| Regex::new(r"\p{L}").unwrap())
}

fn digit_regex() -> &'static Regex {
    DIGIT_REGEX.get_or_init(|| Regex::new(r"\p{Nd}").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s").unwrap())
}

/// Per-category character counts for one input.
///
/// Every character lands in exactly one category, so the four counts always
/// add up to [`Tally::total`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub letters: usize,
    pub digits: usize,
    pub whitespace: usize,
    pub symbols: usize,
}

impl Tally {
    /// Classifies every character of `text`.
    ///
    /// Letters are general category L, digits are Nd (so `²`, `½` and `Ⅻ`
    /// are not digits) and whitespace is the White_Space property. The
    /// three sets are disjoint; anything outside them is a symbol.
    pub fn of(text: &str) -> Self {
        let letters = letter_regex().find_iter(text).count();
        let digits = digit_regex().find_iter(text).count();
        let whitespace = whitespace_regex().find_iter(text).count();
        Self {
            letters,
            digits,
            whitespace,
            symbols: text.chars().count() - letters - digits - whitespace,
        }
    }

    pub fn total(&self) -> usize {
        self.letters + self.digits + self.whitespace + self.symbols
    }
}
