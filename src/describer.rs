//! Rule describer - renders a rule set as requirement hints.

use crate::rules::Rules;
use crate::sections::{
    digits_requirement, length_requirement, letters_requirement, pattern_requirement,
    symbols_requirement,
};

/// Lists the requirements `rules` imposes, in evaluation order.
///
/// Only configured rules appear. The whitespace policy is never listed.
pub fn describe(rules: &Rules) -> Vec<String> {
    let requirements: [fn(&Rules) -> Option<String>; 5] = [
        pattern_requirement,
        length_requirement,
        letters_requirement,
        digits_requirement,
        symbols_requirement,
    ];

    requirements
        .iter()
        .filter_map(|requirement| requirement(rules))
        .collect()
}
