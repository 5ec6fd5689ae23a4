//! Rule evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ErrorList, FieldError, ValidationResult};
use crate::rules::Rules;
use crate::sections::{
    Section, Subject, digits_section, length_section, letters_section, pattern_section,
    symbols_section, whitespace_section,
};

const BLANK_MESSAGE: &str = "Cannot be blank";

/// Sections in the order their errors are reported.
const SECTIONS: [(&str, Section); 6] = [
    ("pattern", pattern_section),
    ("length", length_section),
    ("letters", letters_section),
    ("digits", digits_section),
    ("symbols", symbols_section),
    ("whitespace", whitespace_section),
];

/// Validates `input` against `rules` and reports every violated rule.
///
/// An empty input short-circuits with a single "Cannot be blank" error.
/// Otherwise all checks run independently, so the caller sees every unmet
/// requirement at once, in this order: pattern, length, letters, digits,
/// symbols, whitespace.
///
/// # Returns
/// `Ok(())` if no rule is violated, or a non-empty [`ErrorList`] whose
/// entries are all tagged with the rules' field name.
pub fn evaluate(rules: &Rules, input: &str) -> ValidationResult {
    if input.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::trace!(field = %rules.field, "blank input");
        return Err(ErrorList::single(FieldError::new(
            rules.field.clone(),
            BLANK_MESSAGE,
        )));
    }

    let subject = Subject::new(input);
    let mut errors = Vec::new();

    for (section_name, section_fn) in SECTIONS {
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        if let Some(message) = section_fn(rules, &subject) {
            #[cfg(feature = "tracing")]
            tracing::trace!(field = %rules.field, section = section_name, "rule violated");
            errors.push(FieldError::new(rules.field.clone(), message));
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(field = %rules.field, violations = errors.len(), "evaluation finished");

    match ErrorList::from_vec(errors) {
        None => Ok(()),
        Some(list) => Err(list),
    }
}

/// Evaluates a secret input without the caller exposing it.
pub fn evaluate_secret(rules: &Rules, input: &SecretString) -> ValidationResult {
    evaluate(rules, input.expose_secret())
}

/// `true` when `input` violates none of `rules`.
pub fn is_valid(rules: &Rules, input: &str) -> bool {
    evaluate(rules, input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(result: ValidationResult) -> Vec<String> {
        result
            .expect_err("Expected validation errors")
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn test_evaluate_blank_short_circuits() {
        let rules = Rules::new("password")
            .must_match("[a-z]+", "Lowercase only")
            .unwrap()
            .with_length(8, 64)
            .with_min_letters(2)
            .with_min_digits(1)
            .with_min_symbols(1);

        let list = evaluate(&rules, "").unwrap_err();
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0], FieldError::new("password", "Cannot be blank"));
    }

    #[test]
    fn test_evaluate_blank_with_no_rules() {
        let rules = Rules::new("username");
        assert_eq!(messages(evaluate(&rules, "")), vec!["Cannot be blank"]);
    }

    #[test]
    fn test_evaluate_scenario_min_length() {
        let rules = Rules::new("password").with_min_length(8);
        assert_eq!(
            messages(evaluate(&rules, "ab")),
            vec!["Must be at least 8 characters"]
        );
    }

    #[test]
    fn test_evaluate_scenario_missing_digit_only() {
        let rules = Rules::new("password").with_length(4, 10).with_min_digits(1);
        assert_eq!(
            messages(evaluate(&rules, "abcdefgh")),
            vec!["Must contain at least 1 numbers"]
        );
    }

    #[test]
    fn test_evaluate_scenario_whitespace() {
        let rules = Rules::new("password");
        assert!(
            messages(evaluate(&rules, "pass word")).contains(&"No whitespace permitted".to_string())
        );
    }

    #[test]
    fn test_evaluate_scenario_no_rules_valid() {
        let rules = Rules::new("password");
        assert_eq!(evaluate(&rules, "anything123!"), Ok(()));
        assert!(is_valid(&rules, "anything123!"));
    }

    #[test]
    fn test_evaluate_scenario_letters_then_symbols() {
        let rules = Rules::new("password").with_min_letters(3).with_min_symbols(1);
        assert_eq!(
            messages(evaluate(&rules, "12345")),
            vec!["Must contain at least 3 letters", "Must contain at least 1 symbols"]
        );
    }

    #[test]
    fn test_evaluate_reports_all_in_order() {
        let rules = Rules::new("password")
            .must_match(r"[^<>]*", "Must not contain angle brackets")
            .unwrap()
            .with_length(10, 20)
            .with_min_letters(4)
            .with_min_digits(2)
            .with_min_symbols(3);

        let list = evaluate(&rules, "<a 1>").unwrap_err();
        assert!(list.iter().all(|e| e.field == "password"));
        assert_eq!(
            list.messages(),
            vec![
                "Must not contain angle brackets",
                "Must be between 10 and 20 characters",
                "Must contain at least 4 letters",
                "Must contain at least 2 numbers",
                "Must contain at least 3 symbols",
                "No whitespace permitted",
            ]
        );
    }

    #[test]
    fn test_evaluate_pattern_is_full_match() {
        let rules = Rules::new("username")
            .must_match("[a-z]+", "Lowercase letters only")
            .unwrap();
        assert!(is_valid(&rules, "alice"));
        assert_eq!(
            messages(evaluate(&rules, "alice99")),
            vec!["Lowercase letters only"]
        );
    }

    #[test]
    fn test_evaluate_pattern_keeps_builder_options() {
        let rules = Rules::new("username")
            .must_match_with("[a-z]+", "Letters only", |b| b.case_insensitive(true))
            .unwrap();
        assert_eq!(evaluate(&rules, "ABC"), Ok(()));
        assert_eq!(messages(evaluate(&rules, "ABC1")), vec!["Letters only"]);
    }

    #[test]
    fn test_evaluate_superscript_is_not_a_digit() {
        let rules = Rules::new("password").with_min_digits(1);
        assert_eq!(
            messages(evaluate(&rules, "Password²")),
            vec!["Must contain at least 1 numbers"]
        );
    }

    #[test]
    fn test_evaluate_unicode_input() {
        let rules = Rules::new("username")
            .with_max_length(6)
            .with_min_letters(6);
        assert!(is_valid(&rules, "Пароль"));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let rules = Rules::new("password").with_min_length(12).with_min_symbols(1);
        assert_eq!(evaluate(&rules, "short pw"), evaluate(&rules, "short pw"));
    }

    #[test]
    fn test_evaluate_secret() {
        let rules = Rules::new("password").with_min_length(8).with_min_digits(1);
        let pwd = SecretString::new("MyP@ssw0rd!".to_string().into());
        assert_eq!(evaluate_secret(&rules, &pwd), Ok(()));

        let weak = SecretString::new("weak".to_string().into());
        assert_eq!(
            messages(evaluate_secret(&rules, &weak)),
            vec!["Must be at least 8 characters", "Must contain at least 1 numbers"]
        );
    }

    #[test]
    fn test_rules_methods_delegate() {
        let rules = Rules::new("password").with_min_digits(1);
        assert!(!rules.is_valid("abc"));
        assert_eq!(rules.errors("abc1"), Ok(()));
    }

    #[test]
    fn test_shared_rules_across_threads() {
        let rules = std::sync::Arc::new(Rules::new("password").with_min_length(4));
        let handles: Vec<_> = ["abcd", "ab", "abcdef"]
            .into_iter()
            .map(|input| {
                let rules = std::sync::Arc::clone(&rules);
                std::thread::spawn(move || rules.is_valid(input))
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, false, true]);
    }
}
