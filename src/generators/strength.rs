// src/generators/strength.rs
use crate::models::{StrengthLabel, StrengthResult, SYMBOL_CHARS};

const MAX_SCORE: u8 = 5;
const WEAK_SEQUENCES: [&str; 3] = ["123", "abc", "qwe"];

/// Score a password from 0 to 5 and map it to a label.
pub fn analyze_password_strength(password: &str) -> StrengthResult {
    let length = password.chars().count();

    let checks = [
        length >= 12,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SYMBOL_CHARS.contains(c)),
        length >= 16,
        length >= 20,
    ];

    let mut score = checks.iter().filter(|passed| **passed).count() as u8;

    if has_repeating_patterns(password) {
        score = score.saturating_sub(1);
    }

    let score = score.min(MAX_SCORE);

    StrengthResult {
        score,
        label: label_for_score(score),
    }
}

/// `floor(score / 1.4)` done in integers, capped at the last label.
pub fn label_for_score(score: u8) -> StrengthLabel {
    let index = (usize::from(score) * 5 / 7).min(StrengthLabel::ALL.len() - 1);
    StrengthLabel::ALL[index]
}

/// Three identical characters in a row, or a well-known keyboard sequence.
pub fn has_repeating_patterns(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return true;
    }

    let lowered = password.to_lowercase();
    WEAK_SEQUENCES.iter().any(|seq| lowered.contains(seq))
}

/// Advice lines for the checks a password misses.
pub fn strength_feedback(password: &str) -> Vec<String> {
    let mut feedback = Vec::new();

    if password.chars().count() < 12 {
        feedback.push("Increase password length to at least 12 characters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        feedback.push("Add uppercase letters for better security".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        feedback.push("Add lowercase letters for better security".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        feedback.push("Add numbers for better security".to_string());
    }
    if !password.chars().any(|c| SYMBOL_CHARS.contains(c)) {
        feedback.push("Add symbols for better security".to_string());
    }
    if has_repeating_patterns(password) {
        feedback.push("Avoid repeated characters and sequences like 'abc', '123' or 'qwe'".to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_mapping_is_exact() {
        let expected = [
            (0, StrengthLabel::VeryWeak),
            (1, StrengthLabel::VeryWeak),
            (2, StrengthLabel::Weak),
            (3, StrengthLabel::Regular),
            (4, StrengthLabel::Regular),
            (5, StrengthLabel::Strong),
        ];
        for (score, label) in expected {
            assert_eq!(label_for_score(score), label, "score {}", score);
        }
    }

    #[test]
    fn empty_password_is_very_weak() {
        let result = analyze_password_strength("");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn triple_run_is_penalised() {
        assert!(has_repeating_patterns("xyzzzy"));
        // lowercase only: 1 point, minus the penalty
        assert_eq!(analyze_password_strength("aaa").score, 0);
        // upper + lower + digit = 3, minus 1
        assert_eq!(analyze_password_strength("Xy7777").score, 2);
        assert_eq!(analyze_password_strength("Xy7").score, 3);
    }

    #[test]
    fn sequences_match_case_insensitively() {
        assert!(has_repeating_patterns("xxABCxx"));
        assert!(has_repeating_patterns("QwErty"));
        assert!(has_repeating_patterns("pass123"));
        assert!(!has_repeating_patterns("acb-132-qew"));
    }

    #[test]
    fn two_in_a_row_is_not_a_run() {
        assert!(!has_repeating_patterns("aabbcc"));
    }

    #[test]
    fn score_clamps_at_five() {
        // all seven checks pass
        let result = analyze_password_strength("Xk9!mPz2#vLq8@wRt5$y");
        assert_eq!(result.score, 5);
        assert_eq!(result.label, StrengthLabel::Strong);
    }

    #[test]
    fn penalty_applies_before_clamp() {
        // 7 raw points, 6 after the penalty, still clamped to 5
        let result = analyze_password_strength("Xk9!mPz2#vLq8@wRt5$abc");
        assert_eq!(result.score, 5);
    }

    #[test]
    fn symbols_outside_alphabet_do_not_count() {
        // '~' and '/' are not in the symbol alphabet
        assert_eq!(analyze_password_strength("Ab1~/").score, 3);
        assert_eq!(analyze_password_strength("Ab1~/!").score, 4);
    }

    #[test]
    fn score_grows_with_length() {
        let mut previous = 0;
        for length in 1..=24 {
            let password: String = "Xk9!mPz2#vLq8@wRt5$yUe7".chars().cycle().take(length).collect();
            if has_repeating_patterns(&password) {
                continue;
            }
            let score = analyze_password_strength(&password).score;
            assert!(score >= previous, "length {} dropped to {}", length, score);
            previous = score;
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let password = "Tr0ub4dor&3";
        assert_eq!(analyze_password_strength(password), analyze_password_strength(password));
    }

    #[test]
    fn feedback_names_missing_checks() {
        let feedback = strength_feedback("abcdef");
        assert!(feedback.iter().any(|f| f.contains("uppercase")));
        assert!(feedback.iter().any(|f| f.contains("numbers")));
        assert!(feedback.iter().any(|f| f.contains("symbols")));
        assert!(feedback.iter().any(|f| f.contains("12 characters")));
        assert!(feedback.iter().any(|f| f.contains("repeated")));
        assert!(strength_feedback("Xk9!mPz2#vLq").is_empty());
    }
}
