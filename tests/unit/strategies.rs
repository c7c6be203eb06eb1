//! Individual strategies through the public `scoring` module.

use matchscore::scoring::{
    consecutive_match, exact_containing_match, exact_match, total_word_match, unique_word_match,
    word_multiplier, ConsecutiveMatch, PUNCTUATION_MULTIPLIER, STOP_WORDS, STOP_WORD_MULTIPLIER,
};
use matchscore::ScoreError;

use crate::common::assert_close;

// ============================================================================
// EXACT MATCHERS
// ============================================================================

#[test]
fn test_exact_is_indicator() {
    assert_eq!(exact_match("a b", "a b"), 1.0);
    assert_eq!(exact_match("a b", "a  b"), 0.0);
}

#[test]
fn test_containing_repeated_body() {
    assert_eq!(exact_containing_match("abc", "abc abc abc").unwrap(), 3.0);
    assert_eq!(exact_containing_match("abc", "abcabcabc").unwrap(), 3.0);
}

#[test]
fn test_containing_pattern_contract() {
    assert_eq!(exact_containing_match("fo+", "fo foo fooo").unwrap(), 3.0);
    assert!(matches!(
        exact_containing_match("[", "body"),
        Err(ScoreError::InvalidPattern { .. })
    ));
}

// ============================================================================
// FREQUENCY
// ============================================================================

#[test]
fn test_every_stop_word_is_dampened() {
    for word in STOP_WORDS {
        assert_eq!(word_multiplier(word.chars().count(), word), STOP_WORD_MULTIPLIER);
    }
}

#[test]
fn test_single_symbol_dampened_harder_than_stop_word() {
    assert_eq!(word_multiplier(1, "-"), PUNCTUATION_MULTIPLIER);
    assert!(PUNCTUATION_MULTIPLIER < STOP_WORD_MULTIPLIER);
}

#[test]
fn test_total_vs_unique() {
    let query = ["fox", " ", "fox"];
    let body = ["fox", " ", "fox", " ", "dog"];
    // fox: 2 query × 2 body × 3 = 12; " ": 1 × 2 × 0.1 = 0.2
    assert_close(total_word_match(&query, &body, 1.0), 12.2);
    // fox once (3), " " once (0.1)
    assert_close(unique_word_match(&query, &body, 1.0), 3.1);
}

#[test]
fn test_length_multiplier_scales_linearly() {
    let query = ["quick"];
    let body = ["quick"];
    assert_close(total_word_match(&query, &body, 2.5), 12.5);
    assert_close(unique_word_match(&query, &body, -1.0), -5.0);
}

// ============================================================================
// CONSECUTIVE
// ============================================================================

#[test]
fn test_consecutive_identical_single_token() {
    assert_eq!(consecutive_match(&["fox"], &["fox"]), ConsecutiveMatch::default());
}

#[test]
fn test_consecutive_prefix_alignment() {
    // k advances together with the run, so body is probed at k + run
    let query = ["a", "b", "c"];
    let body = ["a", "a", "b", "a", "x"];
    // i=0: count=3; k=0: q[0]=a b[0]=a → run 1 span 1
    //              k=1: q[1]=b b[2]=b → run 2 span 2
    //              k=2: q[2]=c b[4]=x → record (2, 2)
    assert_eq!(
        consecutive_match(&query, &body),
        ConsecutiveMatch { words: 2, chars: 2 }
    );
}
