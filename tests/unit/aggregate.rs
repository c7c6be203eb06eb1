//! Aggregator tests: weighting, skipping, and end-to-end examples.

use matchscore::{explain, search, ConfigOverrides, ScoreConfig, ScoreError, SearchInput};

use crate::common::{
    all_zero_overrides, assert_close, breakdown_with, only_strategy, score_default, score_with,
    word_only_overrides, Strategy, PANGRAM, UNRELATED,
};

#[test]
fn test_pangram_example() {
    let related = score_default("quick fox", PANGRAM);
    let unrelated = score_default("quick fox", UNRELATED);
    assert!(related > 0.0);
    assert!(related > unrelated);
}

#[test]
fn test_pangram_breakdown() {
    let breakdown = explain(&SearchInput::new("quick fox", PANGRAM)).unwrap();
    let defaults = ScoreConfig::DEFAULT;

    assert_eq!(breakdown.exact, 0.0);
    assert_eq!(breakdown.containing, 0.0);
    // quick (5) + fox (3) + eight single spaces in the body at 0.1 each
    assert_close(breakdown.single_word, (5.0 + 3.0 + 0.8) * defaults.single_word_match_points);
    assert_close(
        breakdown.unique_single_word,
        (5.0 + 0.1 + 3.0) * defaults.unique_single_word_match_points,
    );
}

#[test]
fn test_identical_pair_scores_at_least_exact_points() {
    let total = score_default("x", "x");
    assert!(total >= ScoreConfig::DEFAULT.exact_match_points);
}

#[test]
fn test_exact_term_only_for_identical_strings() {
    let exact_only = only_strategy(Strategy::Exact);
    assert_eq!(score_with("fox", "fox", exact_only), ScoreConfig::DEFAULT.exact_match_points);
    assert_eq!(score_with("fox", "foxes", exact_only), 0.0);
    // Equal after normalization counts
    assert_eq!(score_with("FOX!", "fox", exact_only), ScoreConfig::DEFAULT.exact_match_points);
}

#[test]
fn test_case_sensitive_scores_lower() {
    let sensitive = ConfigOverrides {
        is_case_sensitive: Some(true),
        ..Default::default()
    };
    assert!(score_with("Fox", "fox", sensitive) < score_default("Fox", "fox"));

    let a = breakdown_with("Fox", "fox", sensitive);
    assert_eq!(a.single_word, 0.0);
    assert_eq!(a.unique_single_word, 0.0);
}

#[test]
fn test_containing_count_scales_with_weight() {
    let options = ConfigOverrides {
        exact_containing_match_points: Some(2.0),
        ..only_strategy(Strategy::Containing)
    };
    assert_eq!(score_with("abc", "abc abc abc", options), 6.0);
}

#[test]
fn test_all_zero_points_is_zero() {
    for (query, body) in [("fox", "fox"), ("", ""), ("quick fox", PANGRAM)] {
        assert_eq!(score_with(query, body, all_zero_overrides()), 0.0);
    }
}

#[test]
fn test_zero_multiplier_skips_strategy() {
    let options = ConfigOverrides {
        single_word_match_length_multiplier: Some(0.0),
        ..only_strategy(Strategy::SingleWord)
    };
    assert_eq!(score_with("fox", "fox", options), 0.0);
}

#[test]
fn test_invalid_pattern_propagates() {
    let options = ConfigOverrides {
        should_match_punctuation: Some(true),
        ..Default::default()
    };
    let input = SearchInput::new("fox(", "fox").with_options(options);
    let err = search(&input).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidPattern { .. }));
    assert!(err.to_string().contains("fox("));
}

#[test]
fn test_escaped_query_is_literal() {
    let options = ConfigOverrides {
        should_match_punctuation: Some(true),
        ..only_strategy(Strategy::Containing)
    };
    let query = regex::escape("c++");
    assert_eq!(
        score_with(&query, "c++ and c++", options),
        2.0 * ScoreConfig::DEFAULT.exact_containing_match_points
    );
}

#[test]
fn test_word_only_mode_ignores_spaces() {
    let options = word_only_overrides().layer(&only_strategy(Strategy::SingleWord));
    // Only "fox" is shared; spaces are not tokens in word-only mode
    assert_eq!(score_with("fox", "the fox ran", options), 3.0);
}

#[test]
fn test_consecutive_needs_a_mismatch() {
    let options = only_strategy(Strategy::Consecutive);
    // Full match never hits a mismatch, so nothing is recorded
    assert_eq!(score_with("fox", "fox", options), 0.0);

    // Word-only: query [a, b], body [a, b, c, a]
    // i=0: count(a)=2; k=0 run 1; k=1: q[1]=b vs body[2]=c → record (1, 1)
    let options = word_only_overrides().layer(&only_strategy(Strategy::Consecutive));
    let defaults = ScoreConfig::DEFAULT;
    assert_eq!(
        score_with("a b", "a b c a", options),
        defaults.consecutive_word_match_points * defaults.consecutive_word_match_length_multiplier
            + defaults.consecutive_word_sequence_match_points
                * defaults.consecutive_word_sequence_length_multiplier
    );
}

#[test]
fn test_breakdown_total_equals_search() {
    let input = SearchInput::new("lazy dog", PANGRAM);
    assert_eq!(explain(&input).unwrap().total(), search(&input).unwrap());
}
