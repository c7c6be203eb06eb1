//! Normalizer tests: case folding, punctuation classes, whitespace collapsing.

use matchscore::{collapse_whitespace, normalize, strip_punctuation, ScoreConfig};

fn config_with(f: impl FnOnce(&mut ScoreConfig)) -> ScoreConfig {
    let mut config = ScoreConfig::DEFAULT;
    f(&mut config);
    config
}

#[test]
fn test_default_pipeline() {
    assert_eq!(
        normalize("  Hello,   World -- It's  #1!  ", &ScoreConfig::DEFAULT),
        " hello world its 1 "
    );
}

#[test]
fn test_spaced_class_becomes_one_space_each() {
    assert_eq!(strip_punctuation("a/b#c%d&e=f-g"), "a b c d e f g");
    assert_eq!(strip_punctuation("--"), "  ");
}

#[test]
fn test_stripped_class_leaves_no_gap() {
    assert_eq!(strip_punctuation("it's"), "its");
    assert_eq!(strip_punctuation("[a](b){c}<d>"), "abcd");
    assert_eq!(strip_punctuation("snake_case"), "snakecase");
}

#[test]
fn test_other_characters_survive_stripping() {
    assert_eq!(strip_punctuation("naïve café 42"), "naïve café 42");
}

#[test]
fn test_punctuation_kept_when_matching_punctuation() {
    let config = config_with(|c| c.should_match_punctuation = true);
    assert_eq!(normalize("A-B, c!", &config), "a-b, c!");
}

#[test]
fn test_case_sensitive_and_raw_whitespace() {
    let config = config_with(|c| {
        c.is_case_sensitive = true;
        c.should_collapse_whitespace = false;
    });
    assert_eq!(normalize("Fox  -  Dog", &config), "Fox     Dog");
}

#[test]
fn test_collapse_mixed_whitespace() {
    assert_eq!(collapse_whitespace("a\r\n\tb"), "a b");
    assert_eq!(collapse_whitespace("a\u{00A0}\u{2003}b"), "a b");
    assert_eq!(collapse_whitespace("a\nb"), "a\nb");
}
