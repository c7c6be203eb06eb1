//! Tokenizer tests for both modes.

use matchscore::{normalize, tokenize, ScoreConfig};

fn word_only() -> ScoreConfig {
    ScoreConfig {
        should_match_whitespace_and_punctuation: false,
        ..ScoreConfig::DEFAULT
    }
}

#[test]
fn test_pangram_retaining() {
    let config = ScoreConfig::DEFAULT;
    let text = normalize("The quick brown fox", &config);
    assert_eq!(
        tokenize(&text, &config),
        vec!["the", " ", "quick", " ", "brown", " ", "fox"]
    );
}

#[test]
fn test_retaining_with_punctuation_kept() {
    let config = ScoreConfig {
        should_match_punctuation: true,
        ..ScoreConfig::DEFAULT
    };
    let text = normalize("Hi, there!", &config);
    assert_eq!(tokenize(&text, &config), vec!["hi", ", ", "there", "!", ""]);
}

#[test]
fn test_retaining_empty_text_has_one_empty_token() {
    assert_eq!(tokenize("", &ScoreConfig::DEFAULT), vec![""]);
}

#[test]
fn test_word_only_drops_whitespace() {
    let config = word_only();
    let text = normalize("The  quick\tbrown", &config);
    assert_eq!(tokenize(&text, &config), vec!["the", "quick", "brown"]);
}

#[test]
fn test_word_only_keeps_attached_punctuation() {
    let config = ScoreConfig {
        should_match_punctuation: true,
        ..word_only()
    };
    assert_eq!(tokenize("fox, dog.", &config), vec!["fox,", "dog."]);
}

#[test]
fn test_word_only_empty_text_has_no_tokens() {
    assert!(tokenize("", &word_only()).is_empty());
}

#[test]
fn test_duplicates_are_kept() {
    assert_eq!(tokenize("a a", &word_only()), vec!["a", "a"]);
}
