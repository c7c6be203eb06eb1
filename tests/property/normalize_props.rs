//! Normalizer and tokenizer properties.

use matchscore::{collapse_whitespace, normalize, tokenize, ScoreConfig};
use proptest::prelude::*;

/// Mixed text: letters, digits, punctuation from both classes, assorted whitespace.
fn messy_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 \t\n/#%&=.,!?'\"()-]{0,60}").unwrap()
}

fn config_strategy() -> impl Strategy<Value = ScoreConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(case, punct, mode, collapse)| ScoreConfig {
            is_case_sensitive: case,
            should_match_punctuation: punct,
            should_match_whitespace_and_punctuation: mode,
            should_collapse_whitespace: collapse,
            ..ScoreConfig::DEFAULT
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: collapsing is idempotent.
    #[test]
    fn prop_collapse_idempotent(text in messy_text_strategy()) {
        let once = collapse_whitespace(&text);
        prop_assert_eq!(collapse_whitespace(&once), once);
    }

    /// Property: normalizing already-normalized text changes nothing.
    #[test]
    fn prop_normalize_idempotent(text in messy_text_strategy(), config in config_strategy()) {
        let once = normalize(&text, &config);
        prop_assert_eq!(normalize(&once, &config), once);
    }

    /// Property: no run of two whitespace characters survives collapsing.
    #[test]
    fn prop_collapsed_has_no_runs(text in messy_text_strategy()) {
        let collapsed = collapse_whitespace(&text);
        let chars: Vec<char> = collapsed.chars().collect();
        for pair in chars.windows(2) {
            prop_assert!(!(pair[0].is_whitespace() && pair[1].is_whitespace()));
        }
    }

    /// Property: stripping punctuation leaves none of it behind.
    #[test]
    fn prop_stripped_text_has_no_punctuation(text in messy_text_strategy()) {
        let config = ScoreConfig::DEFAULT;
        let normalized = normalize(&text, &config);
        for c in ['/', '#', '%', '&', '=', '-', '.', ',', '!', '?', '\'', '"', '(', ')'] {
            prop_assert!(!normalized.contains(c), "{:?} still in {:?}", c, normalized);
        }
    }

    /// Property: retaining tokens reassemble the text; word-only tokens never
    /// contain whitespace or come out empty.
    #[test]
    fn prop_tokenizer_modes(text in messy_text_strategy(), config in config_strategy()) {
        let normalized = normalize(&text, &config);
        let tokens = tokenize(&normalized, &config);
        if config.should_match_whitespace_and_punctuation {
            prop_assert_eq!(tokens.concat(), normalized.clone());
            prop_assert!(tokens.len() % 2 == 1);
        } else {
            for token in tokens {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.chars().any(char::is_whitespace));
            }
        }
    }
}
