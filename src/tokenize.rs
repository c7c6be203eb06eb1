// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization of normalized text.
//!
//! Two modes, picked by `should_match_whitespace_and_punctuation`:
//!
//! - **Delimiter-retaining** (default). The text is cut at every maximal run of
//!   non-word characters and the runs themselves are kept as tokens, so spacing
//!   and punctuation take part in matching. The output always alternates
//!   word slot, delimiter, word slot, ... and starts and ends with a word slot.
//!   A slot is empty when the text starts or ends with a delimiter, or when the
//!   text is empty. Concatenating the tokens gives back the input.
//! - **Word-only**. Maximal runs of non-whitespace; whitespace is dropped.
//!
//! ```text
//! "the quick, fox"   retaining  → ["the", " ", "quick", ", ", "fox"]
//! " fox."            retaining  → ["", " ", "fox", ".", ""]
//! "the quick, fox"   word-only  → ["the", "quick,", "fox"]
//! ```
//!
//! Tokens borrow from the input; nothing is deduplicated here.

use crate::config::ScoreConfig;
use crate::util::normalize::is_word_char;

/// Split normalized `text` into tokens using the mode selected by `config`.
pub fn tokenize<'a>(text: &'a str, config: &ScoreConfig) -> Vec<&'a str> {
    if config.should_match_whitespace_and_punctuation {
        split_keep_delimiters(text)
    } else {
        let words = split_words(text);
        if config.should_match_punctuation {
            words
        } else {
            // split_words never yields whitespace, so this filter keeps everything
            words
                .into_iter()
                .filter(|token| !token.chars().all(char::is_whitespace))
                .collect()
        }
    }
}

/// Delimiter-retaining split on runs of non-word characters.
pub fn split_keep_delimiters(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    // Start of the current word slot
    let mut word_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if is_word_char(c) {
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(next, nc)) = chars.peek() {
            if is_word_char(nc) {
                break;
            }
            end = next + nc.len_utf8();
            chars.next();
        }

        tokens.push(&text[word_start..start]);
        tokens.push(&text[start..end]);
        word_start = end;
    }

    tokens.push(&text[word_start..]);
    tokens
}

/// Word-only split: maximal runs of non-whitespace.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
