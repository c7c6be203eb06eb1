// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the step every matcher sees the output of.
//!
//! Three passes, in this order:
//!
//! 1. Case folding (unless `is_case_sensitive`)
//! 2. Punctuation removal (unless `should_match_punctuation`)
//! 3. Whitespace collapsing (if `should_collapse_whitespace`)
//!
//! The order matters. Punctuation removal turns `a - b` into `a   b`, and the
//! collapsing pass then folds that back to `a b`.
//!
//! # Punctuation classes
//!
//! | Class    | Characters                                  | Replaced with |
//! |----------|---------------------------------------------|---------------|
//! | Spaced   | `/ # % & = -`                               | one space     |
//! | Stripped | quotes, brackets and sentence punctuation, see [`STRIPPED_PUNCTUATION`] | nothing |
//!
//! Spaced characters usually join two words (`and/or`, `e-mail`), so they turn
//! into a word break. Stripped characters usually hug a single word.

use crate::config::ScoreConfig;

/// Characters that become a single space when punctuation is stripped.
pub const SPACED_PUNCTUATION: &[char] = &['/', '#', '%', '&', '=', '-'];

/// Characters deleted outright when punctuation is stripped.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', '$', '^', '*', ';', ':', '_', '~', '`', '\'', '"', '(', ')', '[', ']',
    '{', '}', '<', '>', '+', '|', '\\', '@', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}',
];

/// Word characters for tokenization and dampening: ASCII `[A-Za-z0-9_]`.
///
/// Deliberately ASCII-only. `é` is a delimiter, not part of a word.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Normalize `text` according to `config`.
///
/// # Example
///
/// ```
/// use matchscore::{normalize, ScoreConfig};
///
/// assert_eq!(normalize("Rock & Roll!", &ScoreConfig::DEFAULT), "rock roll");
/// ```
pub fn normalize(text: &str, config: &ScoreConfig) -> String {
    let mut value = if config.is_case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    };

    if !config.should_match_punctuation {
        value = strip_punctuation(&value);
    }

    if config.should_collapse_whitespace {
        value = collapse_whitespace(&value);
    }

    value
}

/// Replace spaced punctuation with a space, then drop stripped punctuation.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .map(|c| if SPACED_PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect()
}

/// Replace every run of two or more whitespace characters with one space.
///
/// A lone whitespace character is kept as-is, so a single tab stays a tab.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        flush_whitespace_run(&mut out, &mut run);
        out.push(c);
    }
    flush_whitespace_run(&mut out, &mut run);

    out
}

fn flush_whitespace_run(out: &mut String, run: &mut String) {
    match run.chars().count() {
        0 => {}
        1 => out.push_str(run),
        _ => out.push(' '),
    }
    run.clear();
}
