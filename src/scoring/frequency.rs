// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-overlap scoring.
//!
//! Every shared token is worth its length in characters, scaled by a length
//! multiplier and a dampening factor. Two variants:
//!
//! - **Total**: one contribution per (query token, equal body token) pair.
//!   Duplicates on either side multiply.
//! - **Unique**: one contribution per distinct query token found in the body.
//!
//! # Dampening
//!
//! | Token                                      | Factor |
//! |--------------------------------------------|--------|
//! | one non-word character (`" "`, `","`, ...) | 0.1    |
//! | stop word: `the a of I and`                | 0.5    |
//! | anything else                              | 1.0    |
//!
//! Stop words compare case-sensitively even when scoring is case-insensitive.
//! After case folding `I` has become `i`, which is not a stop word.

use std::collections::HashSet;

use crate::util::normalize::is_word_char;

/// Factor for single-character punctuation, symbol or whitespace tokens.
pub const PUNCTUATION_MULTIPLIER: f64 = 0.1;

/// Factor for [`STOP_WORDS`].
pub const STOP_WORD_MULTIPLIER: f64 = 0.5;

pub const STOP_WORDS: &[&str] = &["the", "a", "of", "I", "and"];

/// Token length in characters.
#[inline]
pub fn token_len(token: &str) -> usize {
    token.chars().count()
}

/// Dampening factor for a token of `len` characters.
pub fn word_multiplier(len: usize, token: &str) -> f64 {
    if len == 1 && token.chars().next().is_some_and(|c| !is_word_char(c)) {
        PUNCTUATION_MULTIPLIER
    } else if STOP_WORDS.contains(&token) {
        STOP_WORD_MULTIPLIER
    } else {
        1.0
    }
}

fn weighted(token: &str, length_multiplier: f64) -> f64 {
    let len = token_len(token);
    len as f64 * length_multiplier * word_multiplier(len, token)
}

/// Sum over every (query token, equal body token) pair.
pub fn total_word_match(query_tokens: &[&str], body_tokens: &[&str], length_multiplier: f64) -> f64 {
    let mut score = 0.0;
    for query_token in query_tokens {
        let per_hit = weighted(query_token, length_multiplier);
        let hits = body_tokens.iter().filter(|t| *t == query_token).count();
        for _ in 0..hits {
            score += per_hit;
        }
    }
    score
}

/// Sum over distinct query tokens with at least one equal body token.
pub fn unique_word_match(
    query_tokens: &[&str],
    body_tokens: &[&str],
    length_multiplier: f64,
) -> f64 {
    let body: HashSet<&str> = body_tokens.iter().copied().collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(query_tokens.len());

    let mut score = 0.0;
    // Iterate in query order so the float sum is deterministic
    for &query_token in query_tokens {
        if !seen.insert(query_token) {
            continue;
        }
        if body.contains(query_token) {
            score += weighted(query_token, length_multiplier);
        }
    }
    score
}
