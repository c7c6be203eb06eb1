// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The aggregator: one (query, body) pair in, one number out.
//!
//! ```text
//! overrides ──▶ ScoreConfig::merge ──┐
//! query ──▶ normalize ──▶ tokenize ──┼──▶ exact / containing / frequency / consecutive
//! body  ──▶ normalize ──▶ tokenize ──┘                    │
//!                                                          ▼
//!                                              weighted sum (ScoreBreakdown)
//! ```
//!
//! A strategy whose points or required multiplier is exactly zero is never
//! invoked, and the tokenizer is skipped when no token strategy is enabled.
//! Skipping is an optimization with one visible effect: a zero-weighted
//! containing matcher never compiles the query, so a malformed pattern is only
//! an error when that strategy actually runs.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::{ConfigOverrides, ScoreConfig};
use crate::contracts::{
    check_indicator, check_non_negative, check_tokens_reassemble, check_whitespace_collapsed,
};
use crate::error::ScoreError;
use crate::scoring::{
    consecutive_match, exact_containing_match, exact_match, total_word_match, unique_word_match,
};
use crate::tokenize::tokenize;
use crate::util::normalize::normalize;

/// One scoring request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchInput<'a> {
    pub query: &'a str,
    pub body: &'a str,
    pub options: ConfigOverrides,
}

impl<'a> SearchInput<'a> {
    /// A request that uses the default configuration.
    pub fn new(query: &'a str, body: &'a str) -> Self {
        Self {
            query,
            body,
            options: ConfigOverrides::default(),
        }
    }

    pub fn with_options(mut self, options: ConfigOverrides) -> Self {
        self.options = options;
        self
    }
}

/// Weighted contribution of every strategy. Skipped strategies are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub exact: f64,
    pub containing: f64,
    pub single_word: f64,
    pub unique_single_word: f64,
    pub consecutive_words: f64,
    pub consecutive_sequence: f64,
}

impl ScoreBreakdown {
    /// Sum of all contributions, added in a fixed order.
    pub fn total(&self) -> f64 {
        self.exact
            + self.containing
            + self.single_word
            + self.unique_single_word
            + self.consecutive_words
            + self.consecutive_sequence
    }
}

/// Score `input.query` against `input.body`.
///
/// The query is used as a pattern by the containing matcher and is not
/// escaped; see [`exact_containing_match`](crate::scoring::exact_containing_match).
///
/// # Example
///
/// ```
/// use matchscore::{search, SearchInput};
///
/// let related = search(&SearchInput::new(
///     "quick fox",
///     "The quick brown fox jumps over the lazy dog",
/// ))
/// .unwrap();
/// let unrelated = search(&SearchInput::new("quick fox", "completely unrelated text")).unwrap();
/// assert!(related > unrelated);
/// ```
pub fn search(input: &SearchInput<'_>) -> Result<f64, ScoreError> {
    explain(input).map(|breakdown| breakdown.total())
}

/// Same as [`search`], but returns each strategy's contribution.
pub fn explain(input: &SearchInput<'_>) -> Result<ScoreBreakdown, ScoreError> {
    let config = ScoreConfig::with_overrides(&input.options);
    explain_with_config(input.query, input.body, &config)
}

/// Score with an already-merged configuration.
pub fn score(query: &str, body: &str, config: &ScoreConfig) -> Result<f64, ScoreError> {
    explain_with_config(query, body, config).map(|breakdown| breakdown.total())
}

/// Per-strategy contributions with an already-merged configuration.
pub fn explain_with_config(
    query: &str,
    body: &str,
    config: &ScoreConfig,
) -> Result<ScoreBreakdown, ScoreError> {
    let query = normalize(query, config);
    let body = normalize(body, config);
    check_whitespace_collapsed(&query, config);
    check_whitespace_collapsed(&body, config);

    let mut breakdown = ScoreBreakdown::default();

    if config.exact_match_points != 0.0 {
        let raw = exact_match(&query, &body);
        check_indicator("exact", raw);
        breakdown.exact = raw * config.exact_match_points;
    }

    if config.exact_containing_match_points != 0.0 {
        let raw = exact_containing_match(&query, &body)?;
        breakdown.containing = raw * config.exact_containing_match_points;
    }

    if config.needs_tokens() {
        let query_tokens = tokenize(&query, config);
        let body_tokens = tokenize(&body, config);
        check_tokens_reassemble(&query, &query_tokens, config);
        check_tokens_reassemble(&body, &body_tokens, config);
        trace!(
            query_tokens = query_tokens.len(),
            body_tokens = body_tokens.len(),
            "tokenized"
        );

        if config.total_words_enabled() {
            let multiplier = config.single_word_match_length_multiplier;
            let raw = total_word_match(&query_tokens, &body_tokens, multiplier);
            check_non_negative("singleWord", raw, multiplier);
            breakdown.single_word = raw * config.single_word_match_points;
        }

        if config.unique_words_enabled() {
            let multiplier = config.unique_single_word_match_length_multiplier;
            let raw = unique_word_match(&query_tokens, &body_tokens, multiplier);
            check_non_negative("uniqueSingleWord", raw, multiplier);
            breakdown.unique_single_word = raw * config.unique_single_word_match_points;
        }

        if config.consecutive_words_enabled() || config.consecutive_sequence_enabled() {
            let run = consecutive_match(&query_tokens, &body_tokens);
            trace!(words = run.words, chars = run.chars, "longest consecutive run");

            if config.consecutive_words_enabled() {
                breakdown.consecutive_words = run.words as f64
                    * config.consecutive_word_match_length_multiplier
                    * config.consecutive_word_match_points;
            }
            if config.consecutive_sequence_enabled() {
                breakdown.consecutive_sequence = run.chars as f64
                    * config.consecutive_word_sequence_length_multiplier
                    * config.consecutive_word_sequence_match_points;
            }
        }
    }

    debug!(
        exact = breakdown.exact,
        containing = breakdown.containing,
        single_word = breakdown.single_word,
        unique_single_word = breakdown.unique_single_word,
        consecutive_words = breakdown.consecutive_words,
        consecutive_sequence = breakdown.consecutive_sequence,
        total = breakdown.total(),
        "scored pair"
    );

    Ok(breakdown)
}
