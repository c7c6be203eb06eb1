// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring pipeline.
//!
//! Debug-mode assertions for the properties the pipeline relies on. They are
//! zero-cost in release builds (`debug_assert!`) and fail early in tests.
//!
//! | Contract Function              | Property                                      |
//! |--------------------------------|-----------------------------------------------|
//! | `check_whitespace_collapsed`   | no run of 2+ whitespace chars after collapsing |
//! | `check_tokens_reassemble`      | retaining tokens concatenate to the text      |
//! | `check_indicator`              | the exact matcher yields exactly 0 or 1       |
//! | `check_non_negative`           | a finite non-negative multiplier never yields a negative raw score |
//!
//! # Usage
//!
//! ```ignore
//! let text = normalize(query, &config);
//! check_whitespace_collapsed(&text, &config);
//! ```

use crate::config::ScoreConfig;

/// Check that collapsing left no run of two or more whitespace characters.
///
/// # Panics (debug builds only)
/// Panics if collapsing is enabled and `text` still contains such a run.
#[inline]
pub fn check_whitespace_collapsed(text: &str, config: &ScoreConfig) {
    if !config.should_collapse_whitespace {
        return;
    }
    let mut previous_ws = false;
    for c in text.chars() {
        let ws = c.is_whitespace();
        debug_assert!(
            !(ws && previous_ws),
            "Contract violation: whitespace run survived collapsing in {:?}",
            text
        );
        previous_ws = ws;
    }
}

/// Check that delimiter-retaining tokens reproduce the text they came from.
///
/// # Panics (debug builds only)
/// Panics if the retaining tokenizer dropped or reordered any input.
#[inline]
pub fn check_tokens_reassemble(text: &str, tokens: &[&str], config: &ScoreConfig) {
    if !config.should_match_whitespace_and_punctuation {
        return;
    }
    debug_assert!(
        tokens.concat() == text,
        "Contract violation: tokens {:?} do not reassemble {:?}",
        tokens,
        text
    );
}

/// Check that an indicator score is exactly 0.0 or 1.0.
#[inline]
pub fn check_indicator(strategy: &str, value: f64) {
    debug_assert!(
        value == 0.0 || value == 1.0,
        "Contract violation: {} indicator is not 0 or 1: {}",
        strategy,
        value
    );
}

/// Check that a raw (pre-points) score is non-negative when its multiplier is
/// finite and non-negative.
#[inline]
pub fn check_non_negative(strategy: &str, raw: f64, multiplier: f64) {
    if multiplier.is_finite() && multiplier >= 0.0 {
        debug_assert!(
            raw >= 0.0,
            "Contract violation: {} raw score {} < 0 with multiplier {}",
            strategy,
            raw,
            multiplier
        );
    }
}
