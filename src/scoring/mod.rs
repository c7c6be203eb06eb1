// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring strategies: each one turns normalized text or tokens into a raw
//! number, and the aggregator in `search` applies the point weights.
//!
//! | Strategy    | Input            | Raw output                               |
//! |-------------|------------------|------------------------------------------|
//! | exact       | normalized text  | 1 or 0                                   |
//! | containing  | normalized text  | pattern occurrence count                 |
//! | frequency   | tokens           | length-weighted, dampened overlap        |
//! | consecutive | tokens           | longest aligned run (tokens, characters) |
//!
//! Length multipliers are applied here for the frequency scorers because the
//! dampening factor is per token. The consecutive scorer returns plain counts
//! and the aggregator applies both multiplier and points.

mod consecutive;
mod exact;
mod frequency;

pub use consecutive::{consecutive_match, ConsecutiveMatch};
pub use exact::{exact_containing_match, exact_match};
pub use frequency::{
    token_len, total_word_match, unique_word_match, word_multiplier, PUNCTUATION_MULTIPLIER,
    STOP_WORDS, STOP_WORD_MULTIPLIER,
};
