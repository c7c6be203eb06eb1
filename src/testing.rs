// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical override builders so tests can isolate one strategy.

#![doc(hidden)]

use crate::config::ConfigOverrides;

/// A scoring strategy that can be isolated with [`only_strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Exact,
    Containing,
    SingleWord,
    UniqueSingleWord,
    /// Both consecutive contributions (word count and character span).
    Consecutive,
}

/// Overrides that set every point weight to zero.
pub fn all_zero_overrides() -> ConfigOverrides {
    ConfigOverrides {
        exact_match_points: Some(0.0),
        exact_containing_match_points: Some(0.0),
        single_word_match_points: Some(0.0),
        unique_single_word_match_points: Some(0.0),
        consecutive_word_match_points: Some(0.0),
        consecutive_word_sequence_match_points: Some(0.0),
        ..Default::default()
    }
}

/// Overrides that zero every point weight except `strategy`'s, which keeps
/// its default.
pub fn only_strategy(strategy: Strategy) -> ConfigOverrides {
    let mut overrides = all_zero_overrides();
    match strategy {
        Strategy::Exact => overrides.exact_match_points = None,
        Strategy::Containing => overrides.exact_containing_match_points = None,
        Strategy::SingleWord => overrides.single_word_match_points = None,
        Strategy::UniqueSingleWord => overrides.unique_single_word_match_points = None,
        Strategy::Consecutive => {
            overrides.consecutive_word_match_points = None;
            overrides.consecutive_word_sequence_match_points = None;
        }
    }
    overrides
}

/// Overrides selecting word-only tokenization.
pub fn word_only_overrides() -> ConfigOverrides {
    ConfigOverrides {
        should_match_whitespace_and_punctuation: Some(false),
        ..Default::default()
    }
}
