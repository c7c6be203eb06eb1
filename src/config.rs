// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring knobs: weights, length multipliers and normalization flags.
//!
//! There is exactly one default record, [`ScoreConfig::DEFAULT`], and it is a
//! `const`. Callers adjust it with a [`ConfigOverrides`], a partial record where
//! every field is optional. Merging is shallow: whatever the override leaves
//! unset keeps its default value. Nothing is range-checked. Negative and
//! fractional weights are legal and simply scale the score.
//!
//! JSON keys use camelCase (`exactMatchPoints`, `isCaseSensitive`, ...) so that
//! override files read the same as the knob names in the docs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// The effective configuration for one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreConfig {
    /// Applied once when the normalized query equals the normalized body.
    pub exact_match_points: f64,
    /// Applied per occurrence of the query pattern in the body.
    pub exact_containing_match_points: f64,
    /// Weight of the total word-frequency score (duplicates counted).
    pub single_word_match_points: f64,
    pub single_word_match_length_multiplier: f64,
    /// Weight of the unique word-frequency score (each query token once).
    pub unique_single_word_match_points: f64,
    pub unique_single_word_match_length_multiplier: f64,
    /// Weight of the longest consecutive run, counted in tokens.
    pub consecutive_word_match_points: f64,
    pub consecutive_word_match_length_multiplier: f64,
    /// Weight of the longest consecutive run, counted in characters.
    pub consecutive_word_sequence_match_points: f64,
    pub consecutive_word_sequence_length_multiplier: f64,
    /// Skip case folding.
    pub is_case_sensitive: bool,
    /// Keep punctuation. When false, punctuation is stripped before matching.
    pub should_match_punctuation: bool,
    /// Tokenizer mode: keep whitespace/punctuation runs as tokens (true) or
    /// split on whitespace only (false).
    pub should_match_whitespace_and_punctuation: bool,
    /// Collapse runs of two or more whitespace characters into one space.
    pub should_collapse_whitespace: bool,
}

impl ScoreConfig {
    pub const DEFAULT: ScoreConfig = ScoreConfig {
        exact_match_points: 10.0,
        exact_containing_match_points: 5.0,
        single_word_match_points: 1.0,
        single_word_match_length_multiplier: 1.0,
        unique_single_word_match_points: 1.0,
        unique_single_word_match_length_multiplier: 1.0,
        consecutive_word_match_points: 2.0,
        consecutive_word_match_length_multiplier: 1.0,
        consecutive_word_sequence_match_points: 1.0,
        consecutive_word_sequence_length_multiplier: 1.0,
        is_case_sensitive: false,
        should_match_punctuation: false,
        should_match_whitespace_and_punctuation: true,
        should_collapse_whitespace: true,
    };

    /// Shallow-merge `overrides` over `self`. Unset fields keep their value.
    pub fn merge(&self, overrides: &ConfigOverrides) -> ScoreConfig {
        ScoreConfig {
            exact_match_points: overrides
                .exact_match_points
                .unwrap_or(self.exact_match_points),
            exact_containing_match_points: overrides
                .exact_containing_match_points
                .unwrap_or(self.exact_containing_match_points),
            single_word_match_points: overrides
                .single_word_match_points
                .unwrap_or(self.single_word_match_points),
            single_word_match_length_multiplier: overrides
                .single_word_match_length_multiplier
                .unwrap_or(self.single_word_match_length_multiplier),
            unique_single_word_match_points: overrides
                .unique_single_word_match_points
                .unwrap_or(self.unique_single_word_match_points),
            unique_single_word_match_length_multiplier: overrides
                .unique_single_word_match_length_multiplier
                .unwrap_or(self.unique_single_word_match_length_multiplier),
            consecutive_word_match_points: overrides
                .consecutive_word_match_points
                .unwrap_or(self.consecutive_word_match_points),
            consecutive_word_match_length_multiplier: overrides
                .consecutive_word_match_length_multiplier
                .unwrap_or(self.consecutive_word_match_length_multiplier),
            consecutive_word_sequence_match_points: overrides
                .consecutive_word_sequence_match_points
                .unwrap_or(self.consecutive_word_sequence_match_points),
            consecutive_word_sequence_length_multiplier: overrides
                .consecutive_word_sequence_length_multiplier
                .unwrap_or(self.consecutive_word_sequence_length_multiplier),
            is_case_sensitive: overrides.is_case_sensitive.unwrap_or(self.is_case_sensitive),
            should_match_punctuation: overrides
                .should_match_punctuation
                .unwrap_or(self.should_match_punctuation),
            should_match_whitespace_and_punctuation: overrides
                .should_match_whitespace_and_punctuation
                .unwrap_or(self.should_match_whitespace_and_punctuation),
            should_collapse_whitespace: overrides
                .should_collapse_whitespace
                .unwrap_or(self.should_collapse_whitespace),
        }
    }

    /// Defaults merged with `overrides`.
    pub fn with_overrides(overrides: &ConfigOverrides) -> ScoreConfig {
        Self::DEFAULT.merge(overrides)
    }

    /// Whether any token-based strategy will run.
    ///
    /// When this is false the tokenizer is never invoked.
    pub fn needs_tokens(&self) -> bool {
        self.total_words_enabled()
            || self.unique_words_enabled()
            || self.consecutive_words_enabled()
            || self.consecutive_sequence_enabled()
    }

    pub(crate) fn total_words_enabled(&self) -> bool {
        self.single_word_match_points != 0.0 && self.single_word_match_length_multiplier != 0.0
    }

    pub(crate) fn unique_words_enabled(&self) -> bool {
        self.unique_single_word_match_points != 0.0
            && self.unique_single_word_match_length_multiplier != 0.0
    }

    pub(crate) fn consecutive_words_enabled(&self) -> bool {
        self.consecutive_word_match_points != 0.0
            && self.consecutive_word_match_length_multiplier != 0.0
    }

    pub(crate) fn consecutive_sequence_enabled(&self) -> bool {
        self.consecutive_word_sequence_match_points != 0.0
            && self.consecutive_word_sequence_length_multiplier != 0.0
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A partial [`ScoreConfig`]. `None` (or a missing / `null` JSON key) means
/// "keep the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_match_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_containing_match_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_word_match_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_word_match_length_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_single_word_match_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_single_word_match_length_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_word_match_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_word_match_length_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_word_sequence_match_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_word_sequence_length_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_case_sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_match_punctuation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_match_whitespace_and_punctuation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_collapse_whitespace: Option<bool>,
}

impl ConfigOverrides {
    /// Parse overrides from a JSON object such as `{"isCaseSensitive": true}`.
    pub fn from_json_str(json: &str) -> Result<Self, ScoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON override file.
    pub fn from_path(path: &Path) -> Result<Self, ScoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| ScoreError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Layer `other` on top of `self`: fields set in `other` win.
    ///
    /// Used by the CLI to stack command-line flags over a config file.
    pub fn layer(&self, other: &ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            exact_match_points: other.exact_match_points.or(self.exact_match_points),
            exact_containing_match_points: other
                .exact_containing_match_points
                .or(self.exact_containing_match_points),
            single_word_match_points: other
                .single_word_match_points
                .or(self.single_word_match_points),
            single_word_match_length_multiplier: other
                .single_word_match_length_multiplier
                .or(self.single_word_match_length_multiplier),
            unique_single_word_match_points: other
                .unique_single_word_match_points
                .or(self.unique_single_word_match_points),
            unique_single_word_match_length_multiplier: other
                .unique_single_word_match_length_multiplier
                .or(self.unique_single_word_match_length_multiplier),
            consecutive_word_match_points: other
                .consecutive_word_match_points
                .or(self.consecutive_word_match_points),
            consecutive_word_match_length_multiplier: other
                .consecutive_word_match_length_multiplier
                .or(self.consecutive_word_match_length_multiplier),
            consecutive_word_sequence_match_points: other
                .consecutive_word_sequence_match_points
                .or(self.consecutive_word_sequence_match_points),
            consecutive_word_sequence_length_multiplier: other
                .consecutive_word_sequence_length_multiplier
                .or(self.consecutive_word_sequence_length_multiplier),
            is_case_sensitive: other.is_case_sensitive.or(self.is_case_sensitive),
            should_match_punctuation: other
                .should_match_punctuation
                .or(self.should_match_punctuation),
            should_match_whitespace_and_punctuation: other
                .should_match_whitespace_and_punctuation
                .or(self.should_match_whitespace_and_punctuation),
            should_collapse_whitespace: other
                .should_collapse_whitespace
                .or(self.should_collapse_whitespace),
        }
    }
}
