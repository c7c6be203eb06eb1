// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by scoring and config loading.
//!
//! Scoring itself is total over its inputs with one exception: the containing
//! matcher compiles the normalized query as a pattern, and a malformed pattern
//! aborts the whole computation. Nothing is caught or retried internally.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    /// The normalized query is not a valid pattern for the containing matcher.
    ///
    /// Callers passing untrusted query text should escape it first
    /// (`regex::escape`).
    #[error("query is not a valid containing-match pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config overrides: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
