// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-string matchers.

use regex::Regex;

use crate::error::ScoreError;

/// 1.0 when the normalized query and body are identical, 0.0 otherwise.
pub fn exact_match(query: &str, body: &str) -> f64 {
    if query == body {
        1.0
    } else {
        0.0
    }
}

/// Count non-overlapping matches of `query`, compiled as a pattern, in `body`.
///
/// The query is **not** escaped. Characters with pattern meaning (`.`, `*`,
/// `(`, ...) act as pattern syntax, and an unbalanced group fails to compile
/// with [`ScoreError::InvalidPattern`]. Callers scoring untrusted text should
/// pass it through `regex::escape` first.
///
/// An empty query matches at every character boundary, so it counts
/// `chars + 1` occurrences.
pub fn exact_containing_match(query: &str, body: &str) -> Result<f64, ScoreError> {
    let pattern = Regex::new(query).map_err(|source| ScoreError::InvalidPattern {
        pattern: query.to_string(),
        source,
    })?;

    Ok(pattern.find_iter(body).count() as f64)
}
