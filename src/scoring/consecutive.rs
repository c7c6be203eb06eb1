// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Consecutive-run scoring: rewards query tokens that show up in the body in
//! the same order and adjacency.
//!
//! # Algorithm
//!
//! For every query start position `i`:
//!
//! ```text
//! count = number of body tokens equal to query[i]
//! run = 0, span = 0
//! for k in 0..count:
//!     if query[i + run] == body[k + run]:
//!         span += chars(query[i + run]); run += 1
//!     else:
//!         record(run, span); break
//! ```
//!
//! `record` keeps the global maxima of `run` (tokens) and `span` (characters).
//!
//! Two properties of this scan are kept on purpose because existing scores
//! depend on them:
//!
//! - `k` indexes `body` directly. `count` only bounds how far the scan goes;
//!   it does not say where the matching body tokens are.
//! - Maxima are only recorded on a mismatch. A scan that runs through all of
//!   `0..count` without one contributes nothing, so `"fox"` against `"fox"`
//!   scores a run of 0.
//!
//! An index past the end of either side never matches.
//!
//! Cost is `O(|query| × |body|)` for the counts plus at most `count` steps per
//! start position.

use super::frequency::token_len;

/// Longest recorded run, in tokens and in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsecutiveMatch {
    pub words: usize,
    pub chars: usize,
}

/// Scan `query_tokens` against `body_tokens` for the longest aligned run.
pub fn consecutive_match(query_tokens: &[&str], body_tokens: &[&str]) -> ConsecutiveMatch {
    let mut best = ConsecutiveMatch::default();

    for (i, start) in query_tokens.iter().enumerate() {
        let count = body_tokens.iter().filter(|t| *t == start).count();
        let mut run = 0;
        let mut span = 0;

        for k in 0..count {
            match (query_tokens.get(i + run), body_tokens.get(k + run)) {
                (Some(q), Some(b)) if q == b => {
                    span += token_len(q);
                    run += 1;
                }
                _ => {
                    best.words = best.words.max(run);
                    best.chars = best.chars.max(span);
                    break;
                }
            }
        }
    }

    best
}
