// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring for a single (query, body) pair of text.
//!
//! There is no index and no corpus. Each call is a pure function of the query,
//! the body and an optional set of config overrides, and returns one `f64`:
//! higher means more relevant, 0 means nothing in common.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │  config.rs  │────▶│ util/normalize.rs│────▶│ tokenize.rs │
//! │ (defaults,  │     │ (case, punct,    │     │ (retaining, │
//! │  overrides) │     │  whitespace)     │     │  word-only) │
//! └─────────────┘     └──────────────────┘     └─────────────┘
//!        │                     │                      │
//!        ▼                     ▼                      ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       scoring/                          │
//! │   exact · containing · frequency · consecutive          │
//! └─────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  search.rs (weighted sum)
//! ```
//!
//! # Strategies
//!
//! | Strategy     | Raw score                                    | Weight                                  |
//! |--------------|----------------------------------------------|-----------------------------------------|
//! | exact        | 1 if normalized query == normalized body     | `exactMatchPoints`                      |
//! | containing   | occurrences of the query pattern in body     | `exactContainingMatchPoints`            |
//! | single word  | length × multiplier × dampening, per pair    | `singleWordMatchPoints`                 |
//! | unique word  | length × multiplier × dampening, per token   | `uniqueSingleWordMatchPoints`           |
//! | consecutive  | longest aligned run in tokens                | `consecutiveWordMatchPoints`            |
//! | sequence     | longest aligned run in characters            | `consecutiveWordSequenceMatchPoints`    |
//!
//! # The query is a pattern
//!
//! The containing matcher compiles the normalized query with the `regex`
//! crate and does **not** escape it. `a.c` matches `abc`. A malformed pattern
//! (for example an unbalanced `(` with punctuation matching on) returns
//! [`ScoreError::InvalidPattern`]. Escape untrusted queries with
//! `regex::escape` before scoring.
//!
//! # Usage
//!
//! ```
//! use matchscore::{search, ConfigOverrides, SearchInput};
//!
//! let input = SearchInput::new("Quick Fox", "the quick brown fox").with_options(ConfigOverrides {
//!     is_case_sensitive: Some(false),
//!     ..Default::default()
//! });
//! let score = search(&input).unwrap();
//! assert!(score > 0.0);
//! ```
//!
//! # Logging
//!
//! The library emits `tracing` events (per-strategy contributions at `debug`,
//! token counts at `trace`) and never installs a subscriber.

// Module declarations
pub mod config;
pub mod contracts;
mod error;
pub mod scoring;
mod search;
pub mod testing;
pub mod tokenize;
mod util;

// Re-exports for public API
pub use config::{ConfigOverrides, ScoreConfig};
pub use error::ScoreError;
pub use search::{explain, explain_with_config, score, search, ScoreBreakdown, SearchInput};
pub use tokenize::tokenize;
pub use util::normalize::{collapse_whitespace, is_word_char, normalize, strip_punctuation};
