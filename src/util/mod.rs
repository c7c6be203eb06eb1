// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Text normalization lives here because both the matchers and the tokenizer
//! depend on it, and it depends on nothing but the config.

pub mod normalize;
