// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the matchscore CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `MATCHSCORE_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and falls back to plain text when stdout is not a TTY, so the
//! output stays greppable in pipelines.

use std::sync::OnceLock;

use matchscore::{ScoreBreakdown, ScoreConfig};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via MATCHSCORE_THEME
    if let Ok(theme) = std::env::var("MATCHSCORE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(RED);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    println!("{}", border(&format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded contribution: gray for skipped/zero, red for negative.
pub fn contribution(value: f64) -> String {
    let text = format!("{:>12.3}", value);
    if value == 0.0 {
        themed(GRAY, &[], &text)
    } else if value < 0.0 {
        themed(RED, &[BOLD], &text)
    } else {
        themed(GREEN, &[], &text)
    }
}

/// Box with one line per strategy and the total.
pub fn print_breakdown(query: &str, breakdown: &ScoreBreakdown) {
    section_top("SCORE");
    row(&format!(" query: {:?}", query));
    section_mid();

    let lines = [
        ("exact", breakdown.exact),
        ("containing", breakdown.containing),
        ("single word", breakdown.single_word),
        ("unique single word", breakdown.unique_single_word),
        ("consecutive words", breakdown.consecutive_words),
        ("consecutive sequence", breakdown.consecutive_sequence),
    ];
    for (label, value) in lines {
        row(&format!(" {}{}", pad_right(label, 24), contribution(value)));
    }

    section_mid();
    let total = themed(YELLOW, &[BOLD], &format!("{:>12.3}", breakdown.total()));
    row(&format!(" {}{}", pad_right("total", 24), total));
    section_bot();
}

/// Box listing every knob of a configuration.
pub fn print_config(config: &ScoreConfig) {
    section_top("CONFIG");
    let numbers = [
        ("exactMatchPoints", config.exact_match_points),
        ("exactContainingMatchPoints", config.exact_containing_match_points),
        ("singleWordMatchPoints", config.single_word_match_points),
        (
            "singleWordMatchLengthMultiplier",
            config.single_word_match_length_multiplier,
        ),
        ("uniqueSingleWordMatchPoints", config.unique_single_word_match_points),
        (
            "uniqueSingleWordMatchLengthMultiplier",
            config.unique_single_word_match_length_multiplier,
        ),
        ("consecutiveWordMatchPoints", config.consecutive_word_match_points),
        (
            "consecutiveWordMatchLengthMultiplier",
            config.consecutive_word_match_length_multiplier,
        ),
        (
            "consecutiveWordSequenceMatchPoints",
            config.consecutive_word_sequence_match_points,
        ),
        (
            "consecutiveWordSequenceLengthMultiplier",
            config.consecutive_word_sequence_length_multiplier,
        ),
    ];
    for (name, value) in numbers {
        row(&format!(" {}{}", pad_right(name, 42), pad_left(&value.to_string(), 8)));
    }

    let flags = [
        ("isCaseSensitive", config.is_case_sensitive),
        ("shouldMatchPunctuation", config.should_match_punctuation),
        (
            "shouldMatchWhitespaceAndPunctuation",
            config.should_match_whitespace_and_punctuation,
        ),
        ("shouldCollapseWhitespace", config.should_collapse_whitespace),
    ];
    for (name, value) in flags {
        row(&format!(" {}{}", pad_right(name, 42), pad_left(&value.to_string(), 8)));
    }
    section_bot();
}

/// Normalized text and its tokens, one token per line with visible quoting.
pub fn print_tokens(normalized: &str, tokens: &[&str]) {
    section_top("TOKENS");
    row(&format!(" normalized: {:?}", normalized));
    section_mid();
    for (i, token) in tokens.iter().enumerate() {
        row(&format!(" {:>4}  {:?}", i, token));
    }
    section_bot();
}
