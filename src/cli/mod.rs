// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the matchscore command-line interface.
//!
//! Three subcommands: `score` to score one query against one body, `defaults`
//! to print the default configuration, and `tokens` to show what the
//! normalizer and tokenizer make of a piece of text. Every knob has a flag,
//! and flags layer over an optional `--config` JSON file.

pub mod display;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use matchscore::{explain_with_config, normalize, tokenize, ConfigOverrides, ScoreConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "matchscore",
    about = "Score how relevant a body of text is to a query",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (per-strategy contributions)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a query against a body
    Score(ScoreArgs),

    /// Print the default configuration
    Defaults {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show normalized text and tokens for a piece of text
    Tokens {
        /// Text to normalize and tokenize
        #[arg(long)]
        text: String,

        #[command(flatten)]
        knobs: KnobArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Query text. Used as a pattern by the containing matcher; see --literal
    #[arg(short, long)]
    pub query: String,

    /// Body text (reads stdin when neither --body nor --body-file is given)
    #[arg(short, long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Escape the query so the containing matcher treats it literally
    #[arg(long)]
    pub literal: bool,

    /// Print the per-strategy breakdown instead of just the score
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub knobs: KnobArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One flag per configuration knob, layered over `--config`.
#[derive(Args, Default)]
pub struct KnobArgs {
    /// JSON file with partial config overrides (camelCase keys)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    pub exact_match_points: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub exact_containing_match_points: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub single_word_match_points: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub single_word_match_length_multiplier: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub unique_single_word_match_points: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub unique_single_word_match_length_multiplier: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub consecutive_word_match_points: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub consecutive_word_match_length_multiplier: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub consecutive_word_sequence_match_points: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub consecutive_word_sequence_length_multiplier: Option<f64>,

    /// Do not fold case before matching
    #[arg(long)]
    pub case_sensitive: bool,

    /// Keep punctuation instead of stripping it
    #[arg(long)]
    pub match_punctuation: bool,

    /// Split on whitespace only; do not keep delimiters as tokens
    #[arg(long)]
    pub word_only: bool,

    /// Keep runs of whitespace as they are
    #[arg(long)]
    pub no_collapse_whitespace: bool,
}

impl KnobArgs {
    /// Overrides from the flags alone. Boolean flags only override when set.
    pub fn flag_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            exact_match_points: self.exact_match_points,
            exact_containing_match_points: self.exact_containing_match_points,
            single_word_match_points: self.single_word_match_points,
            single_word_match_length_multiplier: self.single_word_match_length_multiplier,
            unique_single_word_match_points: self.unique_single_word_match_points,
            unique_single_word_match_length_multiplier: self
                .unique_single_word_match_length_multiplier,
            consecutive_word_match_points: self.consecutive_word_match_points,
            consecutive_word_match_length_multiplier: self.consecutive_word_match_length_multiplier,
            consecutive_word_sequence_match_points: self.consecutive_word_sequence_match_points,
            consecutive_word_sequence_length_multiplier: self
                .consecutive_word_sequence_length_multiplier,
            is_case_sensitive: self.case_sensitive.then_some(true),
            should_match_punctuation: self.match_punctuation.then_some(true),
            should_match_whitespace_and_punctuation: self.word_only.then_some(false),
            should_collapse_whitespace: self.no_collapse_whitespace.then_some(false),
        }
    }

    /// Defaults < config file < flags.
    pub fn resolve(&self) -> Result<ScoreConfig> {
        let file = match &self.config {
            Some(path) => load_overrides(path)?,
            None => ConfigOverrides::default(),
        };
        let overrides = file.layer(&self.flag_overrides());
        debug!(?overrides, "resolved config overrides");
        Ok(ScoreConfig::with_overrides(&overrides))
    }
}

fn load_overrides(path: &Path) -> Result<ConfigOverrides> {
    ConfigOverrides::from_path(path)
        .with_context(|| format!("Failed to load config overrides from {}", path.display()))
}

fn read_body(args: &ScoreArgs) -> Result<String> {
    if let Some(body) = &args.body {
        return Ok(body.clone());
    }
    if let Some(path) = &args.body_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read body file {}", path.display()));
    }
    if atty::is(atty::Stream::Stdin) {
        bail!("No body given: pass --body, --body-file, or pipe text on stdin");
    }
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("Failed to read body from stdin")?;
    Ok(body)
}

pub fn run_score(args: &ScoreArgs) -> Result<()> {
    let config = args.knobs.resolve()?;
    let body = read_body(args)?;
    let query = if args.literal {
        regex::escape(&args.query)
    } else {
        args.query.clone()
    };

    let breakdown = explain_with_config(&query, &body, &config)
        .with_context(|| format!("Failed to score query {:?}", args.query))?;

    match (args.format, args.explain) {
        (OutputFormat::Json, true) => {
            let json = serde_json::json!({
                "score": breakdown.total(),
                "breakdown": breakdown,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        (OutputFormat::Json, false) => {
            println!("{}", serde_json::json!({ "score": breakdown.total() }));
        }
        (OutputFormat::Text, true) => display::print_breakdown(&args.query, &breakdown),
        (OutputFormat::Text, false) => println!("{}", breakdown.total()),
    }
    Ok(())
}

pub fn run_defaults(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ScoreConfig::DEFAULT)?);
        }
        OutputFormat::Text => display::print_config(&ScoreConfig::DEFAULT),
    }
    Ok(())
}

pub fn run_tokens(text: &str, knobs: &KnobArgs, format: OutputFormat) -> Result<()> {
    let config = knobs.resolve()?;
    let normalized = normalize(text, &config);
    let tokens = tokenize(&normalized, &config);

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "normalized": normalized,
                "tokens": tokens,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => display::print_tokens(&normalized, &tokens),
    }
    Ok(())
}
