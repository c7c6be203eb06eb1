// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbosity flag picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("matchscore=debug,info")
        } else {
            EnvFilter::new("matchscore=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match &cli.command {
        Commands::Score(args) => cli::run_score(args)?,
        Commands::Defaults { format } => cli::run_defaults(*format)?,
        Commands::Tokens {
            text,
            knobs,
            format,
        } => cli::run_tokens(text, knobs, *format)?,
    }

    Ok(())
}
