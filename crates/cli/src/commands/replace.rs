// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dur replace`: substitute shorthands inside free text

use anyhow::{Context, Result};
use clap::Args;
use dur_core::Shorthand;
use serde::Serialize;

use crate::output::OutputFormat;

#[derive(Args)]
pub struct ReplaceArgs {
    /// Text to scan (reads stdin when omitted)
    pub text: Option<String>,
    /// Rewrite each shorthand in canonical form instead of milliseconds
    #[arg(long)]
    pub canonical: bool,
}

#[derive(Debug, Serialize)]
struct Replaced<'a> {
    text: &'a str,
}

/// Replace occurrences with millis, or with their canonical shorthand.
pub fn rewrite(engine: &Shorthand, text: &str, canonical: bool) -> String {
    if canonical {
        engine.replace_with(text, |millis, _| {
            // Totals above i64::MAX cannot be formatted; keep them numeric
            i64::try_from(millis).map_or_else(|_| millis.to_string(), |m| engine.format(m))
        })
    } else {
        engine.replace(text)
    }
}

pub fn handle(args: ReplaceArgs, engine: &Shorthand, format: OutputFormat) -> Result<()> {
    let (input, from_stdin) = match args.text {
        Some(text) => (text, false),
        None => (
            std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?,
            true,
        ),
    };
    let output = rewrite(engine, &input, args.canonical);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&Replaced { text: &output })?
            );
        }
        // Stdin keeps its own trailing newline
        OutputFormat::Text if from_stdin => print!("{output}"),
        OutputFormat::Text => println!("{output}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod tests;
