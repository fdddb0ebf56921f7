// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dur - duration shorthand converter

mod commands;
mod config;
mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{format, parse, replace, units};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dur",
    version,
    about = "Convert duration shorthands like 1w2d3h to and from milliseconds"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// TOML file defining custom units (overrides DUR_UNITS_FILE)
    #[arg(long = "units", value_name = "PATH", global = true)]
    units: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert shorthands to milliseconds
    Parse(parse::ParseArgs),
    /// Convert milliseconds to shorthands
    Format(format::FormatArgs),
    /// Replace shorthands embedded in text
    Replace(replace::ReplaceArgs),
    /// List registered units, largest first
    Units,
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays machine-readable; DUR_LOG sets the filter.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env(env::LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore a second initialization attempt
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {source}")]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let source = config::resolve_source(cli.units);
    tracing::debug!(?source, "resolved unit file");
    let engine = config::load_engine(source)?;

    match cli.command {
        Commands::Parse(args) => parse::handle(args, &engine, format)?,
        Commands::Format(args) => format::handle(args, &engine, format)?,
        Commands::Replace(args) => replace::handle(args, &engine, format)?,
        Commands::Units => units::handle(&engine, format)?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
