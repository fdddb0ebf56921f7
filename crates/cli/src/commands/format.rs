// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dur format`: milliseconds to shorthand

use anyhow::Result;
use clap::Args;
use dur_core::Shorthand;
use serde::Serialize;

use crate::output::{render, OutputFormat};

#[derive(Args)]
pub struct FormatArgs {
    /// Millisecond counts to format (negative values allowed)
    #[arg(required = true, allow_negative_numbers = true)]
    pub millis: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct Formatted {
    pub millis: i64,
    pub shorthand: String,
}

pub fn evaluate(engine: &Shorthand, values: &[i64]) -> Vec<Formatted> {
    values
        .iter()
        .map(|&millis| Formatted {
            millis,
            shorthand: engine.format(millis),
        })
        .collect()
}

pub fn handle(args: FormatArgs, engine: &Shorthand, format: OutputFormat) -> Result<()> {
    let formatted = evaluate(engine, &args.millis);
    let lines = formatted.iter().map(|f| f.shorthand.clone());
    println!("{}", render(format, &formatted, lines)?);
    Ok(())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
