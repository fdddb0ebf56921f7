// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dur parse`: shorthand to milliseconds

use anyhow::Result;
use clap::Args;
use dur_core::{Part, Shorthand, ShorthandError};
use serde::Serialize;

use crate::output::{render, OutputFormat};

#[derive(Args)]
pub struct ParseArgs {
    /// Shorthands to convert (e.g. 1w2d3h)
    #[arg(required = true)]
    pub shorthands: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Parsed {
    pub input: String,
    pub millis: u64,
    pub parts: Vec<Part>,
}

/// Parse every input; the first invalid one aborts.
pub fn evaluate(engine: &Shorthand, inputs: &[String]) -> Result<Vec<Parsed>, ShorthandError> {
    inputs
        .iter()
        .map(|input| -> Result<Parsed, ShorthandError> {
            let parts = engine.parse_parts(input)?;
            Ok(Parsed {
                input: input.clone(),
                millis: engine.parse(input)?,
                parts,
            })
        })
        .collect()
}

pub fn handle(args: ParseArgs, engine: &Shorthand, format: OutputFormat) -> Result<()> {
    let parsed = evaluate(engine, &args.shorthands)?;
    let lines = parsed.iter().map(|p| p.millis.to_string());
    println!("{}", render(format, &parsed, lines)?);
    Ok(())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
