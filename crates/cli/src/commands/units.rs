// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dur units`: list registered units

use anyhow::Result;
use dur_core::Shorthand;
use serde::Serialize;

use crate::output::{render, OutputFormat};

#[derive(Debug, Serialize)]
pub struct UnitRow<'a> {
    pub symbol: &'a str,
    pub millis: u64,
}

/// Units largest first, matching the order `format` emits them in.
pub fn rows(engine: &Shorthand) -> Vec<UnitRow<'_>> {
    engine
        .units_descending()
        .map(|(symbol, millis)| UnitRow { symbol, millis })
        .collect()
}

/// Symbol column padded to the longest symbol.
pub fn text_lines(rows: &[UnitRow<'_>]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|r| r.symbol.chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|r| format!("{:<width$}  {}", r.symbol, r.millis))
        .collect()
}

pub fn handle(engine: &Shorthand, format: OutputFormat) -> Result<()> {
    let rows = rows(engine);
    let lines = text_lines(&rows);
    println!("{}", render(format, &rows, lines)?);
    Ok(())
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
