// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render `value` as pretty JSON, or each text line joined with newlines.
pub fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text_lines: impl IntoIterator<Item = String>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text_lines.into_iter().collect::<Vec<_>>().join("\n")),
    }
}
