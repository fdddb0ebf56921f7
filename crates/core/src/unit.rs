// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit symbols and their millisecond multipliers

use thiserror::Error;

pub const MILLISECOND: u64 = 1;
pub const SECOND: u64 = 1000 * MILLISECOND;
pub const MINUTE: u64 = 60 * SECOND;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;
pub const WEEK: u64 = 7 * DAY;
/// Fixed 30-day month.
pub const MONTH: u64 = 30 * DAY;
/// Fixed 365-day year.
pub const YEAR: u64 = 365 * DAY;

/// Units every fresh registry starts with, in registration order.
pub const BUILTIN_UNITS: &[(&str, u64)] = &[
    ("ms", MILLISECOND),
    ("s", SECOND),
    ("m", MINUTE),
    ("h", HOUR),
    ("d", DAY),
    ("w", WEEK),
    ("M", MONTH),
    ("y", YEAR),
];

/// Errors raised when defining or removing units
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("invalid unit symbol '{symbol}': must be non-empty and contain no digits or whitespace")]
    InvalidSymbol { symbol: String },

    #[error("invalid multiplier for unit '{symbol}': must be at least 1ms")]
    ZeroMultiplier { symbol: String },

    #[error("failed to compile unit patterns: {0}")]
    Pattern(#[from] regex::Error),
}

/// Check that `symbol` can appear after an amount without ambiguity.
///
/// Digits would blur the boundary between amount and unit, and whitespace
/// can never be part of a valid shorthand.
pub fn validate_symbol(symbol: &str) -> Result<(), UnitError> {
    let valid = !symbol.is_empty()
        && !symbol
            .chars()
            .any(|c| c.is_ascii_digit() || c.is_whitespace());
    if valid {
        Ok(())
    } else {
        Err(UnitError::InvalidSymbol {
            symbol: symbol.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
