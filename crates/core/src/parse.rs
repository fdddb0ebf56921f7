// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shorthand to milliseconds

use crate::shorthand::Shorthand;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// One `<amount><unit>` segment of a shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub amount: u64,
    pub unit: String,
}

/// Errors that can occur while parsing a shorthand
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShorthandError {
    #[error("Unrecognised shorthand: {input}")]
    Unrecognized { input: String },

    #[error("shorthand exceeds the millisecond range: {input}")]
    Overflow { input: String },
}

impl ShorthandError {
    /// The input exactly as the caller passed it.
    pub fn input(&self) -> &str {
        match self {
            Self::Unrecognized { input } | Self::Overflow { input } => input,
        }
    }
}

impl Shorthand {
    /// Parse a shorthand such as `"1w2d3h"` into milliseconds.
    ///
    /// The whole input must be one or more `<digits><unit>` segments.
    /// Repeated units each contribute, so `"1h1h"` is two hours.
    pub fn parse(&self, shorthand: &str) -> Result<u64, ShorthandError> {
        let parts = self.parse_parts(shorthand)?;
        self.total(&parts).ok_or_else(|| ShorthandError::Overflow {
            input: shorthand.to_string(),
        })
    }

    /// Parse a shorthand into its segments, in source order.
    pub fn parse_parts(&self, shorthand: &str) -> Result<Vec<Part>, ShorthandError> {
        if !self.matchers.is_full_match(shorthand) {
            tracing::trace!(input = shorthand, "rejected shorthand");
            return Err(ShorthandError::Unrecognized {
                input: shorthand.to_string(),
            });
        }
        self.extract_parts(shorthand).ok_or_else(|| ShorthandError::Overflow {
            input: shorthand.to_string(),
        })
    }

    /// Parse a shorthand into a [`Duration`].
    pub fn parse_duration(&self, shorthand: &str) -> Result<Duration, ShorthandError> {
        self.parse(shorthand).map(Duration::from_millis)
    }

    /// Segments of `text` without validating the whole string.
    ///
    /// `None` if an amount does not fit in a `u64`.
    pub(crate) fn extract_parts(&self, text: &str) -> Option<Vec<Part>> {
        self.matchers
            .segments(text)
            .map(|(amount, unit)| {
                Some(Part {
                    amount: amount.parse().ok()?,
                    unit: unit.to_string(),
                })
            })
            .collect()
    }

    /// Sum of all parts in milliseconds; `None` on overflow.
    pub(crate) fn total(&self, parts: &[Part]) -> Option<u64> {
        parts.iter().try_fold(0u64, |sum, part| {
            // Parts only ever name symbols the matchers were compiled from
            let millis = self.registry.get(&part.unit)?;
            sum.checked_add(part.amount.checked_mul(millis)?)
        })
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
