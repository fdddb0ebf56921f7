// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Milliseconds to shorthand

use crate::shorthand::Shorthand;
use std::time::Duration;

impl Shorthand {
    /// Format milliseconds as a shorthand, largest unit first: `"2w3d1ms"`.
    ///
    /// Negative values get a leading `-`; zero formats as `""`. A remainder
    /// smaller than every registered unit is dropped.
    pub fn format(&self, millis: i64) -> String {
        let sign = if millis < 0 { "-" } else { "" };
        format!("{sign}{}", self.decompose(millis.unsigned_abs()))
    }

    /// Format a [`Duration`]; sub-millisecond precision is truncated.
    pub fn format_duration(&self, duration: Duration) -> String {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.decompose(millis)
    }

    fn decompose(&self, mut rest: u64) -> String {
        let mut out = String::new();
        for (symbol, millis) in self.matchers.descending() {
            if rest == 0 {
                break;
            }
            let count = rest / millis;
            if count > 0 {
                out.push_str(&format!("{count}{symbol}"));
                rest %= millis;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
