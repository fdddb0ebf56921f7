// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Matchers compiled from a unit registry
//!
//! Three patterns share one symbol alternation, ordered longest symbol
//! first so that `hrs` is tried before `h` at every position:
//!
//! - `full`: the whole input is one or more `<digits><symbol>` segments
//! - `segment`: each `<digits><symbol>` segment, left to right
//! - `inline`: maximal runs of segments between ASCII word boundaries

use crate::registry::UnitRegistry;
use regex::Regex;

/// Compiled matchers plus the formatter's unit ordering.
///
/// Always derived from a registry snapshot through [`compile`]; never
/// updated in place.
#[derive(Debug, Clone)]
pub struct Matchers {
    /// `None` when the registry is empty: nothing can match.
    patterns: Option<Patterns>,
    /// Units by descending multiplier, ties in registration order.
    descending: Vec<(String, u64)>,
}

#[derive(Debug, Clone)]
struct Patterns {
    full: Regex,
    segment: Regex,
    inline: Regex,
}

/// Derive matchers from the registry.
pub fn compile(registry: &UnitRegistry) -> Result<Matchers, regex::Error> {
    let mut descending: Vec<(String, u64)> = registry
        .units()
        .map(|(symbol, millis)| (symbol.to_string(), millis))
        .collect();
    // Stable sort: equal multipliers keep registration order
    descending.sort_by(|a, b| b.1.cmp(&a.1));

    let patterns = if registry.is_empty() {
        None
    } else {
        let alternation = symbol_alternation(registry);
        Some(Patterns {
            full: Regex::new(&format!("^(?:[0-9]+(?:{alternation}))+$"))?,
            segment: Regex::new(&format!("([0-9]+)({alternation})"))?,
            inline: Regex::new(&format!(
                r"(?-u:\b)(?:[0-9]+(?:{alternation}))+(?-u:\b)"
            ))?,
        })
    };

    tracing::debug!(units = registry.len(), "compiled shorthand matchers");
    Ok(Matchers {
        patterns,
        descending,
    })
}

/// Escaped symbols joined with `|`, longest first.
///
/// The regex engine takes the first alternative that matches, so a symbol
/// must come before every symbol that is one of its prefixes.
fn symbol_alternation(registry: &UnitRegistry) -> String {
    let mut symbols: Vec<&str> = registry.units().map(|(symbol, _)| symbol).collect();
    symbols.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    symbols
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

impl Matchers {
    /// Whether `input` consists entirely of segments.
    pub fn is_full_match(&self, input: &str) -> bool {
        self.patterns
            .as_ref()
            .is_some_and(|p| p.full.is_match(input))
    }

    /// `(amount, symbol)` text of every segment in `input`, left to right.
    pub fn segments<'t>(&'t self, input: &'t str) -> impl Iterator<Item = (&'t str, &'t str)> {
        self.patterns
            .iter()
            .flat_map(move |p| p.segment.captures_iter(input))
            .map(|caps| {
                let (_, [amount, symbol]) = caps.extract();
                (amount, symbol)
            })
    }

    /// Pattern locating shorthand occurrences in free text.
    pub fn inline(&self) -> Option<&Regex> {
        self.patterns.as_ref().map(|p| &p.inline)
    }

    pub fn descending(&self) -> &[(String, u64)] {
        &self.descending
    }
}

#[cfg(test)]
#[path = "matchers_tests.rs"]
mod tests;
