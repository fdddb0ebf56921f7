// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit registry: symbol to millisecond multiplier

use crate::unit::{validate_symbol, UnitError, BUILTIN_UNITS};
use indexmap::IndexMap;

/// Mapping from unit symbol to its millisecond multiplier.
///
/// Symbols are case-sensitive and unique. Redefining a symbol keeps its
/// original registration position, which is the tie-break the formatter
/// uses between units of equal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRegistry {
    units: IndexMap<String, u64>,
}

impl UnitRegistry {
    /// Registry holding only the built-in units.
    pub fn builtin() -> Self {
        Self {
            units: BUILTIN_UNITS
                .iter()
                .map(|(symbol, millis)| (symbol.to_string(), *millis))
                .collect(),
        }
    }

    /// Registry with no units at all.
    pub fn empty() -> Self {
        Self {
            units: IndexMap::new(),
        }
    }

    /// Insert or overwrite a unit, returning the previous multiplier.
    ///
    /// The registry is left untouched when the symbol or multiplier is invalid.
    pub fn define(&mut self, symbol: &str, millis: u64) -> Result<Option<u64>, UnitError> {
        validate_symbol(symbol)?;
        if millis == 0 {
            return Err(UnitError::ZeroMultiplier {
                symbol: symbol.to_string(),
            });
        }
        Ok(self.units.insert(symbol.to_string(), millis))
    }

    /// Remove a unit, returning its multiplier if it was registered.
    pub fn remove(&mut self, symbol: &str) -> Option<u64> {
        self.units.shift_remove(symbol)
    }

    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.units.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.units.contains_key(symbol)
    }

    /// Units in registration order.
    pub fn units(&self) -> impl Iterator<Item = (&str, u64)> {
        self.units
            .iter()
            .map(|(symbol, millis)| (symbol.as_str(), *millis))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
