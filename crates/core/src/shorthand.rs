// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shorthand engine: a unit registry with its compiled matchers

use crate::matchers::{compile, Matchers};
use crate::registry::UnitRegistry;
use crate::unit::UnitError;

/// Duration shorthand engine.
///
/// Owns a [`UnitRegistry`] and the [`Matchers`] compiled from it. Every
/// mutation recompiles before returning, so parse, format and replace
/// calls always see the current units. Parsing, formatting and inline
/// replacement live in their own modules as further `impl` blocks.
#[derive(Debug, Clone)]
pub struct Shorthand {
    pub(crate) registry: UnitRegistry,
    pub(crate) matchers: Matchers,
}

impl Shorthand {
    /// Engine with the built-in units.
    pub fn new() -> Self {
        // Allow expect here as built-in symbols are fixed and escaped
        #[allow(clippy::expect_used)]
        let matchers = compile(&UnitRegistry::builtin()).expect("built-in unit patterns are valid");
        Self {
            registry: UnitRegistry::builtin(),
            matchers,
        }
    }

    /// Engine over an arbitrary registry.
    pub fn with_registry(registry: UnitRegistry) -> Result<Self, UnitError> {
        let matchers = compile(&registry)?;
        Ok(Self { registry, matchers })
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Units by descending multiplier, the order [`Shorthand::format`] emits them in.
    pub fn units_descending(&self) -> impl Iterator<Item = (&str, u64)> {
        self.matchers
            .descending()
            .iter()
            .map(|(symbol, millis)| (symbol.as_str(), *millis))
    }

    /// Add a unit or redefine an existing one.
    ///
    /// On error the engine is unchanged.
    pub fn define_unit(&mut self, symbol: &str, millis: u64) -> Result<(), UnitError> {
        let mut registry = self.registry.clone();
        let previous = registry.define(symbol, millis)?;
        self.install(registry)?;
        tracing::debug!(symbol, millis, ?previous, "defined unit");
        Ok(())
    }

    /// Remove a unit, returning its multiplier if it was registered.
    pub fn remove_unit(&mut self, symbol: &str) -> Result<Option<u64>, UnitError> {
        let mut registry = self.registry.clone();
        let Some(previous) = registry.remove(symbol) else {
            return Ok(None);
        };
        self.install(registry)?;
        tracing::debug!(symbol, previous, "removed unit");
        Ok(Some(previous))
    }

    /// Restore exactly the built-in units.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("reset units to built-ins");
    }

    fn install(&mut self, registry: UnitRegistry) -> Result<(), UnitError> {
        self.matchers = compile(&registry)?;
        self.registry = registry;
        Ok(())
    }
}

impl Default for Shorthand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "shorthand_tests.rs"]
mod tests;
