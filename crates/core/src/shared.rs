// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide shorthand engine
//!
//! Readers take an `Arc` snapshot and work on it without holding the lock.
//! Writers build the next engine from the current one and swap it in, so a
//! concurrent reader sees either the old units and matchers or the new
//! ones, never a mix.

use crate::parse::{Part, ShorthandError};
use crate::shorthand::Shorthand;
use crate::unit::UnitError;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::fmt::Display;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

/// A [`Shorthand`] engine that can be mutated through a shared reference.
#[derive(Debug)]
pub struct SharedShorthand {
    current: RwLock<Arc<Shorthand>>,
}

impl SharedShorthand {
    pub fn new() -> Self {
        Self::from_engine(Shorthand::new())
    }

    pub fn from_engine(engine: Shorthand) -> Self {
        Self {
            current: RwLock::new(Arc::new(engine)),
        }
    }

    /// The engine as of now; unaffected by later mutations.
    pub fn snapshot(&self) -> Arc<Shorthand> {
        Arc::clone(&self.current.read())
    }

    pub fn define_unit(&self, symbol: &str, millis: u64) -> Result<(), UnitError> {
        self.update(|engine| engine.define_unit(symbol, millis))
    }

    pub fn remove_unit(&self, symbol: &str) -> Result<Option<u64>, UnitError> {
        self.update(|engine| engine.remove_unit(symbol))
    }

    pub fn reset(&self) {
        *self.current.write() = Arc::new(Shorthand::new());
    }

    /// Apply `f` to a copy of the current engine and publish the result.
    ///
    /// The upgradable read admits one writer at a time while readers keep
    /// using the current snapshot; the exclusive lock is held only for the
    /// swap.
    fn update<T, E>(&self, f: impl FnOnce(&mut Shorthand) -> Result<T, E>) -> Result<T, E> {
        let guard = self.current.upgradable_read();
        let mut next = Shorthand::clone(&guard);
        let out = f(&mut next)?;
        *RwLockUpgradableReadGuard::upgrade(guard) = Arc::new(next);
        Ok(out)
    }
}

impl Default for SharedShorthand {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: LazyLock<SharedShorthand> = LazyLock::new(SharedShorthand::new);

/// The process-wide engine behind the free functions in this crate.
pub fn global() -> &'static SharedShorthand {
    &GLOBAL
}

/// Parse with the process-wide units. See [`Shorthand::parse`].
pub fn parse(shorthand: &str) -> Result<u64, ShorthandError> {
    global().snapshot().parse(shorthand)
}

/// See [`Shorthand::parse_parts`].
pub fn parse_parts(shorthand: &str) -> Result<Vec<Part>, ShorthandError> {
    global().snapshot().parse_parts(shorthand)
}

/// See [`Shorthand::parse_duration`].
pub fn parse_duration(shorthand: &str) -> Result<Duration, ShorthandError> {
    global().snapshot().parse_duration(shorthand)
}

/// Format with the process-wide units. See [`Shorthand::format`].
pub fn format(millis: i64) -> String {
    global().snapshot().format(millis)
}

/// See [`Shorthand::format_duration`].
pub fn format_duration(duration: Duration) -> String {
    global().snapshot().format_duration(duration)
}

/// Replace with the process-wide units. See [`Shorthand::replace`].
pub fn replace(text: &str) -> String {
    global().snapshot().replace(text)
}

/// See [`Shorthand::replace_with`].
pub fn replace_with<T, F>(text: &str, transform: F) -> String
where
    T: Display,
    F: FnMut(u64, &[Part]) -> T,
{
    global().snapshot().replace_with(text, transform)
}

/// Add or redefine a process-wide unit.
pub fn define_unit(symbol: &str, millis: u64) -> Result<(), UnitError> {
    global().define_unit(symbol, millis)
}

/// Remove a process-wide unit.
pub fn remove_unit(symbol: &str) -> Result<Option<u64>, UnitError> {
    global().remove_unit(symbol)
}

/// Restore the process-wide units to the built-ins.
pub fn reset() {
    global().reset()
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
