// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom unit file loading
//!
//! ```toml
//! reset = false   # drop the built-in units first
//!
//! [units]
//! hrs = 3600000
//! fortnight = 1209600000
//! ```

use dur_core::{Shorthand, UnitError, UnitRegistry};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_UNITS_FILE: &str = "units.toml";

/// Errors that can occur while loading a unit file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read unit file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid unit file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid unit in {}: {source}", path.display())]
    Unit {
        path: PathBuf,
        #[source]
        source: UnitError,
    },
}

/// Contents of a unit file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitsFile {
    /// Start from an empty registry instead of the built-ins
    #[serde(default)]
    pub reset: bool,
    /// Symbol to milliseconds, applied in file order
    #[serde(default)]
    pub units: IndexMap<String, u64>,
}

impl UnitsFile {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Build an engine with this file's units applied.
    pub fn build(&self) -> Result<Shorthand, UnitError> {
        let mut registry = if self.reset {
            UnitRegistry::empty()
        } else {
            UnitRegistry::builtin()
        };
        for (symbol, millis) in &self.units {
            registry.define(symbol, *millis)?;
        }
        Shorthand::with_registry(registry)
    }
}

/// Where the unit file comes from, and whether it must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitsSource {
    /// `--units` or DUR_UNITS_FILE: missing file is an error
    Explicit(PathBuf),
    /// Config directory default: missing file is fine
    Default(PathBuf),
}

/// Resolve the unit file: `--units` > DUR_UNITS_FILE > config dir default.
pub fn resolve_source(flag: Option<PathBuf>) -> Option<UnitsSource> {
    flag.or_else(crate::env::units_file)
        .map(UnitsSource::Explicit)
        .or_else(|| {
            crate::env::config_dir().map(|dir| UnitsSource::Default(dir.join(DEFAULT_UNITS_FILE)))
        })
}

/// Build the engine for this invocation.
pub fn load_engine(source: Option<UnitsSource>) -> Result<Shorthand, ConfigError> {
    let path = match source {
        None => return Ok(Shorthand::new()),
        Some(UnitsSource::Explicit(path)) => path,
        Some(UnitsSource::Default(path)) => {
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no default unit file");
                return Ok(Shorthand::new());
            }
            path
        }
    };
    load_file(&path)
}

fn load_file(path: &Path) -> Result<Shorthand, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = UnitsFile::parse(&text).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    let engine = file.build().map_err(|source| ConfigError::Unit {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        custom = file.units.len(),
        reset = file.reset,
        "loaded unit file"
    );
    Ok(engine)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
