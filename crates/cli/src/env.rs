// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Unit file ---

/// Explicit unit file from DUR_UNITS_FILE
pub fn units_file() -> Option<PathBuf> {
    std::env::var("DUR_UNITS_FILE")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Resolve config directory: XDG_CONFIG_HOME/dur > ~/.config/dur
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("dur"));
        }
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/dur"))
}

// --- Logging ---

pub const LOG_FILTER_VAR: &str = "DUR_LOG";
