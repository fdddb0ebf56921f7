// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod format;
pub mod parse;
pub mod replace;
pub mod units;
