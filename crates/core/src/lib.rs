// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dur-core: duration shorthand parsing, formatting and inline replacement
//!
//! ```
//! use dur_core::Shorthand;
//!
//! let mut engine = Shorthand::new();
//! assert_eq!(engine.parse("1h30m"), Ok(5_400_000));
//! assert_eq!(engine.format(1_468_800_001), "2w3d1ms");
//! assert_eq!(engine.replace("wait 2s"), "wait 2000");
//!
//! engine.define_unit("hrs", 3_600_000).unwrap();
//! assert_eq!(engine.parse("1h2hrs"), Ok(10_800_000));
//! ```

mod format;
pub mod matchers;
mod parse;
pub mod registry;
mod replace;
mod shared;
mod shorthand;
pub mod unit;

pub use matchers::{compile, Matchers};
pub use parse::{Part, ShorthandError};
pub use registry::UnitRegistry;
pub use shared::{
    define_unit, format, format_duration, global, parse, parse_duration, parse_parts,
    remove_unit, replace, replace_with, reset, SharedShorthand,
};
pub use shorthand::Shorthand;
pub use unit::{UnitError, BUILTIN_UNITS};
