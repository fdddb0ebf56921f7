// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inline replacement of shorthands embedded in free text

use crate::parse::Part;
use crate::shorthand::Shorthand;
use regex::Captures;
use std::fmt::Display;

impl Shorthand {
    /// Replace every standalone shorthand in `text` with its millisecond total.
    ///
    /// `"1w + 3m"` becomes `"604800000 + 180000"`. Shorthands glued to other
    /// word characters (`"foo500msbar"`) are left alone.
    pub fn replace(&self, text: &str) -> String {
        self.replace_with(text, |millis, _| millis)
    }

    /// Replace every standalone shorthand with whatever `transform` renders.
    ///
    /// `transform` receives the millisecond total and the parts in source
    /// order, and is called once per occurrence, left to right. Occurrences
    /// whose total overflows are left unchanged.
    pub fn replace_with<T, F>(&self, text: &str, mut transform: F) -> String
    where
        T: Display,
        F: FnMut(u64, &[Part]) -> T,
    {
        let Some(inline) = self.matchers.inline() else {
            return text.to_string();
        };
        inline
            .replace_all(text, |caps: &Captures| {
                let occurrence = &caps[0];
                let parsed = self
                    .extract_parts(occurrence)
                    .and_then(|parts| Some((self.total(&parts)?, parts)));
                match parsed {
                    Some((millis, parts)) => transform(millis, &parts).to_string(),
                    None => {
                        tracing::trace!(occurrence, "skipping overflowing shorthand");
                        occurrence.to_string()
                    }
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod tests;
