// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding for tries built with `case_folding` enabled.
//!
//! Folding is plain Unicode lowercasing of each code point. No decomposition,
//! no diacritic stripping: "Café" folds to "café", not "cafe".

use std::borrow::Cow;

/// Lowercase `value` when `enabled`, borrowing it unchanged otherwise.
///
/// Strings that are already lowercase are also returned borrowed.
pub fn fold(value: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled || value.chars().all(is_lowercase_fixed_point) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(value.to_lowercase())
}

// Titlecase letters like 'ǅ' are not `is_uppercase` but still change.
fn is_lowercase_fixed_point(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}
