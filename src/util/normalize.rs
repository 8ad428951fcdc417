// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization: trim and lowercase, nothing else.
//!
//! No stemming, no diacritic folding, no whitespace collapsing. A query of
//! `"Data  Set"` only matches text that has the two spaces too.
//!
//! Lowercasing maps each character on its own (`char::to_lowercase`), the
//! same rule the renderers use to find match positions. `str::to_lowercase`
//! is context-sensitive (a word-final `Σ` becomes `ς`), which would let the
//! scorer count matches the highlighter cannot find.

/// Normalize a query or haystack for case-insensitive containment.
///
/// ```ignore
/// assert_eq!(normalize("  Alpha "), "alpha");
/// ```
pub fn normalize(value: &str) -> String {
    fold_case(value.trim())
}

/// Per-character lowercase mapping.
pub fn fold_case(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// True for the empty string and whitespace-only strings.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
