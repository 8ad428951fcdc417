// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpt windows around the first query match.
//!
//! All offsets are characters, not bytes. The window for a match at char `i`
//! of a query with `q` chars is:
//!
//! ```text
//! [max(0, i - radius), min(len, i + q + radius))
//! ```
//!
//! with an ellipsis on each side that was cut. Without a match the excerpt is
//! the leading `2 * radius` characters. Either way the result is at most
//! `2 * radius + q + 2` characters long.

use super::matching::char_matches;

/// Default number of characters kept on each side of the match.
pub const DEFAULT_EXCERPT_RADIUS: usize = 120;

/// Marker for a truncated side of an excerpt.
pub const ELLIPSIS: char = '…';

/// Cut a window of raw `text` around the first case-insensitive match of the
/// trimmed `query`.
///
/// The result is raw text; pass it to [`highlight`](super::highlight) before
/// embedding it in markup.
pub fn excerpt(text: &str, query: &str, radius: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.trim().chars().collect();

    let (start, end) = match char_matches(&chars, &needle).next() {
        Some(first) => (
            first.saturating_sub(radius),
            first
                .saturating_add(needle.len())
                .saturating_add(radius)
                .min(chars.len()),
        ),
        None => (0, radius.saturating_mul(2).min(chars.len())),
    };

    let mut out = String::with_capacity(end - start + 2);
    if start > 0 {
        out.push(ELLIPSIS);
    }
    out.extend(&chars[start..end]);
    if end < chars.len() {
        out.push(ELLIPSIS);
    }
    out
}
