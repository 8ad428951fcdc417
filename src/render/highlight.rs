// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrap query matches in emphasis markers, escaping everything else.
//!
//! Matches are located in the raw text, then the output is assembled segment
//! by segment: each segment is escaped first, and only then are the markers
//! placed around matched segments. The markers are never escaped, and a query
//! can never match inside an entity (searching for `amp` in `"&"` finds
//! nothing).

use super::escape::push_escaped;
use super::matching::find_matches;

/// Opening emphasis marker.
pub const MARK_OPEN: &str = "<mark>";

/// Closing emphasis marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Escape `text` and wrap case-insensitive matches of `query` in `<mark>`.
///
/// The query is trimmed. A blank query returns the escaped text unchanged.
///
/// ```ignore
/// assert_eq!(highlight("R&D alpha", "ALPHA"), "R&amp;D <mark>alpha</mark>");
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, MARK_OPEN, MARK_CLOSE)
}

/// Like [`highlight`] with caller-chosen markers (inserted verbatim).
pub fn highlight_with(text: &str, query: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;

    for range in find_matches(text, query.trim()) {
        push_escaped(&mut out, &text[last..range.start]);
        out.push_str(open);
        push_escaped(&mut out, &text[range.clone()]);
        out.push_str(close);
        last = range.end;
    }

    push_escaped(&mut out, &text[last..]);
    out
}
