// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The scorer: literal, case-insensitive occurrence counting.
//!
//! # Haystack layout
//!
//! ```text
//! title \n text \n author \n category \n tag1, tag2, ...
//! ```
//!
//! Everything is lowercased once. The query is trimmed and lowercased the same
//! way, then counted with `str::matches`, which is non-overlapping and treats
//! every character literally. A query like `"a.b*"` matches the five bytes
//! `a.b*` and nothing else.
//!
//! A match may straddle a field separator (`"alpha\nbeta"` is a valid query).
//! That is a property of the bag-of-fields model, not a bug.

use crate::types::Document;
use crate::util::{fold_case, normalize};

/// Separator between fields in the haystack.
pub const FIELD_SEPARATOR: &str = "\n";

/// Separator between tags in the haystack.
pub const TAG_SEPARATOR: &str = ", ";

/// Build the lowercase haystack for a document.
pub fn haystack(doc: &Document) -> String {
    let tags = doc.tags.join(TAG_SEPARATOR);
    let joined = [
        doc.title.as_str(),
        doc.text.as_str(),
        doc.author.as_str(),
        doc.category.as_str(),
        tags.as_str(),
    ]
    .join(FIELD_SEPARATOR);
    fold_case(&joined)
}

/// Relevance of `doc` for `query`: the number of non-overlapping,
/// case-insensitive occurrences of the trimmed query in the haystack.
///
/// Returns 0 for a blank query.
pub fn score(doc: &Document, query: &str) -> u32 {
    let needle = normalize(query);
    if needle.is_empty() {
        return 0;
    }
    count_occurrences(&haystack(doc), &needle)
}

/// Count non-overlapping occurrences of an already-normalized needle.
///
/// Short-circuits on the containment check so non-matching documents never
/// pay for the full scan.
pub fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() || !haystack.contains(needle) {
        return 0;
    }
    haystack.matches(needle).count() as u32
}
