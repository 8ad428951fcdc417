// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted.
//!
//! Sort order:
//! 1. **Score** - occurrence count, descending
//! 2. **Date** - most recent first; unparseable dates count as the oldest
//! 3. **Collection order** - the sort is stable, so exact ties keep input order
//!
//! Zero-score documents never make it into the list.

use crate::scoring::core::{count_occurrences, haystack};
use crate::types::Document;
use crate::util::normalize;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// A document paired with its score for one query.
///
/// Borrowed from the collection and discarded once the query is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDocument<'a> {
    pub doc: &'a Document,
    pub score: u32,
    /// Parsed once per ranking pass, not once per comparison.
    pub timestamp: DateTime<Utc>,
}

/// Compare two scored documents for ranking.
///
/// Returns `Less` when `a` should be listed before `b`.
pub fn compare_scored(a: &ScoredDocument<'_>, b: &ScoredDocument<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.timestamp.cmp(&a.timestamp))
}

/// Score every document, drop the misses, and sort the rest.
///
/// A blank query returns an empty list without scoring anything.
pub fn rank_scored<'a>(documents: &'a [Document], query: &str) -> Vec<ScoredDocument<'a>> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredDocument<'a>> = documents
        .iter()
        .filter_map(|doc| {
            let score = count_occurrences(&haystack(doc), &needle);
            (score > 0).then(|| ScoredDocument {
                doc,
                score,
                timestamp: doc.timestamp(),
            })
        })
        .collect();

    // slice::sort_by is stable
    scored.sort_by(compare_scored);
    scored
}

/// Ranked documents for `query`, best first.
pub fn rank<'a>(documents: &'a [Document], query: &str) -> Vec<&'a Document> {
    rank_scored(documents, query)
        .into_iter()
        .map(|scored| scored.doc)
        .collect()
}
