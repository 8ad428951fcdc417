// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus health numbers for `docsift inspect`.

use crate::types::{try_parse_date, Document, DocumentId};
use serde::Serialize;
use std::collections::HashSet;

/// Counts of the records that will degrade at query time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub documents: usize,
    /// Never shown in results.
    pub untitled: usize,
    /// Missing or unparseable date; ranked as the oldest.
    pub undated: usize,
    /// Records whose id was already used by an earlier record.
    pub duplicate_ids: usize,
    pub tagged: usize,
}

impl CorpusStats {
    pub fn collect(documents: &[Document]) -> Self {
        let mut seen: HashSet<&DocumentId> = HashSet::with_capacity(documents.len());
        let mut stats = CorpusStats {
            documents: documents.len(),
            ..CorpusStats::default()
        };

        for doc in documents {
            if !doc.has_title() {
                stats.untitled += 1;
            }
            if try_parse_date(&doc.date).is_none() {
                stats.undated += 1;
            }
            if !seen.insert(&doc.id) {
                stats.duplicate_ids += 1;
            }
            if !doc.tags.is_empty() {
                stats.tagged += 1;
            }
        }

        stats
    }
}
