// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result cards: one ranked document, ready to render.

use crate::render::{excerpt, highlight};
use crate::scoring::ScoredDocument;
use crate::types::DocumentId;
use serde::Serialize;

/// Presentation view of a ranked document.
///
/// `title_html` and `excerpt_html` are escaped markup with `<mark>` around
/// matches. `title` and `excerpt` are the same strings unescaped, for
/// renderers that do their own emphasis (the terminal display, for one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub id: DocumentId,
    pub score: u32,
    pub title: String,
    pub title_html: String,
    pub excerpt: String,
    pub excerpt_html: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl ResultCard {
    /// Build a card, excerpting the body around the first match of `query`.
    pub fn from_scored(scored: &ScoredDocument<'_>, query: &str, excerpt_radius: usize) -> Self {
        let doc = scored.doc;
        let title = doc.title.trim().to_string();
        let excerpt = excerpt(&doc.text, query, excerpt_radius);

        Self {
            id: doc.id.clone(),
            score: scored.score,
            title_html: highlight(&title, query),
            excerpt_html: highlight(&excerpt, query),
            title,
            excerpt,
            author: doc.author.clone(),
            date: doc.date.clone(),
            category: doc.category.clone(),
            tags: doc.tags.clone(),
        }
    }
}
