// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline.
//!
//! One call per query. Everything below is a pure function of the document
//! slice and the query string; nothing is cached between calls.
//!
//! ```text
//! query ──blank?──▶ AwaitingQuery
//!   │
//!   ▼
//! rank_scored ──▶ drop untitled ──▶ limit ──▶ ResultCard (excerpt + highlight)
//! ```

mod card;

pub use card::ResultCard;

use crate::render::DEFAULT_EXCERPT_RADIUS;
use crate::scoring::rank_scored;
use crate::types::Document;
use crate::util::is_blank;
use serde::Serialize;
use tracing::debug;

/// Knobs for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Characters kept on each side of the first match in card excerpts.
    pub excerpt_radius: usize,
    /// Keep only the best `n` cards. `None` keeps all of them.
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            excerpt_radius: DEFAULT_EXCERPT_RADIUS,
            limit: None,
        }
    }
}

/// What the presentation layer should show for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The query was blank: show a "type a keyword" prompt, not "no results".
    AwaitingQuery,
    /// The query was evaluated. `cards` may be empty.
    Results {
        /// The trimmed query.
        query: String,
        /// Presentable matches before `limit` was applied.
        total_matches: usize,
        #[serde(rename = "results")]
        cards: Vec<ResultCard>,
    },
}

impl SearchOutcome {
    /// Cards to render; empty while awaiting a query.
    pub fn cards(&self) -> &[ResultCard] {
        match self {
            SearchOutcome::AwaitingQuery => &[],
            SearchOutcome::Results { cards, .. } => cards,
        }
    }

    pub fn is_awaiting_query(&self) -> bool {
        matches!(self, SearchOutcome::AwaitingQuery)
    }
}

/// Rank `documents` for `query` and build result cards.
///
/// Untitled documents are scored and ranked like any other but never turned
/// into cards.
pub fn search(documents: &[Document], query: &str, options: &SearchOptions) -> SearchOutcome {
    if is_blank(query) {
        debug!("blank query, awaiting input");
        return SearchOutcome::AwaitingQuery;
    }
    let query = query.trim();

    let ranked = rank_scored(documents, query);
    let matched = ranked.len();

    let presentable: Vec<_> = ranked
        .into_iter()
        .filter(|scored| scored.doc.has_title())
        .collect();
    let total_matches = presentable.len();

    let cards: Vec<ResultCard> = presentable
        .iter()
        .take(options.limit.unwrap_or(usize::MAX))
        .map(|scored| ResultCard::from_scored(scored, query, options.excerpt_radius))
        .collect();

    debug!(
        query,
        candidates = documents.len(),
        matched,
        untitled = matched - total_matches,
        shown = cards.len(),
        "search complete"
    );

    SearchOutcome::Results {
        query: query.to_string(),
        total_matches,
        cards,
    }
}
