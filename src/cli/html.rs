// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML fragments for `--format html`.
//!
//! Title and excerpt arrive already escaped with `<mark>` tags; every other
//! field is escaped here.

use docsift::{escape, ResultCard, SearchOutcome};
use std::fmt::Write;

/// Render a search outcome as an HTML fragment.
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::AwaitingQuery => {
            "<p class=\"prompt\">Type a keyword to search.</p>\n".to_string()
        }
        SearchOutcome::Results {
            query,
            total_matches: 0,
            ..
        } => {
            format!("<p class=\"empty\">No results for \"{}\".</p>\n", escape(query))
        }
        SearchOutcome::Results { cards, .. } => {
            let mut out = String::from("<section class=\"results\">\n");
            for card in cards {
                out.push_str(&render_card(card));
            }
            out.push_str("</section>\n");
            out
        }
    }
}

/// One `<article class="card">`.
pub fn render_card(card: &ResultCard) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<article class=\"card\" data-id=\"{}\" data-score=\"{}\">",
        escape(&card.id.to_string()),
        card.score
    );
    let _ = writeln!(out, "  <h2>{}</h2>", card.title_html);

    let meta: Vec<String> = [
        ("author", &card.author),
        ("date", &card.date),
        ("category", &card.category),
    ]
    .iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(class, value)| format!("<span class=\"{}\">{}</span>", class, escape(value.trim())))
    .collect();
    if !meta.is_empty() {
        let _ = writeln!(out, "  <p class=\"meta\">{}</p>", meta.join(" "));
    }

    let _ = writeln!(out, "  <p class=\"excerpt\">{}</p>", card.excerpt_html);

    if !card.tags.is_empty() {
        let tags: Vec<String> = card
            .tags
            .iter()
            .map(|tag| format!("<li>{}</li>", escape(tag)))
            .collect();
        let _ = writeln!(out, "  <ul class=\"tags\">{}</ul>", tags.join(""));
    }

    out.push_str("</article>\n");
    out
}
