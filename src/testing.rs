//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Document, DocumentId};

/// Create a test document with a title and body, all other fields empty.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: i64, title: &str, text: &str) -> Document {
    Document {
        id: DocumentId::Int(id),
        title: title.to_string(),
        text: text.to_string(),
        ..Document::default()
    }
}

/// Create a test document with a date.
pub fn make_dated_doc(id: i64, title: &str, text: &str, date: &str) -> Document {
    Document {
        date: date.to_string(),
        ..make_doc(id, title, text)
    }
}

/// Create a fully populated test document.
pub fn make_full_doc(
    id: i64,
    title: &str,
    text: &str,
    author: &str,
    date: &str,
    category: &str,
    tags: &[&str],
) -> Document {
    Document {
        id: DocumentId::Int(id),
        title: title.to_string(),
        text: text.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// The two-document "alpha" corpus used throughout the docs and tests.
pub fn alpha_corpus() -> Vec<Document> {
    vec![
        make_dated_doc(1, "Alpha report", "budget alpha alpha", "2024-01-01"),
        make_dated_doc(2, "Beta notes", "alpha mentioned once", "2024-06-01"),
    ]
}
