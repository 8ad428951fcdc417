//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{alpha_corpus, make_dated_doc, make_doc, make_full_doc};

// ============================================================================
// CORPUS FILES
// ============================================================================

/// A small wrapped corpus exercising every optional field.
pub const NEWSROOM_JSON: &str = r#"{
  "documents": [
    {
      "id": 1,
      "title": "Quarterly budget review",
      "text": "The budget grew. Budget lines for travel were cut.",
      "author": "Ada Byron",
      "date": "2024-03-01",
      "category": "finance",
      "tags": ["budget", "q1"]
    },
    {
      "id": "memo-7",
      "title": "Office <move> & parking",
      "text": "We move floors next week.",
      "author": "Grace",
      "date": "2024-05-10T09:30:00Z",
      "stream": "announcements",
      "tags": "office, facilities"
    },
    {
      "id": 3,
      "title": "",
      "text": "An untitled budget draft with budget budget budget."
    },
    {
      "title": "Travel budget",
      "text": "Budget for travel.",
      "date": "not a date"
    }
  ]
}"#;

/// Write `contents` to a fresh temp file and return its handle.
///
/// The file is deleted when the handle drops.
pub fn write_corpus(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus");
    file.write_all(contents.as_bytes()).expect("write temp corpus");
    file.flush().expect("flush temp corpus");
    file
}
