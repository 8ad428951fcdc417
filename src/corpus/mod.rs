// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: JSON in, `Vec<Document>` out.
//!
//! Two top-level shapes are accepted:
//!
//! ```text
//! { "documents": [ {...}, {...} ] }     // wrapped
//! [ {...}, {...} ]                      // bare
//! ```
//!
//! The file as a whole must be valid JSON in one of those shapes. Individual
//! records are read leniently: missing or mistyped fields become empty, and a
//! record that is not an object at all is skipped with a warning. One bad
//! record never fails the load.

mod record;
pub mod stats;

pub use stats::CorpusStats;

use crate::error::{Error, Result};
use crate::types::{Document, DocumentId};
use record::RawRecord;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Key holding the record list in a wrapped corpus.
pub const DOCUMENTS_KEY: &str = "documents";

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let documents = parse_corpus(&raw)?;
    debug!(path = %path.display(), documents = documents.len(), "corpus loaded");
    Ok(documents)
}

/// Parse a corpus from a JSON string.
pub fn parse_corpus(raw: &str) -> Result<Vec<Document>> {
    let records = match serde_json::from_str::<Value>(raw)? {
        Value::Array(records) => records,
        Value::Object(mut root) => match root.remove(DOCUMENTS_KEY) {
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(Error::InvalidCorpus(format!(
                    "\"{}\" must be an array",
                    DOCUMENTS_KEY
                )))
            }
            None => {
                return Err(Error::InvalidCorpus(format!(
                    "object has no \"{}\" key",
                    DOCUMENTS_KEY
                )))
            }
        },
        other => {
            return Err(Error::InvalidCorpus(format!(
                "expected an array or an object, found {}",
                json_kind(&other)
            )))
        }
    };

    Ok(documents_from_records(records))
}

fn documents_from_records(records: Vec<Value>) -> Vec<Document> {
    let mut documents = Vec::with_capacity(records.len());
    let mut seen: HashSet<DocumentId> = HashSet::with_capacity(records.len());

    for (position, value) in records.into_iter().enumerate() {
        if !value.is_object() {
            warn!(position, kind = json_kind(&value), "skipping non-object corpus record");
            continue;
        }
        let record: RawRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!(position, error = %e, "skipping corpus record");
                continue;
            }
        };

        let document = record.into_document(position);
        if !seen.insert(document.id.clone()) {
            warn!(position, id = %document.id, "duplicate document id");
        }
        documents.push(document);
    }

    documents
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
