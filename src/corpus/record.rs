// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lenient record decoding.
//!
//! Every field goes through a `deserialize_with` helper that accepts whatever
//! JSON value is there and maps anything unexpected to the empty value.
//! Callers only hand objects to this decoder; see `documents_from_records`.

use crate::types::{Document, DocumentId};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
pub(crate) struct RawRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<DocumentId>,
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    author: String,
    #[serde(default, deserialize_with = "lenient_string")]
    date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    stream: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    tags: Vec<String>,
}

impl RawRecord {
    /// Finish decoding. `position` stands in for a missing id.
    pub(crate) fn into_document(self, position: usize) -> Document {
        let category = if self.category.trim().is_empty() {
            self.stream
        } else {
            self.category
        };

        Document {
            id: self
                .id
                .unwrap_or_else(|| DocumentId::Int(i64::try_from(position).unwrap_or(i64::MAX))),
            title: self.title,
            text: self.text,
            author: self.author,
            date: self.date,
            category,
            tags: self.tags,
        }
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<DocumentId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(id) => DocumentId::Int(id),
            None => DocumentId::Text(n.to_string()),
        }),
        Value::String(s) if !s.trim().is_empty() => Some(DocumentId::Text(s.trim().to_string())),
        _ => None,
    })
}

/// Tags come as an array of strings, or as one comma-separated string.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|tag| !tag.trim().is_empty())
            .collect(),
        Value::String(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}
