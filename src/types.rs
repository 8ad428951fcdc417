// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: documents, their ids, and the date handling that ranking
//! leans on.
//!
//! A [`Document`] is a flat record. Every field except `id` can be empty, and
//! the date is kept as the raw string the corpus supplied. Parsing happens on
//! demand via [`parse_date`], which never fails: anything unparseable becomes
//! [`UNKNOWN_DATE`], the oldest representable instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort key for documents whose date is missing or unparseable.
///
/// Ranking compares dates descending, so these land after every dated
/// document with the same score.
pub const UNKNOWN_DATE: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Accepted date-time layouts, tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Accepted date-only layouts (midnight UTC). Day-first forms are not accepted.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Document identifier: corpora use both integer and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Int(i64),
    Text(String),
}

impl Default for DocumentId {
    fn default() -> Self {
        DocumentId::Int(0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Int(id) => write!(f, "{}", id),
            DocumentId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for DocumentId {
    fn from(id: i64) -> Self {
        DocumentId::Int(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId::Text(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId::Text(id)
    }
}

/// A searchable document.
///
/// Immutable once loaded. The corpus loader fills absent fields with empty
/// values, so every field is always present here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub text: String,
    pub author: String,
    /// Raw date string; see [`Document::timestamp`].
    pub date: String,
    /// Category; corpora that call it "stream" are mapped by the loader.
    pub category: String,
    pub tags: Vec<String>,
}

impl Document {
    /// Untitled documents can still score, but are never shown.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// The document date as a sortable instant, [`UNKNOWN_DATE`] if unparseable.
    pub fn timestamp(&self) -> DateTime<Utc> {
        parse_date(&self.date)
    }
}

/// Parse a corpus date, falling back to [`UNKNOWN_DATE`].
pub fn parse_date(value: &str) -> DateTime<Utc> {
    try_parse_date(value).unwrap_or(UNKNOWN_DATE)
}

/// Parse a corpus date, returning `None` when no accepted layout matches.
pub fn try_parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
