// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for corpus loading.
//!
//! Scoring, ranking and rendering never fail. Only the loader touches the
//! filesystem and parses JSON, so only the loader returns these.

use std::path::PathBuf;

/// Errors raised while loading a document corpus.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The corpus file could not be read.
    #[error("failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The corpus is not valid JSON.
    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Valid JSON, but not a document list.
    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),
}

pub type Result<T> = std::result::Result<T, Error>;
