// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands: `search` to rank a corpus file against a query, and
//! `inspect` to report how many records will degrade at query time (untitled,
//! undated, duplicate ids). Search output comes as terminal cards, JSON, or
//! HTML fragments.

pub mod display;
pub mod html;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use docsift::DEFAULT_EXCERPT_RADIUS;
use std::path::PathBuf;

/// Corpus file used when `--data` is not given.
pub const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Rank documents by query occurrences and show highlighted cards",
    version
)]
pub struct Cli {
    /// Log debug events to stderr (overridden by DOCSIFT_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display ranked results
    Search {
        /// Search query (blank prints the "type a keyword" prompt)
        query: String,

        /// Corpus JSON file: {"documents": [...]} or a bare array
        #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,

        /// Maximum number of results to show (at least 1)
        #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,

        /// Characters kept on each side of the first match in excerpts
        #[arg(long, default_value_t = DEFAULT_EXCERPT_RADIUS)]
        radius: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Report corpus statistics
    Inspect {
        /// Corpus JSON file
        #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed cards for the terminal
    Text,
    /// Machine-readable search outcome
    Json,
    /// <article> cards with <mark> highlighting
    Html,
}
