//! Occurrence-count document search with highlighted result cards.
//!
//! Give it a slice of documents and a query; get back the documents that
//! mention the query, most mentions first, newest first on ties, each
//! rendered as a card with the query highlighted in its title and excerpt.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  corpus/    │────▶│  scoring/    │────▶│  search/    │
//! │ (load JSON, │     │ (score, rank,│     │ (pipeline,  │
//! │  lenient)   │     │  tie-breaks) │     │  cards)     │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                 types.rs / render/                   │
//! │  (Document, DocumentId, parse_date;                 │
//! │   escape, highlight, excerpt, find_matches)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module    | Role                                             |
//! |-----------|--------------------------------------------------|
//! | `types`   | `Document`, `DocumentId`, safe date parsing      |
//! | `scoring` | Haystack scorer and the (score, date) ranker     |
//! | `render`  | Escaping, `<mark>` highlighting, excerpt windows |
//! | `search`  | Query → `SearchOutcome` with result cards        |
//! | `corpus`  | Lenient JSON corpus loader and stats             |
//!
//! # Usage
//!
//! ```ignore
//! use docsift::{load_corpus, search, SearchOptions, SearchOutcome};
//!
//! let docs = load_corpus("data.json")?;
//! match search(&docs, "alpha", &SearchOptions::default()) {
//!     SearchOutcome::AwaitingQuery => println!("Type a keyword to search"),
//!     SearchOutcome::Results { cards, .. } => {
//!         for card in cards {
//!             println!("{} ({})", card.title_html, card.score);
//!         }
//!     }
//! }
//! ```

// Module declarations
pub mod corpus;
pub mod error;
pub mod render;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod util;

// Re-exports for public API
pub use corpus::{load_corpus, parse_corpus, CorpusStats};
pub use error::{Error, Result};
pub use render::{
    escape, excerpt, find_matches, highlight, highlight_with, unescape, DEFAULT_EXCERPT_RADIUS,
    ELLIPSIS, MARK_CLOSE, MARK_OPEN,
};
pub use scoring::{compare_scored, haystack, rank, rank_scored, score, ScoredDocument};
pub use search::{search, ResultCard, SearchOptions, SearchOutcome};
pub use types::{parse_date, try_parse_date, Document, DocumentId, UNKNOWN_DATE};
pub use util::{is_blank, normalize};
