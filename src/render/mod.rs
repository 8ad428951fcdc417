// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presentation helpers: markup escaping, match highlighting, and excerpts.
//!
//! The pieces compose in a fixed order for a result card:
//!
//! ```text
//! raw text ──excerpt()──▶ raw window ──highlight()──▶ escaped markup with <mark>
//! ```
//!
//! `excerpt` works on raw text so its window arithmetic counts real
//! characters, not entity bytes. `highlight` escapes every segment before it
//! inserts the emphasis markers, so the markers are the only markup in the
//! output.

pub mod escape;
pub mod excerpt;
pub mod highlight;
pub mod matching;

pub use escape::{escape, unescape};
pub use excerpt::{excerpt, DEFAULT_EXCERPT_RADIUS, ELLIPSIS};
pub use highlight::{highlight, highlight_with, MARK_CLOSE, MARK_OPEN};
pub use matching::find_matches;
