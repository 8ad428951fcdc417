// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The score is a plain occurrence count of the query inside one lowercase
//! haystack built from every searchable field. There are no field weights:
//! a match in the title counts exactly as much as a match in a tag. Ranking
//! sorts by that count, then by recency.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_scored, rank, rank_scored, ScoredDocument};
