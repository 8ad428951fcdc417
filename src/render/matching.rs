// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive literal matching over characters.
//!
//! The scorer can lowercase whole strings because it only counts. The
//! renderers need positions in the *original* text, and lowercasing can change
//! byte lengths (`'İ'` lowercases to two chars). So matching here walks the
//! original characters and compares each pair by its lowercase mapping. A
//! match therefore always starts and ends on a character boundary of the
//! original text.

use std::ops::Range;

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn matches_at(haystack: &[char], needle: &[char], start: usize) -> bool {
    haystack[start..start + needle.len()]
        .iter()
        .zip(needle)
        .all(|(&h, &n)| chars_eq_ignore_case(h, n))
}

/// Character offsets of non-overlapping matches, left to right.
pub(crate) fn char_matches<'a>(
    haystack: &'a [char],
    needle: &'a [char],
) -> impl Iterator<Item = usize> + 'a {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() {
            return None;
        }
        while cursor + needle.len() <= haystack.len() {
            let start = cursor;
            if matches_at(haystack, needle, start) {
                cursor = start + needle.len();
                return Some(start);
            }
            cursor += 1;
        }
        None
    })
}

/// Byte ranges in `text` of non-overlapping, case-insensitive matches of
/// `query`, taken literally (no trimming, no pattern syntax).
pub fn find_matches(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let indices: Vec<(usize, char)> = text.char_indices().collect();
    let chars: Vec<char> = indices.iter().map(|&(_, c)| c).collect();
    let byte_at = |char_idx: usize| indices.get(char_idx).map_or(text.len(), |&(byte, _)| byte);

    char_matches(&chars, &needle)
        .map(|start| byte_at(start)..byte_at(start + needle.len()))
        .collect()
}
