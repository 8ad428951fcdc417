//! Scorer and ranker properties.

use super::common::make_dated_doc;
use docsift::{compare_scored, haystack, rank_scored, score, Document};
use proptest::prelude::*;
use std::cmp::Ordering;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C]{1,4}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn date_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (2000u32..2030, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        Just(String::new()),
        Just("soon".to_string()),
    ]
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec((text_strategy(), text_strategy(), date_strategy()), 0..8).prop_map(
        |docs| {
            docs.into_iter()
                .enumerate()
                .map(|(i, (title, text, date))| make_dated_doc(i as i64, &title, &text, &date))
                .collect()
        },
    )
}

/// Oracle: non-overlapping matches counted by repeated `find`.
fn oracle_count(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut rest = haystack;
    while let Some(pos) = rest.find(needle) {
        count += 1;
        rest = &rest[pos + needle.len()..];
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: score equals the naive occurrence count on the haystack.
    #[test]
    fn prop_score_matches_oracle(title in text_strategy(), text in text_strategy(), query in word_strategy()) {
        let doc = make_dated_doc(0, &title, &text, "");
        let expected = oracle_count(&haystack(&doc), &query.to_lowercase());
        prop_assert_eq!(score(&doc, &query), expected);
    }

    /// Property: surrounding whitespace and case never change a score.
    #[test]
    fn prop_score_ignores_case_and_padding(text in text_strategy(), query in word_strategy()) {
        let doc = make_dated_doc(0, "t", &text, "");
        let padded = format!("  {}\t", query.to_uppercase());
        prop_assert_eq!(score(&doc, &padded), score(&doc, &query));
    }

    /// Property: ranked results are sorted and carry only positive scores.
    #[test]
    fn prop_ranked_results_sorted(docs in corpus_strategy(), query in word_strategy()) {
        let ranked = rank_scored(&docs, &query);
        for scored in &ranked {
            prop_assert!(scored.score > 0);
            prop_assert_eq!(scored.score, score(scored.doc, &query));
        }
        for pair in ranked.windows(2) {
            prop_assert_ne!(compare_scored(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    /// Property: equal (score, date) keys keep input order.
    #[test]
    fn prop_ranking_is_stable(docs in corpus_strategy(), query in word_strategy()) {
        let ranked = rank_scored(&docs, &query);
        for pair in ranked.windows(2) {
            if compare_scored(&pair[0], &pair[1]) == Ordering::Equal {
                let a = docs.iter().position(|d| std::ptr::eq(d, pair[0].doc));
                let b = docs.iter().position(|d| std::ptr::eq(d, pair[1].doc));
                prop_assert!(a < b);
            }
        }
    }

    /// Property: ranking never duplicates or invents documents.
    #[test]
    fn prop_ranking_is_a_subset(docs in corpus_strategy(), query in word_strategy()) {
        let ranked = rank_scored(&docs, &query);
        let matching = docs.iter().filter(|d| score(d, &query) > 0).count();
        prop_assert_eq!(ranked.len(), matching);
    }
}
