//! Highlighting and excerpting as seen through result cards and the
//! standalone render functions.

use super::common::make_doc;
use docsift::{
    escape, excerpt, find_matches, highlight, score, search, unescape, SearchOptions, ELLIPSIS,
};

#[test]
fn test_markup_in_documents_is_escaped() {
    let docs = vec![make_doc(
        1,
        "<script>alert('x')</script>",
        "Use \"quotes\" & <tags> with script",
    )];
    let outcome = search(&docs, "script", &SearchOptions::default());
    let card = &outcome.cards()[0];

    assert_eq!(
        card.title_html,
        "&lt;<mark>script</mark>&gt;alert(&#39;x&#39;)&lt;/<mark>script</mark>&gt;"
    );
    assert_eq!(
        card.excerpt_html,
        "Use &quot;quotes&quot; &amp; &lt;tags&gt; with <mark>script</mark>"
    );
}

#[test]
fn test_query_never_matches_inside_entities() {
    assert_eq!(highlight("R&D", "amp"), "R&amp;D");
    assert_eq!(highlight("a < b", "lt"), "a &lt; b");
}

#[test]
fn test_query_with_markup_characters() {
    assert_eq!(highlight("x <b> y", "<B>"), "x <mark>&lt;b&gt;</mark> y");
}

#[test]
fn test_highlight_preserves_original_case() {
    assert_eq!(
        highlight("ALPHA Alpha alpha", "aLpHa"),
        "<mark>ALPHA</mark> <mark>Alpha</mark> <mark>alpha</mark>"
    );
}

#[test]
fn test_highlight_non_ascii() {
    assert_eq!(highlight("Café CAFÉ", "café"), "<mark>Café</mark> <mark>CAFÉ</mark>");
}

/// "ΟΔΟΣ" in capitals; the last letter is capital sigma.
const GREEK_UPPER: &str = "\u{39F}\u{394}\u{39F}\u{3A3}";

#[test]
fn test_scorer_and_highlighter_agree_on_final_sigma() {
    let doc = make_doc(1, GREEK_UPPER, GREEK_UPPER);
    let queries = [
        // word-final small sigma
        "\u{3BF}\u{3B4}\u{3BF}\u{3C2}",
        // medial small sigma
        "\u{3BF}\u{3B4}\u{3BF}\u{3C3}",
        GREEK_UPPER,
    ];

    for query in queries {
        let scored = score(&doc, query);
        let marked = highlight(&doc.title, query).contains("<mark>");
        assert_eq!(scored > 0, marked, "query {:?} scored {}", query, scored);

        let window = excerpt(&doc.text, query, 1);
        assert_eq!(
            scored > 0,
            !find_matches(&window, query).is_empty(),
            "query {:?} excerpt {:?}",
            query,
            window
        );
    }
    assert_eq!(score(&doc, GREEK_UPPER), 2);
}

#[test]
fn test_unescape_inverts_escape() {
    let raw = "<a href=\"x\">Tom & 'Jerry'</a>";
    assert_eq!(unescape(&escape(raw)), raw);
}

#[test]
fn test_excerpt_counts_characters_not_bytes() {
    let text = format!("{}needle{}", "é".repeat(10), "ü".repeat(10));
    let expected = format!("{}{}needle{}{}", ELLIPSIS, "é".repeat(2), "ü".repeat(2), ELLIPSIS);
    assert_eq!(excerpt(&text, "needle", 2), expected);
}

#[test]
fn test_excerpt_without_match_shows_opening() {
    let text = "z".repeat(300);
    let out = excerpt(&text, "alpha", 120);
    assert_eq!(out.chars().count(), 241);
    assert!(out.ends_with(ELLIPSIS));
    assert!(!out.starts_with(ELLIPSIS));
}

#[test]
fn test_excerpt_empty_text() {
    assert_eq!(excerpt("", "alpha", 120), "");
}
