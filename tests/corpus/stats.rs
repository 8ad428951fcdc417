//! `CorpusStats` over a loaded file.

use super::common::{write_corpus, NEWSROOM_JSON};
use docsift::{load_corpus, CorpusStats};

#[test]
fn test_newsroom_stats() {
    let file = write_corpus(NEWSROOM_JSON);
    let docs = load_corpus(file.path()).unwrap();
    let stats = CorpusStats::collect(&docs);

    assert_eq!(stats.documents, 4);
    assert_eq!(stats.untitled, 1);
    // one record has no date, another has an unparseable one
    assert_eq!(stats.undated, 2);
    // the id-less last record falls back to position 3, which is taken
    assert_eq!(stats.duplicate_ids, 1);
    assert_eq!(stats.tagged, 2);
}

#[test]
fn test_stats_serialize() {
    let stats = CorpusStats::collect(&[]);
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["documents"], 0);
    assert_eq!(json["duplicate_ids"], 0);
}
