//! Loading corpus files from disk.

use super::common::{write_corpus, NEWSROOM_JSON};
use docsift::{load_corpus, DocumentId, Error};

#[test]
fn test_wrapped_corpus_fields() {
    let file = write_corpus(NEWSROOM_JSON);
    let docs = load_corpus(file.path()).unwrap();
    assert_eq!(docs.len(), 4);

    let first = &docs[0];
    assert_eq!(first.id, DocumentId::Int(1));
    assert_eq!(first.author, "Ada Byron");
    assert_eq!(first.category, "finance");
    assert_eq!(first.tags, vec!["budget".to_string(), "q1".to_string()]);

    let memo = &docs[1];
    assert_eq!(memo.id, DocumentId::Text("memo-7".to_string()));
    assert_eq!(memo.category, "announcements");
    assert_eq!(memo.tags, vec!["office".to_string(), "facilities".to_string()]);
    assert!(memo.timestamp() > first.timestamp());
}

#[test]
fn test_missing_id_falls_back_to_position() {
    let file = write_corpus(NEWSROOM_JSON);
    let docs = load_corpus(file.path()).unwrap();
    assert_eq!(docs[3].id, DocumentId::Int(3));
    assert_eq!(docs[3].title, "Travel budget");
}

#[test]
fn test_bare_array_corpus() {
    let file = write_corpus(r#"[{"id": 10, "title": "Only"}]"#);
    let docs = load_corpus(file.path()).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, DocumentId::Int(10));
    assert!(docs[0].text.is_empty());
}

#[test]
fn test_mistyped_fields_become_empty() {
    let file = write_corpus(
        r#"[{"id": 1, "title": 2024, "text": {"nested": true}, "author": null, "tags": [1, "a", null]}]"#,
    );
    let docs = load_corpus(file.path()).unwrap();
    assert_eq!(docs[0].title, "2024");
    assert_eq!(docs[0].text, "");
    assert_eq!(docs[0].author, "");
    assert_eq!(docs[0].tags, vec!["1".to_string(), "a".to_string()]);
}

#[test]
fn test_empty_documents_list() {
    let file = write_corpus(r#"{"documents": []}"#);
    assert!(load_corpus(file.path()).unwrap().is_empty());
}

#[test]
fn test_invalid_json_reports_json_error() {
    let file = write_corpus("{\"documents\": [");
    let err = load_corpus(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got {:?}", err);
}

#[test]
fn test_wrong_shape_reports_invalid_corpus() {
    let file = write_corpus(r#"{"posts": []}"#);
    let err = load_corpus(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidCorpus(_)), "got {:?}", err);
    assert!(err.to_string().contains("documents"));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_corpus(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
