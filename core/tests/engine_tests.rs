use textdex_core::{highlight_term, Appearance, Document, DocumentInput, Engine, IndexError, MAX_RESULTS};

fn appearance(doc_id: &str, frequency: u32) -> Appearance {
    Appearance { doc_id: doc_id.to_string(), frequency }
}

#[test]
fn lookup_reports_term_frequency() {
    let mut engine = Engine::default();
    engine.index_document(Document::new("0", "the cat sat on the mat")).unwrap();
    let result = engine.lookup_query("the");
    assert_eq!(result.len(), 1);
    assert_eq!(result.get("the").unwrap(), &[appearance("0", 2)]);
}

#[test]
fn frequency_matches_occurrences_across_documents() {
    let mut engine = Engine::default();
    engine.index_document(Document::new("0", "a b a c a")).unwrap();
    engine.index_document(Document::new("1", "b b")).unwrap();
    assert_eq!(engine.lookup_query("a").get("a").unwrap(), &[appearance("0", 3)]);
    assert_eq!(
        engine.lookup_query("b").get("b").unwrap(),
        &[appearance("0", 1), appearance("1", 2)]
    );
}

#[test]
fn clear_index_is_idempotent_and_keeps_documents() {
    let mut engine = Engine::default();
    engine.ingest_corpus("one fish\n\ntwo fish").unwrap();
    engine.clear_index();
    engine.clear_index();
    assert!(engine.lookup_query("fish").is_empty());
    assert!(engine.search("fish").is_empty());
    assert_eq!(engine.store().len(), 2);
}

#[test]
fn reindexing_same_id_appends() {
    let mut engine = Engine::default();
    engine.index_document(Document::new("0", "cat")).unwrap();
    engine.index_document(Document::new("0", "cat cat")).unwrap();
    assert_eq!(
        engine.lookup_query("cat").get("cat").unwrap(),
        &[appearance("0", 1), appearance("0", 2)]
    );
}

#[test]
fn unknown_term_is_omitted() {
    let mut engine = Engine::default();
    engine.index_document(Document::new("0", "cat")).unwrap();
    let result = engine.lookup_query("cat zebra");
    assert!(result.contains_key("cat"));
    assert!(!result.contains_key("zebra"));
    assert_eq!(result.len(), 1);
}

#[test]
fn empty_text_indexes_the_empty_term() {
    let mut engine = Engine::default();
    let stored = engine.index_document(Document::new("0", "")).unwrap();
    assert_eq!(stored.text, "");
    assert_eq!(engine.index().postings("").unwrap(), &[appearance("0", 1)]);
}

#[test]
fn results_are_capped() {
    let mut engine = Engine::default();
    let corpus = (0..15).map(|i| format!("cat number {i}")).collect::<Vec<_>>().join("\n\n");
    engine.ingest_corpus(&corpus).unwrap();
    assert_eq!(engine.lookup_query("cat").get("cat").unwrap().len(), 15);

    let results = engine.search("cat");
    assert_eq!(MAX_RESULTS, 11);
    assert_eq!(results.len(), 11);
    assert_eq!(results[0], "--- document 0: [cat] number 0");
    assert_eq!(results[10], "--- document 10: [cat] number 10");
}

#[test]
fn cap_spans_multiple_terms() {
    let mut engine = Engine::default();
    let corpus = (0..8).map(|_| "cat dog").collect::<Vec<_>>().join("\n\n");
    engine.ingest_corpus(&corpus).unwrap();
    let results = engine.search("dog cat");
    assert_eq!(results.len(), 11);
    assert!(results[..8].iter().all(|r| r.ends_with("cat [dog]")));
    assert!(results[8..].iter().all(|r| r.ends_with("[cat] dog")));
}

#[test]
fn search_skips_removed_documents() {
    let mut engine = Engine::default();
    engine.ingest_corpus("the cat\n\nanother cat").unwrap();
    engine.store_mut().remove("0");
    assert_eq!(engine.search("cat"), vec!["--- document 1: another [cat]".to_string()]);
}

#[test]
fn remove_document_purges_postings() {
    let mut engine = Engine::default();
    engine.ingest_corpus("the cat\n\nanother cat").unwrap();
    assert!(engine.remove_document("0").is_some());
    assert_eq!(engine.lookup_query("cat").get("cat").unwrap(), &[appearance("1", 1)]);
    assert!(!engine.lookup_query("the").contains_key("the"));
    assert!(engine.remove_document("0").is_none());
}

#[test]
fn missing_fields_are_invalid() {
    let mut engine = Engine::default();
    let err = engine.index_input(DocumentInput { id: None, text: Some("cat".into()) }).unwrap_err();
    assert!(matches!(err, IndexError::InvalidDocument { field: "id" }));
    assert!(engine.lookup_query("cat").is_empty());
}

#[test]
fn term_with_inner_punctuation_is_indexed_but_not_bracketed() {
    let mut engine = Engine::default();
    engine.ingest_corpus("it's here").unwrap();
    assert!(engine.lookup_query("its").contains_key("its"));
    assert_eq!(engine.search("its"), vec!["--- document 0: it's here".to_string()]);
    assert_eq!(highlight_term("0", "sat", "the cat. sat!"), "--- document 0: the cat. [sat]!");
}

#[test]
fn crlf_corpus_is_split_into_documents() {
    let mut engine = Engine::default();
    assert_eq!(engine.ingest_corpus("the cat\r\n\r\nthe dog\r\n").unwrap(), 2);
    assert_eq!(
        engine.search("the"),
        vec!["--- document 0: [the] cat".to_string(), "--- document 1: [the] dog\n".to_string()]
    );
}
