//! The awkward inputs: missing fields, unloaded corpora, degenerate queries.

use super::common::site_corpus;
use loupe::testing::session_with_docs;
use loupe::{rank, CorpusStore, Document, NavDirection, SearchSession};

#[test]
fn documents_with_only_a_url_are_searchable_non_fatally() {
    let docs = vec![Document {
        title: None,
        summary: None,
        content: None,
        tags: vec![],
        section: None,
        url: "/docs/bare".to_string(),
        date: None,
    }];
    // Nothing to match on: no results, no panic
    assert!(rank(&docs, "anything", None).is_empty());
}

#[test]
fn search_before_load_is_empty_and_resets_state() {
    let mut session = SearchSession::new(CorpusStore::shared());
    assert!(session.search("vector", None).is_empty());
    assert_eq!(session.selected_index(), None);
    assert!(!session.navigate(NavDirection::Down));
}

#[test]
fn search_after_failed_load_is_empty() {
    let store = CorpusStore::shared();
    store.mark_failed();
    let mut session = SearchSession::new(store);
    assert!(session.search("vector", None).is_empty());
    assert!(session.search("deploy", None).is_empty());
}

#[test]
fn whitespace_only_query_clears_previous_results() {
    let mut session = session_with_docs(site_corpus());
    session.search("vector", None);
    assert!(!session.results().is_empty());

    session.search("   ", None);
    assert!(session.results().is_empty());
    assert_eq!(session.selected_index(), None);
}

#[test]
fn single_character_token_query_is_empty() {
    let mut session = session_with_docs(site_corpus());
    // Every token has length 1, so the token list is empty - even though
    // "v" and "s" occur all over the corpus
    assert!(session.search("v s g", None).is_empty());
}

#[test]
fn mixed_length_tokens_keep_only_the_long_ones() {
    let docs = site_corpus();
    // "a vector" ranks identically to "vector"
    let with_noise = rank(&docs, "a vector", None);
    let without = rank(&docs, "vector", None);
    assert_eq!(with_noise.len(), without.len());
    for (a, b) in with_noise.iter().zip(without.iter()) {
        assert_eq!(a.doc.url, b.doc.url);
        assert_eq!(a.score, b.score);
    }
}

#[test]
fn duplicate_query_tokens_score_twice() {
    // Tokens are not deduplicated: "vector vector" counts each occurrence
    // of the token list, exactly like the shipped widget did
    let docs = site_corpus();
    let single = rank(&docs, "vector", None);
    let double = rank(&docs, "vector vector", None);
    assert_eq!(double[0].score, 2 * single[0].score);
}
