//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::corpus::CorpusStore;
use crate::search::SearchSession;
use crate::types::Document;
use std::sync::Arc;

/// Create a document with a title and URL; everything else absent.
///
/// This is the canonical fixture used across all tests.
pub fn make_doc(title: &str, url: &str) -> Document {
    Document {
        title: Some(title.to_string()),
        summary: None,
        content: None,
        tags: vec![],
        section: None,
        url: url.to_string(),
        date: None,
    }
}

/// Create a document with every text field populated.
pub fn make_full_doc(title: &str, summary: &str, content: &str, tags: &[&str], url: &str) -> Document {
    Document {
        title: Some(title.to_string()),
        summary: Some(summary.to_string()),
        content: Some(content.to_string()),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        section: None,
        url: url.to_string(),
        date: None,
    }
}

/// A ready-to-search session over the given documents.
pub fn session_with_docs(docs: Vec<Document>) -> SearchSession {
    let store = CorpusStore::shared();
    store.install(docs);
    SearchSession::new(store)
}

/// A shared store preloaded with the given documents.
pub fn store_with_docs(docs: Vec<Document>) -> Arc<CorpusStore> {
    let store = CorpusStore::shared();
    store.install(docs);
    store
}
