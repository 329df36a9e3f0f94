// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline and the per-widget search session.
//!
//! [`rank`] is a pure function from (corpus, query, context) to an ordered
//! result list; [`SearchSession`] wraps it with the state one widget instance
//! carries between events: the current results and the selection cursor. The
//! desktop and mobile inputs each own a session; they share the corpus, not
//! their state.
//!
//! # Pipeline
//!
//! ```text
//! tokenize ─▶ score every doc ─▶ drop zeros ─▶ stable sort desc
//!          ─▶ context filter ─▶ truncate to RESULT_LIMIT
//! ```
//!
//! Ordering details that matter:
//! - The sort is stable, so equal scores keep corpus order. Deterministic
//!   output for a deterministic index file.
//! - The context filter runs *after* sorting and preserves order; scoring is
//!   context-independent.
//! - Truncation is last, so a context filter never uncovers results beyond
//!   the first ten of its own slice.

use crate::corpus::CorpusStore;
use crate::navigator::Cursor;
use crate::scoring::{score_document, tokenize};
use crate::types::{Document, NavDirection, ScoredDocument, SearchContext, RESULT_LIMIT};
use std::sync::Arc;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank a corpus against a query.
///
/// Returns at most [`RESULT_LIMIT`] documents, highest score first, ties in
/// corpus order. An empty or all-single-character query returns nothing.
pub fn rank(
    docs: &[Document],
    query: &str,
    context: Option<SearchContext>,
) -> Vec<ScoredDocument> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut scored = score_all(docs, &tokens);

    // Stable: ties keep the corpus order the generator emitted
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(context) = context {
        scored.retain(|entry| context.matches_url(&entry.doc.url));
    }

    scored.truncate(RESULT_LIMIT);
    scored
}

#[cfg(feature = "parallel")]
fn score_all(docs: &[Document], tokens: &[String]) -> Vec<ScoredDocument> {
    // Indexed par_iter keeps corpus order in the collected Vec, so the
    // stable sort downstream sees the same input as the sequential path.
    docs.par_iter()
        .filter_map(|doc| {
            let score = score_document(doc, tokens);
            (score > 0).then(|| ScoredDocument {
                doc: doc.clone(),
                score,
            })
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(docs: &[Document], tokens: &[String]) -> Vec<ScoredDocument> {
    docs.iter()
        .filter_map(|doc| {
            let score = score_document(doc, tokens);
            (score > 0).then(|| ScoredDocument {
                doc: doc.clone(),
                score,
            })
        })
        .collect()
}

/// One widget instance's search state: current results plus selection cursor.
///
/// Every mutation keeps the pair consistent - a new search replaces the
/// results *and* resets the cursor, so the cursor can never point past the
/// list it belongs to.
#[derive(Debug)]
pub struct SearchSession {
    corpus: Arc<CorpusStore>,
    results: Vec<ScoredDocument>,
    cursor: Cursor,
}

impl SearchSession {
    pub fn new(corpus: Arc<CorpusStore>) -> Self {
        Self {
            corpus,
            results: Vec::new(),
            cursor: Cursor::new(),
        }
    }

    /// Run a search and store its results as the session's current list.
    ///
    /// Before the corpus is ready (or after a failed load) this returns the
    /// empty list - it never errors. Either way the previous results are
    /// discarded and the cursor resets.
    pub fn search(&mut self, query: &str, context: Option<SearchContext>) -> &[ScoredDocument] {
        self.results = self
            .corpus
            .with_docs(|docs| rank(docs, query, context))
            .unwrap_or_default();
        self.cursor.reset();
        debug!(query, results = self.results.len(), "search");
        &self.results
    }

    /// Query cleared: drop results and selection.
    pub fn clear(&mut self) {
        self.results.clear();
        self.cursor.reset();
    }

    /// Current result list, most relevant first.
    pub fn results(&self) -> &[ScoredDocument] {
        &self.results
    }

    /// Move the selection cursor. Returns whether it changed (the caller
    /// re-renders only on change). No-op while the list is empty.
    pub fn navigate(&mut self, direction: NavDirection) -> bool {
        self.cursor.navigate(direction, self.results.len())
    }

    /// Select a row directly (mouse hover).
    pub fn select(&mut self, index: usize) -> bool {
        self.cursor.set(index, self.results.len())
    }

    /// Deselect without touching the results (Escape). Returns whether a
    /// selection was actually dropped.
    pub fn reset_selection(&mut self) -> bool {
        let changed = self.cursor.selected().is_some();
        self.cursor.reset();
        changed
    }

    /// Index of the selected row, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.cursor.selected()
    }

    /// URL of the selected result - the Enter-key navigation target.
    pub fn selected_url(&self) -> Option<&str> {
        self.cursor
            .selected()
            .and_then(|i| self.results.get(i))
            .map(|entry| entry.doc.url.as_str())
    }
}
