// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: one fetch per page session, then read-only forever.
//!
//! The site generator publishes the full document index as a JSON array at
//! `/index.json`. [`CorpusStore`] owns the lifecycle:
//!
//! ```text
//! Uninitialized ──load()/install()──▶ Ready(corpus)
//!       │
//!       └──────fetch failed──────────▶ Failed        (sticky)
//! ```
//!
//! Both terminal states are sticky for the page session. A failed fetch is
//! logged and the widget degrades to returning empty results - search never
//! surfaces a load error to the user, the dropdown just stays empty.
//!
//! Two loading paths feed the same store:
//! - native: [`CorpusStore::load`] fetches over HTTP (`fetch` feature)
//! - browser: the JS glue runs `fetch()` itself and hands the decoded array
//!   across the WASM boundary via [`CorpusStore::install`]
//!
//! The store is shared by the desktop and mobile widget variants through an
//! `Arc`, behind a `parking_lot::RwLock`. Writes happen once; every search
//! afterwards is a read.

use crate::types::Document;
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a corpus failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The index endpoint answered, but not with a success status.
    #[error("index fetch returned HTTP {status}")]
    Http { status: u16 },
    /// The request never completed (DNS, connection, timeout).
    #[error("index fetch failed: {0}")]
    Request(String),
    /// The body was not a valid document array.
    #[error("index decode failed: {0}")]
    Decode(String),
    /// A previous load attempt already failed this session.
    #[error("corpus load already failed this session")]
    AlreadyFailed,
}

/// The loaded, immutable document set.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }

    /// Decode a corpus from raw index bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let docs: Vec<Document> = serde_json::from_slice(bytes)
            .map_err(|e| LoadError::Decode(e.to_string()))?;
        Ok(Self { docs })
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[derive(Debug)]
enum LoadState {
    Uninitialized,
    Ready(Corpus),
    Failed,
}

/// Shared write-once corpus slot.
///
/// Construct once per page, clone the `Arc` into each widget variant.
#[derive(Debug)]
pub struct CorpusStore {
    state: RwLock<LoadState>,
}

impl Default for CorpusStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoadState::Uninitialized),
        }
    }

    /// Convenience for the common shared-ownership setup.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Fetch the index over HTTP and install it. Single-shot: calling again
    /// while `Ready` returns the existing doc count without refetching, and
    /// calling after a failure returns the sticky error without retrying.
    #[cfg(feature = "fetch")]
    pub async fn load(&self, url: &str) -> Result<usize, LoadError> {
        match &*self.state.read() {
            LoadState::Ready(corpus) => return Ok(corpus.len()),
            LoadState::Failed => return Err(LoadError::AlreadyFailed),
            LoadState::Uninitialized => {}
        }

        match fetch_index(url).await {
            Ok(corpus) => {
                let count = corpus.len();
                debug!(url, docs = count, "corpus loaded");
                // Another load() may have won the race while we were fetching;
                // first writer wins, the corpus content is identical anyway.
                let mut state = self.state.write();
                if matches!(*state, LoadState::Uninitialized) {
                    *state = LoadState::Ready(corpus);
                }
                Ok(count)
            }
            Err(err) => {
                warn!(url, error = %err, "corpus load failed; search disabled for this session");
                let mut state = self.state.write();
                if matches!(*state, LoadState::Uninitialized) {
                    *state = LoadState::Failed;
                }
                Err(err)
            }
        }
    }

    /// Install an already-decoded corpus (WASM glue path, tests).
    /// No-op when the store already reached a terminal state.
    pub fn install(&self, docs: Vec<Document>) {
        let mut state = self.state.write();
        if matches!(*state, LoadState::Uninitialized) {
            debug!(docs = docs.len(), "corpus installed");
            *state = LoadState::Ready(Corpus::new(docs));
        }
    }

    /// Record a glue-side fetch failure. Sticky, like a failed [`load`].
    ///
    /// [`load`]: CorpusStore::load
    pub fn mark_failed(&self) {
        let mut state = self.state.write();
        if matches!(*state, LoadState::Uninitialized) {
            warn!("corpus marked failed; search disabled for this session");
            *state = LoadState::Failed;
        }
    }

    /// True once a corpus is available to search.
    pub fn is_ready(&self) -> bool {
        matches!(*self.state.read(), LoadState::Ready(_))
    }

    /// Run `f` over the loaded documents, or get `None` while uninitialized
    /// or failed. This is the only read path the ranking pipeline uses.
    pub fn with_docs<R>(&self, f: impl FnOnce(&[Document]) -> R) -> Option<R> {
        match &*self.state.read() {
            LoadState::Ready(corpus) => Some(f(corpus.docs())),
            _ => None,
        }
    }
}

/// GET the index and decode it. Non-success statuses are errors; the body is
/// only read for 2xx responses.
#[cfg(feature = "fetch")]
async fn fetch_index(url: &str) -> Result<Corpus, LoadError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Http {
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;
    Corpus::from_json_slice(&bytes)
}
