//! Client-side search core for static sites.
//!
//! This crate is the logic behind a site's search box: it loads the
//! prebuilt `/index.json` document index once per page session, ranks
//! documents against queries with weighted substring matching, tracks a
//! keyboard-driven selection cursor, and produces highlighted snippets for
//! whatever renders the dropdown. Rendering itself stays outside - the core
//! talks to the page through injected callbacks and never touches a DOM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  corpus.rs  │────▶│  search.rs   │◀────│  scoring.rs   │
//! │ (CorpusStore│     │ (rank,       │     │ (tokenize,    │
//! │  LoadError) │     │ SearchSession│     │ score_document│
//! └─────────────┘     └──────┬───────┘     └───────────────┘
//!                            │
//!              ┌─────────────┼──────────────┐
//!              ▼             ▼              ▼
//!       ┌────────────┐ ┌───────────┐ ┌──────────────┐
//!       │navigator.rs│ │debounce.rs│ │ highlight.rs │
//!       │  (Cursor)  │ │ (tickets) │ │   (<mark>)   │
//!       └────────────┘ └───────────┘ └──────────────┘
//! ```
//!
//! `keyboard.rs` classifies key events into intents for the glue code;
//! `wasm.rs` (feature `wasm`) packages the whole thing as a browser widget.
//!
//! # Usage
//!
//! ```ignore
//! use loupe::{CorpusStore, SearchSession, SearchContext, NavDirection};
//!
//! let corpus = CorpusStore::shared();
//! corpus.load("https://example.com/index.json").await?;
//!
//! let mut session = SearchSession::new(corpus);
//! let results = session.search("vector search", Some(SearchContext::Docs));
//! session.navigate(NavDirection::Down);
//! if let Some(url) = session.selected_url() { /* go there */ }
//! ```
//!
//! # Guarantees
//!
//! - Result lists hold at most ten entries, scores non-increasing, ties in
//!   corpus order.
//! - A failed index fetch is logged and degrades every later search to the
//!   empty list; nothing panics, nothing throws.
//! - A superseded debounce ticket can never apply stale results.

// Module declarations
mod corpus;
mod debounce;
mod highlight;
mod keyboard;
mod navigator;
mod scoring;
mod search;
#[doc(hidden)]
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use corpus::{Corpus, CorpusStore, LoadError};
pub use debounce::{Debouncer, Ticket, DEBOUNCE_DELAY_MS, MIN_QUERY_LEN};
pub use highlight::highlight;
pub use keyboard::{global_key_action, widget_key_action, GlobalKeyAction, WidgetKeyAction};
pub use navigator::Cursor;
pub use scoring::{
    score_document, tokenize, CONTENT_WEIGHT, SECTION_WEIGHT, SUMMARY_WEIGHT, TAG_WEIGHT,
    TITLE_EXACT_WEIGHT, TITLE_PARTIAL_WEIGHT,
};
pub use search::{rank, SearchSession};
pub use types::{
    search_enabled_for_path, Document, NavDirection, ScoredDocument, SearchContext, RESULT_LIMIT,
};

#[cfg(feature = "wasm")]
pub use wasm::{should_focus_search, LoupeCorpus, LoupeWidget};
