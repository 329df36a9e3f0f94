// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search widget.
//!
//! These types define what a searchable document looks like, what a scored
//! result carries, and how the current page path restricts what a search may
//! return. Everything here is plain data; the ranking pipeline lives in
//! [`crate::search`] and the per-widget mutable state in
//! [`crate::search::SearchSession`].
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Result lists**: at most [`RESULT_LIMIT`] entries, scores non-increasing,
//!   ties preserve corpus order. Enforced by `rank`, relied on by the cursor.
//!
//! - **Document fields**: every text field except `url` is optional in the
//!   index file. Missing fields score and render as empty strings - never as
//!   an error.
//!
//! - **Context**: derived from the page path only. The same query on `/blog/x`
//!   and `/docs/y` may return different result sets, but never differently
//!   *scored* documents - filtering happens after scoring.

use serde::{Deserialize, Serialize};

/// Maximum number of results a search returns.
///
/// The widget renders a dropdown, not a results page; ten rows is the whole
/// viewport budget.
pub const RESULT_LIMIT: usize = 10;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One searchable page from the site index.
///
/// Deserialized from the `/index.json` array the site generator emits at build
/// time. Only `url` is required - the generator omits fields that a page
/// doesn't have (a landing page has no tags, a changelog entry no summary).
/// Uniqueness by `url` is implied by the generator but not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Site section the page belongs to (e.g. "blog", "tutorials")
    #[serde(default)]
    pub section: Option<String>,
    pub url: String,
    /// Publication date, preformatted by the generator for display
    #[serde(default)]
    pub date: Option<String>,
}

impl Document {
    /// Title text with the missing-field-is-empty convention applied.
    #[inline]
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Summary text, empty when absent.
    #[inline]
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    /// Body text, empty when absent.
    #[inline]
    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Section name, empty when absent.
    #[inline]
    pub fn section_text(&self) -> &str {
        self.section.as_deref().unwrap_or("")
    }
}

/// A document plus its relevance score for one query.
///
/// Transient: produced by every ranking pass, replaced by the next one. The
/// score is internal - the rendering side receives the document fields and a
/// selection index, never the number.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    pub doc: Document,
    pub score: u32,
}

// =============================================================================
// CONTEXT: PATH-DERIVED RESULT RESTRICTION
// =============================================================================

/// Which slice of the site a search is restricted to.
///
/// Searching from a blog page only surfaces blog posts; from a docs page only
/// documentation. Everywhere else the search box is hidden entirely, so there
/// is no "search the whole site" context to model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchContext {
    Blog,
    Docs,
}

impl SearchContext {
    /// Classify a page path. Pure: same path, same answer.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.starts_with("/blog") {
            Some(SearchContext::Blog)
        } else if path.starts_with("/docs") {
            Some(SearchContext::Docs)
        } else {
            None
        }
    }

    /// Does a document URL fall inside this context?
    #[inline]
    pub fn matches_url(self, url: &str) -> bool {
        match self {
            SearchContext::Blog => url.starts_with("/blog"),
            SearchContext::Docs => url.starts_with("/docs"),
        }
    }
}

/// Whether the search widget exists at all on this page.
///
/// The widget is mounted only on blog and docs pages; marketing pages keep
/// their chrome free of it.
pub fn search_enabled_for_path(path: &str) -> bool {
    path.starts_with("/blog") || path.starts_with("/docs")
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// The four cursor movements the keyboard surface can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// ArrowDown: advance, clamped to the last result
    Down,
    /// ArrowUp: retreat, past the first result into "nothing selected"
    Up,
    /// Ctrl/Cmd+Home: jump to the first result
    First,
    /// Ctrl/Cmd+End: jump to the last result
    Last,
}
