// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-term highlighting for result snippets.
//!
//! Every token of the query gets wrapped in `<mark>` wherever it occurs in
//! the text, case-insensitively. Tokens are applied one after another, each
//! over the previous token's output. That means a later token can match
//! inside the `<mark>` tags an earlier token inserted and wrap *them* -
//! searching "mark ma" against "remarkable" produces nested markers. This is
//! long-standing observable behavior of the widget; renderers cope with it,
//! so it stays.
//!
//! Tokens are regex-escaped before compilation, so queries containing `(`,
//! `*`, `$` and friends highlight literally instead of erroring.

use crate::scoring::tokenize;
use regex::RegexBuilder;

/// Wrap every case-insensitive occurrence of every query token in
/// `<mark>…</mark>`.
///
/// Tokenization matches the ranker: whitespace-split, lowercased,
/// single-character tokens dropped. Empty text or a query with no usable
/// tokens returns the text unchanged.
pub fn highlight(text: &str, query: &str) -> String {
    if text.is_empty() || query.trim().is_empty() {
        return text.to_string();
    }

    let mut highlighted = text.to_string();
    for token in tokenize(query) {
        let Ok(pattern) = RegexBuilder::new(&format!("({})", regex::escape(&token)))
            .case_insensitive(true)
            .build()
        else {
            // Escaped literals always compile; left as a guard rather than a
            // panic path because this runs on raw user input.
            continue;
        };
        highlighted = pattern
            .replace_all(&highlighted, "<mark>$1</mark>")
            .into_owned();
    }
    highlighted
}
