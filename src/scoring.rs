// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Scoring is weighted substring containment: the query is split into
//! lowercase tokens, and each token earns a document points for every *field*
//! it appears in. A token counts at most once per field - "rust rust rust" in
//! a summary is worth exactly one summary hit.
//!
//! # Weight table
//!
//! | Field            | Weight | Why this value |
//! |------------------|--------|----------------|
//! | Title (exact)    | 50     | The whole title IS the token - near-certain intent |
//! | Title (substring)| 20     | Titles are short and curated, hits are meaningful |
//! | Tags             | 15     | Hand-assigned labels, almost as strong as titles |
//! | Summary          | 10     | Editorial text, dense in signal |
//! | Section          | 5      | Broad bucket, weak signal on its own |
//! | Content          | 2      | Long body text matches almost anything |
//!
//! The gaps are deliberate: a single title hit (20) outweighs a summary hit
//! plus a content hit (12), so pages that *are about* the query beat pages
//! that merely mention it. The `const` block below pins the ordering at
//! compile time.
//!
//! # Tokenization
//!
//! Lowercase, whitespace-split, single-character tokens discarded. A query
//! of only one-character tokens therefore ranks as an empty query and
//! returns nothing - "a b c" finds no documents even though plenty contain
//! those letters.

use crate::types::Document;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Token equals the entire lowercased title.
pub const TITLE_EXACT_WEIGHT: u32 = 50;

/// Token appears somewhere in the title.
pub const TITLE_PARTIAL_WEIGHT: u32 = 20;

/// Token appears in the space-joined tag list.
pub const TAG_WEIGHT: u32 = 15;

/// Token appears in the summary.
pub const SUMMARY_WEIGHT: u32 = 10;

/// Token appears in the section name.
pub const SECTION_WEIGHT: u32 = 5;

/// Token appears in the body content.
pub const CONTENT_WEIGHT: u32 = 2;

// Static assertions that the field hierarchy holds. If a weight edit breaks
// the ordering, the crate won't build.
const _: () = {
    assert!(TITLE_EXACT_WEIGHT > TITLE_PARTIAL_WEIGHT);
    assert!(TITLE_PARTIAL_WEIGHT > TAG_WEIGHT);
    assert!(TAG_WEIGHT > SUMMARY_WEIGHT);
    assert!(SUMMARY_WEIGHT > SECTION_WEIGHT);
    assert!(SECTION_WEIGHT > CONTENT_WEIGHT);
    // A title hit beats a summary+content co-occurrence
    assert!(TITLE_PARTIAL_WEIGHT > SUMMARY_WEIGHT + CONTENT_WEIGHT);
};

/// Split a query into ranking tokens: lowercased, whitespace-separated,
/// single-character fragments dropped.
///
/// Character count (not byte length) decides what "single-character" means,
/// so "é" is dropped and "日本" is kept.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Score one document against a tokenized query.
///
/// Zero means "no token touched any field" and the caller drops the document.
/// Fields are lowercased here, per call - the corpus stays untouched so the
/// renderer can show the original casing.
pub fn score_document(doc: &Document, tokens: &[String]) -> u32 {
    if tokens.is_empty() {
        return 0;
    }

    let title = doc.title_text().to_lowercase();
    let summary = doc.summary_text().to_lowercase();
    let content = doc.content_text().to_lowercase();
    let tags = doc.tags.join(" ").to_lowercase();
    let section = doc.section_text().to_lowercase();

    let mut score = 0u32;
    for token in tokens {
        if title.contains(token.as_str()) {
            score += if title == *token {
                TITLE_EXACT_WEIGHT
            } else {
                TITLE_PARTIAL_WEIGHT
            };
        }
        if summary.contains(token.as_str()) {
            score += SUMMARY_WEIGHT;
        }
        if content.contains(token.as_str()) {
            score += CONTENT_WEIGHT;
        }
        if tags.contains(token.as_str()) {
            score += TAG_WEIGHT;
        }
        if section.contains(token.as_str()) {
            score += SECTION_WEIGHT;
        }
    }
    score
}
