//! Ranking pipeline tests: weights, ordering, truncation.

use super::common::{site_corpus, uniform_corpus};
use loupe::{
    rank, CONTENT_WEIGHT, RESULT_LIMIT, SUMMARY_WEIGHT, TAG_WEIGHT, TITLE_PARTIAL_WEIGHT,
};

#[test]
fn multi_token_query_ranks_by_total_weight() {
    let docs = site_corpus();
    let results = rank(&docs, "vector search", None);

    let urls: Vec<_> = results.iter().map(|r| r.doc.url.as_str()).collect();
    assert_eq!(
        urls,
        ["/docs/vector-search", "/blog/vectors", "/blog/release-notes"]
    );

    // The guide: both tokens in title, both in content, "search" in tags
    assert_eq!(
        results[0].score,
        2 * TITLE_PARTIAL_WEIGHT + 2 * CONTENT_WEIGHT + TAG_WEIGHT
    );
    // The blog post: "vector" in title, both tokens in summary
    assert_eq!(results[1].score, TITLE_PARTIAL_WEIGHT + 2 * SUMMARY_WEIGHT);
    // The release notes: "vector" in content only
    assert_eq!(results[2].score, CONTENT_WEIGHT);
}

#[test]
fn zero_scoring_documents_are_dropped() {
    let results = rank(&site_corpus(), "deploy", None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc.url, "/docs/deploy");
}

#[test]
fn scores_strictly_ordered_or_ties_in_corpus_order() {
    let results = rank(&site_corpus(), "vector search", None);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn tie_break_preserves_corpus_order_across_many_docs() {
    let docs = uniform_corpus(8);
    let results = rank(&docs, "rust notes", None);
    let urls: Vec<_> = results.iter().map(|r| r.doc.url.as_str()).collect();
    let expected: Vec<String> = (0..8).map(|i| format!("/blog/note-{i}")).collect();
    assert_eq!(urls, expected);
}

#[test]
fn results_cap_at_ten() {
    let results = rank(&uniform_corpus(40), "rust", None);
    assert_eq!(results.len(), RESULT_LIMIT);
    // ...and the ten that survive are the first ten of the corpus
    assert_eq!(results[0].doc.url, "/blog/note-0");
    assert_eq!(results[9].doc.url, "/blog/note-9");
}

#[test]
fn matching_is_case_insensitive() {
    let results = rank(&site_corpus(), "VECTOR Search", None);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].doc.url, "/docs/vector-search");
}

#[test]
fn no_matching_tokens_means_no_results() {
    assert!(rank(&site_corpus(), "quantum zebra", None).is_empty());
}
