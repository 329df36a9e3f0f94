//! Highlighter behavior, including the sequential-replacement quirk.

use loupe::highlight;

#[test]
fn highlights_every_occurrence_of_every_token() {
    assert_eq!(
        highlight("Vector search makes vectors searchable", "vector search"),
        "<mark>Vector</mark> <mark>search</mark> makes <mark>vector</mark>s <mark>search</mark>able"
    );
}

#[test]
fn empty_query_returns_text_unchanged() {
    assert_eq!(highlight("untouched", ""), "untouched");
    assert_eq!(highlight("untouched", " \t "), "untouched");
}

#[test]
fn single_character_tokens_are_ignored() {
    assert_eq!(highlight("a e i o u", "a e i"), "a e i o u");
}

#[test]
fn metacharacters_are_escaped_not_interpreted() {
    assert_eq!(highlight("cost is $5 (sale)", "(sale)"), "cost is $5 <mark>(sale)</mark>");
    assert_eq!(highlight("anything", ".*"), "anything");
}

#[test]
fn tokens_apply_sequentially_over_prior_output() {
    // Second token wraps text the first token already marked. Nested markers
    // are the documented behavior, not a bug.
    assert_eq!(
        highlight("searchable", "searchable search"),
        "<mark><mark>search</mark>able</mark>"
    );
}

#[test]
fn later_token_can_match_inside_inserted_markers() {
    // "ar" finds hits inside the literal "<mark>"/"</mark>" text the first
    // token inserted. Preserved verbatim from the shipped widget.
    assert_eq!(
        highlight("markdown", "mark ar"),
        "<m<mark>ar</mark>k>m<mark>ar</mark>k</m<mark>ar</mark>k>down"
    );
}
