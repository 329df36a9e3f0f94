//! Shared test fixtures.

#![allow(dead_code)]

use loupe::testing::make_doc;
use loupe::Document;

/// A small mixed blog/docs corpus with predictable scoring behavior.
pub fn site_corpus() -> Vec<Document> {
    vec![
        Document {
            title: Some("Vector Search Guide".to_string()),
            summary: Some("intro".to_string()),
            content: Some("building vector search from scratch".to_string()),
            tags: vec!["search".to_string()],
            section: Some("tutorials".to_string()),
            url: "/docs/vector-search".to_string(),
            date: Some("2025-01-10".to_string()),
        },
        Document {
            title: Some("Blog: Vectors".to_string()),
            summary: Some("search vectors".to_string()),
            content: None,
            tags: vec![],
            section: Some("blog".to_string()),
            url: "/blog/vectors".to_string(),
            date: Some("2025-02-01".to_string()),
        },
        Document {
            title: Some("Deploy Checklist".to_string()),
            summary: Some("ship it".to_string()),
            content: Some("deployment notes and rollback".to_string()),
            tags: vec!["ops".to_string()],
            section: Some("docs".to_string()),
            url: "/docs/deploy".to_string(),
            date: None,
        },
        Document {
            title: Some("Release Notes".to_string()),
            summary: None,
            content: Some("vectors got faster this release".to_string()),
            tags: vec![],
            section: None,
            url: "/blog/release-notes".to_string(),
            date: Some("2025-03-20".to_string()),
        },
    ]
}

/// N interchangeable docs with the same title, for tie/truncation tests.
pub fn uniform_corpus(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| make_doc("Rust Notes", &format!("/blog/note-{i}")))
        .collect()
}
