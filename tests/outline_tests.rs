//! Heading extraction and structuring tests
//!
//! Tests for grouping subsections under sections and for the precondition
//! violations that abort setup.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;
mod fixtures;

use fixtures::{two_section_document, DocumentBuilder};
use test_case::test_case;
use tocnav::{build_outline, HeadingSource, TocError};

// =============================================================================
// STRUCTURE
// =============================================================================

#[test]
fn test_two_sections_with_children() {
    let outline = build_outline(two_section_document().sources()).unwrap();
    let sections = outline.sections();

    assert_eq!(sections.len(), 2, "Expected two top-level records");
    assert_eq!(sections[0].id, "h1");
    let first: Vec<_> = sections[0].children.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(first, ["h2", "h3"]);
    assert_eq!(sections[1].id, "h4");
    let second: Vec<_> = sections[1].children.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(second, ["h5"]);
}

#[test]
fn test_subsections_have_no_children() {
    let outline = build_outline(two_section_document().sources()).unwrap();
    for section in outline.sections() {
        for child in &section.children {
            assert!(child.children.is_empty(), "{} has children", child.id);
        }
    }
}

#[test]
fn test_iter_is_document_order() {
    let outline = build_outline(two_section_document().sources()).unwrap();
    let ids: Vec<_> = outline.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, ["h1", "h2", "h3", "h4", "h5"]);
    assert_eq!(outline.len(), 5);
}

#[test]
fn test_empty_document() {
    let outline = build_outline(Vec::new()).unwrap();
    assert!(outline.is_empty());
    assert_eq!(outline.len(), 0);
    assert_eq!(outline.iter().count(), 0);
}

#[test]
fn test_sections_only() {
    let doc = DocumentBuilder::new()
        .section("a", "A")
        .section("b", "B")
        .section("c", "C");
    let outline = build_outline(doc.sources()).unwrap();
    assert_eq!(outline.sections().len(), 3);
    assert!(outline.sections().iter().all(|s| s.children.is_empty()));
}

#[test]
fn test_outline_serializes_as_nested_json() {
    let doc = DocumentBuilder::new()
        .section("a", "A")
        .subsection("a1", "A one");
    let outline = build_outline(doc.sources()).unwrap();
    let json = serde_json::to_value(&outline).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": "a", "text": "A", "children": [{"id": "a1", "text": "A one"}]}
        ])
    );
}

// =============================================================================
// PRECONDITION VIOLATIONS
// =============================================================================

#[test]
fn test_leading_subsection_is_orphan() {
    let doc = DocumentBuilder::new()
        .subsection("early", "Too early")
        .section("a", "A");
    match build_outline(doc.sources()) {
        Err(TocError::OrphanSubsection { id }) => assert_eq!(id, "early"),
        other => panic!("expected OrphanSubsection, got {other:?}"),
    }
}

#[test_case(""; "empty id")]
#[test_case("   "; "blank id")]
fn test_missing_id(id: &str) {
    let sources = vec![HeadingSource::section(id, "Untitled anchor")];
    match build_outline(sources) {
        Err(TocError::MissingId { text }) => assert_eq!(text, "Untitled anchor"),
        other => panic!("expected MissingId, got {other:?}"),
    }
}

#[test_case("a"; "section id reused")]
#[test_case("a1"; "subsection id reused")]
fn test_duplicate_id(reused: &str) {
    let doc = DocumentBuilder::new()
        .section("a", "A")
        .subsection("a1", "A one")
        .section(reused, "B");
    match build_outline(doc.sources()) {
        Err(TocError::DuplicateId { id }) => assert_eq!(id, reused),
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn test_id_kept_as_written() {
    let sources = vec![HeadingSource::section(" padded ", "Padded")];
    let outline = build_outline(sources).unwrap();
    let heading = &outline.sections()[0];
    assert_eq!(heading.id, " padded ");
    assert_eq!(heading.href(), "# padded ");
}
