//! Test fixtures for building documents with known headings.
//!
//! `DocumentBuilder` produces both the heading sources (as the DOM layer would
//! read them) and equivalent XHTML markup (as the CLI scanner reads it).
//!
//! # Example
//!
//! ```rust,ignore
//! let doc = DocumentBuilder::new()
//!     .section("intro", "Introduction")
//!     .subsection("install", "Installing")
//!     .section("usage", "Usage");
//!
//! let outline = tocnav::build_outline(doc.sources()).unwrap();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use tocnav::{HeadingLevel, HeadingSource};

#[derive(Default, Clone)]
pub struct DocumentBuilder {
    headings: Vec<HeadingSource>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, id: &str, text: &str) -> Self {
        self.headings.push(HeadingSource::section(id, text));
        self
    }

    pub fn subsection(mut self, id: &str, text: &str) -> Self {
        self.headings.push(HeadingSource::subsection(id, text));
        self
    }

    pub fn sources(&self) -> Vec<HeadingSource> {
        self.headings.clone()
    }

    /// Minimal XHTML page: headings each followed by a paragraph, inside a
    /// `.main` container.
    pub fn markup(&self) -> String {
        let mut body = String::new();
        for h in &self.headings {
            let tag = match h.level {
                HeadingLevel::Section => "h2",
                HeadingLevel::Subsection => "h3",
            };
            body.push_str(&format!(
                "<{tag} id=\"{}\">{}</{tag}>\n<p>Body of {}.</p>\n",
                h.id, h.text, h.id
            ));
        }
        format!(
            "<!DOCTYPE html>\n<html><head><title>Doc</title></head>\
             <body><h1>Doc</h1><div class=\"main\">\n{body}</div></body></html>"
        )
    }
}

/// The five-heading document: two sections, three subsections.
pub fn two_section_document() -> DocumentBuilder {
    DocumentBuilder::new()
        .section("h1", "First")
        .subsection("h2", "First A")
        .subsection("h3", "First B")
        .section("h4", "Second")
        .subsection("h5", "Second A")
}

/// Sections at 0 and 500, the first with subsections at 100 and 200.
pub fn measured_document() -> (DocumentBuilder, Vec<(&'static str, f64)>) {
    let doc = DocumentBuilder::new()
        .section("top-1", "Top one")
        .subsection("child-1", "Child one")
        .subsection("child-2", "Child two")
        .section("top-2", "Top two");
    let offsets = vec![
        ("top-1", 0.0),
        ("child-1", 100.0),
        ("child-2", 200.0),
        ("top-2", 500.0),
    ];
    (doc, offsets)
}
