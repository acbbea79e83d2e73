//! Heading extraction and structuring.
//!
//! Turns the flat, document-ordered list of section/subsection headings into
//! a forest of depth two: each section owns the subsections that follow it.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::TocConfig;
use crate::error::{Result, TocError};

/// The two heading levels the navigation recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    Section,
    Subsection,
}

impl HeadingLevel {
    /// Map an element tag name to a heading level using the configured tags.
    ///
    /// Tags are compared case-insensitively; unrelated tags return `None`.
    pub fn from_tag(tag: &str, config: &TocConfig) -> Option<Self> {
        if tag.eq_ignore_ascii_case(&config.section_tag) {
            Some(Self::Section)
        } else if tag.eq_ignore_ascii_case(&config.subsection_tag) {
            Some(Self::Subsection)
        } else {
            None
        }
    }
}

/// A heading as read from the document, before structuring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSource {
    pub id: String,
    pub level: HeadingLevel,
    pub text: String,
}

impl HeadingSource {
    pub fn new(id: impl Into<String>, level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level,
            text: text.into(),
        }
    }

    pub fn section(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, HeadingLevel::Section, text)
    }

    pub fn subsection(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, HeadingLevel::Subsection, text)
    }
}

/// A structured heading. Only sections have children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Heading>,
}

impl Heading {
    fn leaf(id: String, text: String) -> Self {
        Self {
            id,
            text,
            children: Vec::new(),
        }
    }

    /// Fragment link pointing at this heading.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Ordered sections of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    sections: Vec<Heading>,
}

impl Outline {
    pub fn sections(&self) -> &[Heading] {
        &self.sections
    }

    /// Every heading, sections and subsections, in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Heading> + '_ {
        self.sections
            .iter()
            .flat_map(|section| std::iter::once(section).chain(section.children.iter()))
    }

    /// Total number of headings across both levels.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| 1 + s.children.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Collapse runs of whitespace and trim, the way heading text renders.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Group subsections under the section that precedes them.
///
/// # Errors
/// - `OrphanSubsection` if a subsection comes before any section
/// - `MissingId` if a heading has an empty or blank id
/// - `DuplicateId` if two headings share an id
pub fn build_outline<I>(sources: I) -> Result<Outline>
where
    I: IntoIterator<Item = HeadingSource>,
{
    let mut sections: Vec<Heading> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for source in sources {
        let text = normalize_text(&source.text);
        let id = source.id;
        if id.trim().is_empty() {
            return Err(TocError::MissingId { text });
        }
        if !seen.insert(id.clone()) {
            return Err(TocError::DuplicateId { id });
        }

        let heading = Heading::leaf(id, text);
        match source.level {
            HeadingLevel::Section => sections.push(heading),
            HeadingLevel::Subsection => match sections.last_mut() {
                Some(parent) => parent.children.push(heading),
                None => return Err(TocError::OrphanSubsection { id: heading.id }),
            },
        }
    }

    tracing::debug!(sections = sections.len(), "built heading outline");
    Ok(Outline { sections })
}
