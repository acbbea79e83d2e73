//! Heading scanner for (X)HTML markup.
//!
//! Reads a document with quick-xml in lenient mode and returns the section and
//! subsection headings in document order. Used by the CLI to produce the
//! static panel without a browser.

use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::config::TocConfig;
use crate::error::Result;
use crate::outline::{HeadingLevel, HeadingSource};

/// Extract the `id` attribute, tolerating HTML-style unquoted values.
fn attr_id(e: &BytesStart) -> Option<String> {
    for attr in e.html_attributes().flatten() {
        if attr.key.local_name().as_ref() == b"id" {
            return match attr.unescape_value_with(resolve_html5_entity) {
                Ok(value) => Some(value.into_owned()),
                Err(_) => std::str::from_utf8(&attr.value).ok().map(str::to_string),
            };
        }
    }
    None
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// Heading being read: its tag, id, level and text gathered so far.
struct OpenHeading {
    tag: String,
    id: String,
    level: HeadingLevel,
    text: String,
}

/// Scan markup for headings of the configured section/subsection tags.
///
/// Text inside nested inline elements (`<code>`, `<em>`, links) is included.
/// Headings without an `id` are returned with an empty id so that outline
/// building can report them.
///
/// # Errors
/// Returns `TocError::Markup` if the markup cannot be tokenized.
pub fn scan_headings(markup: &str, config: &TocConfig) -> Result<Vec<HeadingSource>> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().check_end_names = false;
    reader.config_mut().expand_empty_elements = false;

    let mut headings = Vec::new();
    let mut open: Option<OpenHeading> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                if open.is_none() {
                    let tag = local_name(e);
                    if let Some(level) = HeadingLevel::from_tag(&tag, config) {
                        open = Some(OpenHeading {
                            tag,
                            id: attr_id(e).unwrap_or_default(),
                            level,
                            text: String::new(),
                        });
                    }
                }
            }
            Event::End(ref e) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if open
                    .as_ref()
                    .is_some_and(|h| h.tag.eq_ignore_ascii_case(&tag))
                {
                    if let Some(h) = open.take() {
                        headings.push(HeadingSource::new(h.id, h.level, h.text));
                    }
                }
            }
            Event::Text(ref e) => {
                if let Some(h) = open.as_mut() {
                    match e.unescape_with(resolve_html5_entity) {
                        Ok(text) => h.text.push_str(&text),
                        // Unknown entity: keep the raw text
                        Err(_) => h.text.push_str(&String::from_utf8_lossy(e)),
                    }
                }
            }
            Event::CData(ref e) => {
                if let Some(h) = open.as_mut() {
                    h.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    tracing::debug!(headings = headings.len(), "scanned markup headings");
    Ok(headings)
}
