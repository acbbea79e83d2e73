//! Navigation model and static markup.
//!
//! `NavModel` mirrors the outline as a list of anchor links. It is the shape
//! both renderers share: `to_html` writes it as markup for the static panel,
//! and the DOM renderer in `dom` materializes the same tree as elements.

use quick_xml::escape::escape;
use serde::Serialize;

use crate::config::TocConfig;
use crate::outline::{Heading, Outline};

/// One link in the panel, with the links of its subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: String,
    pub href: String,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    fn from_heading(heading: &Heading) -> Self {
        Self {
            id: heading.id.clone(),
            href: heading.href(),
            label: heading.text.clone(),
            children: heading.children.iter().map(Self::from_heading).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavModel {
    pub items: Vec<NavItem>,
}

impl NavModel {
    pub fn from_outline(outline: &Outline) -> Self {
        Self {
            items: outline.sections().iter().map(NavItem::from_heading).collect(),
        }
    }

    /// All links in document order.
    pub fn links(&self) -> Vec<&NavItem> {
        let mut out = Vec::new();
        for item in &self.items {
            out.push(item);
            out.extend(item.children.iter());
        }
        out
    }

    /// Render the panel as markup:
    /// `<div class=".."><ul><li><a href="#id">label</a><ul>..</ul></li></ul></div>`.
    pub fn to_html(&self, config: &TocConfig) -> String {
        let mut html = String::new();
        html.push_str("<div class=\"");
        html.push_str(&escape(config.panel_class.as_str()));
        html.push_str("\" aria-label=\"");
        html.push_str(&escape(config.label.as_str()));
        html.push_str("\">");
        write_list(&mut html, &self.items);
        html.push_str("</div>");
        html
    }
}

fn write_list(html: &mut String, items: &[NavItem]) {
    html.push_str("<ul>");
    for item in items {
        html.push_str("<li><a href=\"");
        html.push_str(&escape(item.href.as_str()));
        html.push_str("\">");
        html.push_str(&escape(item.label.as_str()));
        html.push_str("</a>");
        if !item.children.is_empty() {
            write_list(html, &item.children);
        }
        html.push_str("</li>");
    }
    html.push_str("</ul>");
}
