//! Configuration for the navigation pipeline.
//!
//! The same config drives both the static panel (CLI, `track_scroll = false`)
//! and the scroll-tracking browser panel. From JavaScript it is passed as a
//! plain object with camelCase keys; missing keys take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TocError};

/// Tag name of section (top-level) headings.
pub const DEFAULT_SECTION_TAG: &str = "h2";
/// Tag name of subsection (child) headings.
pub const DEFAULT_SUBSECTION_TAG: &str = "h3";
/// Selector of the main-content container the panel is inserted before.
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".main";
/// Class put on the panel container.
pub const DEFAULT_PANEL_CLASS: &str = "table-of-contents";
/// Class toggled on the link of the visible section.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
/// Accessible label of the panel.
pub const DEFAULT_LABEL: &str = "Table of contents";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocConfig {
    pub section_tag: String,
    pub subsection_tag: String,
    pub container_selector: String,
    pub panel_class: String,
    pub active_class: String,
    pub label: String,
    /// Pixels subtracted from the scroll position before lookup, for pages
    /// with a fixed header bar.
    pub top_offset: f64,
    /// Measure ranges and highlight the visible section while scrolling.
    pub track_scroll: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            section_tag: DEFAULT_SECTION_TAG.to_string(),
            subsection_tag: DEFAULT_SUBSECTION_TAG.to_string(),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            panel_class: DEFAULT_PANEL_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            label: DEFAULT_LABEL.to_string(),
            top_offset: 0.0,
            track_scroll: true,
        }
    }
}

impl TocConfig {
    /// Static variant: render the panel but never track scrolling.
    #[must_use]
    pub fn static_panel() -> Self {
        Self {
            track_scroll: false,
            ..Self::default()
        }
    }

    /// Check the config before any DOM work happens.
    ///
    /// # Errors
    /// Returns `TocError::Config` naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("sectionTag", &self.section_tag),
            ("subsectionTag", &self.subsection_tag),
            ("containerSelector", &self.container_selector),
            ("panelClass", &self.panel_class),
            ("activeClass", &self.active_class),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(TocError::Config(format!("{name} must not be empty")));
            }
        }
        for (name, value) in [
            ("panelClass", &self.panel_class),
            ("activeClass", &self.active_class),
        ] {
            if value.chars().any(char::is_whitespace) {
                return Err(TocError::Config(format!(
                    "{name} must be a single class name, got '{value}'"
                )));
            }
        }
        if self.section_tag.eq_ignore_ascii_case(&self.subsection_tag) {
            return Err(TocError::Config(format!(
                "sectionTag and subsectionTag are both '{}'",
                self.section_tag
            )));
        }
        if !self.top_offset.is_finite() {
            return Err(TocError::Config("topOffset must be finite".to_string()));
        }
        Ok(())
    }

    /// CSS selector matching both heading levels, e.g. `"h2, h3"`.
    #[must_use]
    pub fn heading_selector(&self) -> String {
        format!("{}, {}", self.section_tag, self.subsection_tag)
    }
}
