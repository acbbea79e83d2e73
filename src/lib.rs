//! tocnav - in-page table of contents for the web
//!
//! Builds a navigation panel from a document's section and subsection
//! headings and highlights the link of the section in view:
//! - Headings grouped two levels deep (`h2` sections, `h3` subsections)
//! - Panel inserted right before the main-content container
//! - Scroll tracking as an optional stage of the same pipeline
//! - Static panel markup for pre-rendering via the `tocnav` CLI
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { mount_when_ready } from 'tocnav';
//! await init();
//! mount_when_ready({ containerSelector: '.main', topOffset: 48 });
//! ```

// Pipeline modules
pub mod config;
pub mod error;
pub mod highlight;
pub mod nav;
pub mod outline;
pub mod ranges;
pub mod source;

// Browser modules (DOM)
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::{mount_when_ready, TocView};

pub use config::TocConfig;
pub use error::{Result, TocError};
pub use highlight::{Highlighter, LinkMarker};
pub use nav::{NavItem, NavModel};
pub use outline::{build_outline, Heading, HeadingLevel, HeadingSource, Outline};
pub use ranges::{RangeIndex, ScrollRange};

/// Scan markup for headings and build their outline.
///
/// # Errors
/// Returns an error if the markup cannot be tokenized or the headings are
/// malformed.
pub fn outline_from_markup(markup: &str, config: &TocConfig) -> Result<Outline> {
    build_outline(source::scan_headings(markup, config)?)
}

/// Parse (X)HTML markup and return its heading outline as a JSON string
///
/// # Errors
/// Returns an error if the markup or its heading structure is invalid.
#[wasm_bindgen]
pub fn outline_json(markup: &str) -> std::result::Result<String, JsValue> {
    let outline = outline_from_markup(markup, &TocConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&outline)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
