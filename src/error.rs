//! Structured error types for tocnav.
//!
//! Every failure aborts the setup pipeline at the point it occurs; nothing
//! here is retried.

/// All errors that can occur while building or tracking the navigation panel.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    /// A subsection heading appeared before any section heading.
    #[error("Subsection heading '{id}' has no preceding section")]
    OrphanSubsection { id: String },

    /// A heading carries no identifier, so it cannot be an anchor target.
    #[error("Heading '{text}' has no id attribute")]
    MissingId { text: String },

    /// Two headings share one identifier.
    #[error("Duplicate heading id '{id}'")]
    DuplicateId { id: String },

    /// No element matches the main-content container selector.
    #[error("No element matches container selector '{selector}'")]
    MissingContainer { selector: String },

    /// A heading could not be found again while measuring offsets.
    #[error("Heading '{id}' not found in document")]
    MissingHeading { id: String },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Markup scanning error from quick-xml.
    #[error("Markup parsing: {0}")]
    Markup(#[from] quick_xml::Error),

    /// DOM operation failure.
    #[error("DOM error: {0}")]
    Dom(String),

    /// JSON serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TocError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for TocError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TocError> for wasm_bindgen::JsValue {
    fn from(e: TocError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
