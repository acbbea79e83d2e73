//! `TocView` - the browser entry point.
//!
//! This module provides the WASM-exported `TocView` that runs the pipeline
//! once the document is ready:
//! - Collecting headings and structuring them into an outline
//! - Rendering the navigation panel and inserting it before the main content
//! - Measuring scroll ranges and highlighting the visible section (when
//!   `trackScroll` is on)
//!
//! The scroll listener is registered automatically; no JavaScript wiring is
//! required beyond calling `mount` or `mount_when_ready`.

mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::TocConfig;
use crate::dom::{self, NavEntry};
use crate::error::{Result, TocError};
use crate::highlight::Highlighter;
use crate::nav::NavModel;
use crate::outline::{build_outline, Outline};

/// State shared between `TocView` and its scroll listener.
pub(crate) struct SharedState {
    pub(crate) config: TocConfig,
    pub(crate) outline: Outline,
    pub(crate) entries: Vec<NavEntry>,
    /// Present only while scroll tracking is on.
    pub(crate) highlighter: Option<Highlighter>,
}

/// Read a `TocConfig` from a JS object; `undefined`/`null` mean defaults.
fn config_from_js(value: JsValue) -> Result<TocConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(TocConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| TocError::Config(e.to_string()))
}

/// Report a setup failure on the console. The panel simply does not appear.
fn report(error: &TocError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("tocnav: {error}")));
}

/// The mounted navigation panel exported to JavaScript
#[wasm_bindgen]
pub struct TocView {
    state: Rc<RefCell<SharedState>>,
    panel: Element,
    scroll_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl TocView {
    /// Build the panel now and, if configured, start highlighting.
    ///
    /// # Errors
    /// Fails when the config is invalid, the headings are malformed, the
    /// main-content container is missing or a heading cannot be measured.
    pub fn mount(config: JsValue) -> std::result::Result<TocView, JsValue> {
        console_error_panic_hook::set_once();
        let config = config_from_js(config).inspect_err(report)?;
        Ok(Self::mount_with(config).inspect_err(report)?)
    }

    /// Recompute ranges from the current layout and re-highlight.
    ///
    /// Ranges are measured once at mount; call this after the page resizes
    /// or its content changes.
    pub fn remeasure(&mut self) -> std::result::Result<(), JsValue> {
        Ok(Self::remeasure_state(&self.state)?)
    }

    /// Id of the heading whose link is currently active.
    #[wasm_bindgen(getter)]
    pub fn active_id(&self) -> Option<String> {
        let s = self.state.borrow();
        let active = s.highlighter.as_ref()?.active()?;
        s.outline.iter().nth(active).map(|h| h.id.clone())
    }

    /// Number of headings (and links) in the panel.
    #[wasm_bindgen(getter)]
    pub fn heading_count(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Stop highlighting and remove the panel from the document.
    pub fn detach(&mut self) {
        self.stop_tracking();
        self.panel.remove();
    }
}

impl TocView {
    /// Run the pipeline: extract, structure, render, insert, then index.
    ///
    /// Offsets are measured only after the panel is in the document, since
    /// inserting it shifts everything below.
    ///
    /// # Errors
    /// Returns the first pipeline error; nothing is retried.
    pub fn mount_with(config: TocConfig) -> Result<TocView> {
        config.validate()?;
        let window = web_sys::window().ok_or_else(|| TocError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| TocError::Dom("no document".to_string()))?;

        let sources = dom::collect_headings(&document, &config)?;
        let outline = build_outline(sources)?;
        let model = NavModel::from_outline(&outline);
        let (fragment, panel) = dom::render_panel(&document, &model, &config)?;
        dom::insert_before_container(&document, &fragment, &config.container_selector)?;
        tracing::debug!(links = panel.entries.len(), "navigation panel inserted");

        let track_scroll = config.track_scroll;
        let state = Rc::new(RefCell::new(SharedState {
            config,
            outline,
            entries: panel.entries,
            highlighter: None,
        }));
        let mut view = TocView {
            state,
            panel: panel.element,
            scroll_closure: None,
        };
        if track_scroll {
            view.start_tracking(&window)?;
        }
        Ok(view)
    }
}

/// Mount the panel once the document has loaded.
///
/// Runs immediately when the document is already parsed, otherwise on
/// `DOMContentLoaded`. The mounted view lives as long as the page.
///
/// # Errors
/// Returns config errors immediately; pipeline errors are reported on the
/// console.
#[wasm_bindgen]
pub fn mount_when_ready(config: JsValue) -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = config_from_js(config).inspect_err(report)?;
    config.validate().inspect_err(report)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("tocnav: no document"))?;

    let mount = move || match TocView::mount_with(config) {
        Ok(view) => std::mem::forget(view), // Page-lifetime listener
        Err(e) => report(&e),
    };

    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(mount);
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        mount();
    }
    Ok(())
}
