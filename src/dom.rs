//! Browser DOM access: heading collection, panel materialization, offset
//! measurement and link class toggling.
//!
//! Every function here is a thin adapter between `web_sys` and the pure
//! pipeline in `outline`, `nav`, `ranges` and `highlight`.

use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, Element, Node, Window};

use crate::config::TocConfig;
use crate::error::{Result, TocError};
use crate::highlight::LinkMarker;
use crate::nav::{NavItem, NavModel};
use crate::outline::{HeadingLevel, HeadingSource};

/// A heading's link and list item, created by `render_panel`.
pub struct NavEntry {
    pub id: String,
    pub link: Element,
    pub list_item: Element,
}

/// The panel container and one entry per heading in document order.
pub struct NavPanel {
    pub element: Element,
    pub entries: Vec<NavEntry>,
}

/// Read section/subsection headings from the document in document order.
///
/// # Errors
/// Returns `TocError::Dom` if the heading selector is rejected.
pub fn collect_headings(document: &Document, config: &TocConfig) -> Result<Vec<HeadingSource>> {
    let nodes = document.query_selector_all(&config.heading_selector())?;
    let mut headings = Vec::new();
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(level) = HeadingLevel::from_tag(&element.local_name(), config) else {
            continue;
        };
        let text = element.text_content().unwrap_or_default();
        headings.push(HeadingSource::new(element.id(), level, text));
    }
    Ok(headings)
}

/// Build the panel in a detached fragment.
///
/// The fragment holds `<div class=panel_class><ul>..</ul></div>`; each item is
/// an `li` with an `a` and, for sections with subsections, a nested `ul`.
///
/// # Errors
/// Returns `TocError::Dom` if an element cannot be created or appended.
pub fn render_panel(
    document: &Document,
    model: &NavModel,
    config: &TocConfig,
) -> Result<(DocumentFragment, NavPanel)> {
    let fragment = document.create_document_fragment();
    let element = document.create_element("div")?;
    element.class_list().add_1(&config.panel_class)?;
    element.set_attribute("aria-label", &config.label)?;
    let list = document.create_element("ul")?;
    element.append_child(&list)?;
    fragment.append_child(&element)?;

    let mut entries = Vec::with_capacity(model.links().len());
    append_items(document, &list, &model.items, &mut entries)?;
    Ok((fragment, NavPanel { element, entries }))
}

fn append_items(
    document: &Document,
    list: &Element,
    items: &[NavItem],
    entries: &mut Vec<NavEntry>,
) -> Result<()> {
    for item in items {
        let list_item = document.create_element("li")?;
        let link = document.create_element("a")?;
        link.set_attribute("href", &item.href)?;
        link.set_text_content(Some(&item.label));
        list_item.append_child(&link)?;
        entries.push(NavEntry {
            id: item.id.clone(),
            link,
            list_item: list_item.clone(),
        });
        if !item.children.is_empty() {
            let inner = document.create_element("ul")?;
            list_item.append_child(&inner)?;
            append_items(document, &inner, &item.children, entries)?;
        }
        list.append_child(&list_item)?;
    }
    Ok(())
}

/// Insert the panel as the preceding sibling of the main-content container.
///
/// # Errors
/// - `MissingContainer` if nothing matches `selector`
/// - `Dom` if the container is detached or insertion fails
pub fn insert_before_container(
    document: &Document,
    fragment: &DocumentFragment,
    selector: &str,
) -> Result<()> {
    let container = document
        .query_selector(selector)?
        .ok_or_else(|| TocError::MissingContainer {
            selector: selector.to_string(),
        })?;
    let parent = container
        .parent_node()
        .ok_or_else(|| TocError::Dom(format!("container '{selector}' has no parent")))?;
    let anchor: &Node = &container;
    parent.insert_before(fragment, Some(anchor))?;
    Ok(())
}

/// Current vertical scroll position of the window.
pub fn scroll_position(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Document-relative top offset of the element with `id`.
///
/// # Errors
/// Returns `MissingHeading` if no element has that id.
pub fn measure_offset(window: &Window, document: &Document, id: &str) -> Result<f64> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| TocError::MissingHeading { id: id.to_string() })?;
    Ok(element.get_bounding_client_rect().top() + scroll_position(window))
}

/// Toggles a CSS class on the entries' links.
pub struct ClassMarker<'a> {
    entries: &'a [NavEntry],
    class: &'a str,
}

impl<'a> ClassMarker<'a> {
    pub fn new(entries: &'a [NavEntry], class: &'a str) -> Self {
        Self { entries, class }
    }
}

impl LinkMarker for ClassMarker<'_> {
    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(entry) = self.entries.get(index) {
            if let Err(e) = entry.link.class_list().toggle_with_force(self.class, active) {
                tracing::warn!(id = %entry.id, error = ?e, "failed to toggle link class");
            }
        }
    }
}
