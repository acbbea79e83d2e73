//! Scroll tracking for `TocView`.
//!
//! Includes range measurement, the window scroll listener and the highlight
//! pass it drives.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::{SharedState, TocView};
use crate::dom::{self, ClassMarker};
use crate::error::{Result, TocError};
use crate::highlight::{Highlighter, LinkMarker};
use crate::ranges::RangeIndex;

impl TocView {
    fn measure(window: &Window, s: &SharedState) -> Result<RangeIndex> {
        let document = window
            .document()
            .ok_or_else(|| TocError::Dom("no document".to_string()))?;
        RangeIndex::build(&s.outline, |id| dom::measure_offset(window, &document, id))
    }

    pub(crate) fn start_tracking(&mut self, window: &Window) -> Result<()> {
        {
            let mut s = self.state.borrow_mut();
            let index = Self::measure(window, &s)?;
            let top_offset = s.config.top_offset;
            s.highlighter = Some(Highlighter::new(index, top_offset));
        }
        Self::handle_scroll(&self.state);

        let weak_state = Rc::downgrade(&self.state);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(state) = weak_state.upgrade() {
                TocView::handle_scroll(&state);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        self.scroll_closure = Some(closure);
        Ok(())
    }

    pub(crate) fn stop_tracking(&mut self) {
        if let Some(closure) = self.scroll_closure.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
        }
        let mut s = self.state.borrow_mut();
        let SharedState {
            highlighter,
            entries,
            config,
            ..
        } = &mut *s;
        let count = entries.len();
        let mut marker = ClassMarker::new(entries, &config.active_class);
        for i in 0..count {
            marker.set_active(i, false);
        }
        *highlighter = None;
    }

    pub(crate) fn remeasure_state(state: &Rc<RefCell<SharedState>>) -> Result<()> {
        let Some(window) = web_sys::window() else {
            return Ok(());
        };
        {
            let mut s = state.borrow_mut();
            if s.highlighter.is_none() {
                return Ok(());
            }
            let index = Self::measure(&window, &s)?;
            if let Some(highlighter) = s.highlighter.as_mut() {
                highlighter.replace_index(index);
            }
        }
        Self::handle_scroll(state);
        Ok(())
    }

    /// Highlight the link of the section containing the current scroll position.
    pub(crate) fn handle_scroll(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let scroll_y = dom::scroll_position(&window);
        let mut s = state.borrow_mut();
        let SharedState {
            highlighter,
            entries,
            config,
            ..
        } = &mut *s;
        let Some(highlighter) = highlighter.as_mut() else {
            return;
        };
        let mut marker = ClassMarker::new(entries, &config.active_class);
        highlighter.apply(scroll_y, &mut marker);
    }
}
