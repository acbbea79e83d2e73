//! Scroll highlighting.
//!
//! The highlighter owns an immutable `RangeIndex` and, for a scroll position,
//! marks the link whose range contains it and unmarks every other link. How a
//! link is marked is up to the `LinkMarker`; in the browser it toggles a CSS
//! class.

use crate::ranges::RangeIndex;

/// Marks links active or inactive by their document-order index.
pub trait LinkMarker {
    fn set_active(&mut self, index: usize, active: bool);
}

impl LinkMarker for Vec<bool> {
    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.get_mut(index) {
            *slot = active;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    index: RangeIndex,
    top_offset: f64,
    active: Option<usize>,
}

impl Highlighter {
    pub fn new(index: RangeIndex, top_offset: f64) -> Self {
        Self {
            index,
            top_offset,
            active: None,
        }
    }

    pub fn index(&self) -> &RangeIndex {
        &self.index
    }

    /// Swap in freshly measured ranges. The active link is re-evaluated on the
    /// next `apply`.
    pub fn replace_index(&mut self, index: RangeIndex) {
        self.index = index;
    }

    /// Index of the link marked by the last `apply`.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Link index whose range contains `scroll_y`, after the top offset.
    pub fn locate(&self, scroll_y: f64) -> Option<usize> {
        self.index.position(scroll_y - self.top_offset)
    }

    /// Re-evaluate every range against `scroll_y` and update all links.
    pub fn apply<M: LinkMarker + ?Sized>(&mut self, scroll_y: f64, marker: &mut M) -> Option<usize> {
        let position = scroll_y - self.top_offset;
        let mut found = None;
        for (i, range) in self.index.ranges().iter().enumerate() {
            let hit = found.is_none() && range.contains(position);
            if hit {
                found = Some(i);
            }
            marker.set_active(i, hit);
        }
        if found != self.active {
            tracing::debug!(from = ?self.active, to = ?found, "active link changed");
        }
        self.active = found;
        found
    }
}
