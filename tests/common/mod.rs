//! Common test utilities and assertion helpers.
//!
//! Measurement stubs, an in-memory link marker and the partition check used by
//! the range and highlight tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

// Re-export fixtures for convenience
pub use super::fixtures::*;

use std::collections::HashMap;

use tocnav::{LinkMarker, RangeIndex, Result, TocError};

/// Build a measure function from a fixed id → offset table.
pub fn measure_from<'a>(offsets: &'a [(&'a str, f64)]) -> impl FnMut(&str) -> Result<f64> + 'a {
    let table: HashMap<&str, f64> = offsets.iter().copied().collect();
    move |id: &str| {
        table
            .get(id)
            .copied()
            .ok_or_else(|| TocError::MissingHeading { id: id.to_string() })
    }
}

/// Records the last state written for every link and how many writes happened.
#[derive(Debug, Default)]
pub struct MarkerLog {
    pub active: Vec<bool>,
    pub writes: usize,
}

impl MarkerLog {
    pub fn new(links: usize) -> Self {
        Self {
            active: vec![false; links],
            writes: 0,
        }
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }
}

impl LinkMarker for MarkerLog {
    fn set_active(&mut self, index: usize, active: bool) {
        self.writes += 1;
        if let Some(slot) = self.active.get_mut(index) {
            *slot = active;
        }
    }
}

/// Assert the ranges chain from 0 to infinity with no gaps or overlaps.
pub fn assert_partition(index: &RangeIndex) {
    let ranges = index.ranges();
    if ranges.is_empty() {
        return;
    }
    assert_eq!(ranges[0].from, 0.0, "first range must start at 0");
    for pair in ranges.windows(2) {
        assert_eq!(
            pair[0].to, pair[1].from,
            "ranges must be contiguous: {:?} then {:?}",
            pair[0], pair[1]
        );
        assert!(pair[0].from <= pair[0].to, "inverted range {:?}", pair[0]);
    }
    assert_eq!(
        ranges[ranges.len() - 1].to,
        f64::INFINITY,
        "last range must be unbounded"
    );
}
