//! Scroll range indexing.
//!
//! Each heading owns the half-open interval `[from, to)` of vertical offsets
//! during which its section counts as the visible one. Ranges are built in
//! document order and chained end to start, so together they partition
//! `[0, +inf)`.

use serde::Serialize;

use crate::error::Result;
use crate::outline::Outline;

/// Half-open vertical offset interval `[from, to)`. `to` may be infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRange {
    pub from: f64,
    pub to: f64,
}

impl ScrollRange {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, offset: f64) -> bool {
        self.from <= offset && offset < self.to
    }

    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }
}

/// One range per heading, aligned with `Outline::iter` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RangeIndex {
    ranges: Vec<ScrollRange>,
}

impl RangeIndex {
    /// Measure every heading by id and chain the offsets into ranges.
    ///
    /// A section without subsections ends where the next section starts. A
    /// section with subsections ends at its first subsection, and each
    /// subsection ends at the next subsection or, for the last one, at the
    /// next section. The last heading's range is unbounded. Walking the
    /// headings in document order and ending each range at the next offset
    /// gives exactly that chain.
    ///
    /// The first range starts at 0 so positions above the first heading still
    /// resolve to it.
    ///
    /// # Errors
    /// Propagates the first error returned by `measure`.
    pub fn build<F>(outline: &Outline, mut measure: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<f64>,
    {
        let mut offsets = Vec::with_capacity(outline.len());
        for heading in outline.iter() {
            offsets.push((heading.id.as_str(), measure(&heading.id)?));
        }
        Ok(Self::from_offsets(&offsets))
    }

    /// Chain already-measured `(id, offset)` pairs, in document order.
    pub fn from_offsets(offsets: &[(&str, f64)]) -> Self {
        let mut ranges = Vec::with_capacity(offsets.len());
        let mut from = 0.0;
        for (i, &(id, _)) in offsets.iter().enumerate() {
            let to = offsets
                .get(i + 1)
                .map_or(f64::INFINITY, |&(_, next)| next.max(from));
            let range = ScrollRange::new(from, to);
            if range.is_empty() {
                tracing::warn!(id, from, "heading offset is above the previous heading");
            }
            ranges.push(range);
            from = to;
        }
        tracing::debug!(ranges = ranges.len(), "built scroll range index");
        Self { ranges }
    }

    pub fn ranges(&self) -> &[ScrollRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScrollRange> {
        self.ranges.get(index)
    }

    /// Index of the range containing `offset`, if any.
    ///
    /// Lower bounds are non-decreasing, so the candidate is the last range
    /// starting at or before `offset`. Negative offsets match nothing.
    pub fn position(&self, offset: f64) -> Option<usize> {
        let after = self.ranges.partition_point(|r| r.from <= offset);
        let candidate = after.checked_sub(1)?;
        // Empty ranges share their lower bound with the next non-empty one.
        self.ranges
            .get(..=candidate)?
            .iter()
            .rposition(|r| r.contains(offset))
    }
}
