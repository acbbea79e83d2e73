//! Integration tests for tocnav.
//!
//! This module provides the shared test infrastructure:
//!
//! - `fixtures`: Builders for documents with known headings
//! - `common`: Measurement stubs, link markers and partition assertions
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use crate::common::{assert_partition, measure_from, measured_document};
//!
//! fn test_partition() {
//!     let (doc, offsets) = measured_document();
//!     let outline = tocnav::build_outline(doc.sources()).unwrap();
//!     let index = tocnav::RangeIndex::build(&outline, measure_from(&offsets)).unwrap();
//!     assert_partition(&index);
//! }
//! ```
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

pub mod common;
pub mod fixtures;
