// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flowdeck_virtual_window --heading-base-level=0

//! Flowdeck Virtual Window: windowing math for long, fixed-row-height lists.
//!
//! This crate provides a small, renderer-agnostic core for the virtualized
//! list views of a traffic-inspection console (flow table, event log). The
//! views show an ordered list of `len` rows inside a scrollable viewport, but
//! only materialize the rows that can actually be seen; the remaining vertical
//! space is occupied by empty spacer elements so scrollbar behavior matches a
//! fully rendered list.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for heights,
//!   extents, and scroll offsets.
//! - [`RowGeometry`]: the fixed per-view row metrics (row height, an optional
//!   minimum row height used for the visible-row estimate, and the height of
//!   a pinned header overlay).
//! - [`compute_window`]: maps a scroll offset and viewport extent to the
//!   contiguous index window `[start, stop)` that must be materialized.
//! - [`compute_placeholders`]: sizes the spacers above and below the window,
//!   including the zero-height stripe spacer that keeps zebra striping in
//!   phase.
//! - [`materialize_window`]: clamps the window to the item list and returns
//!   the sub-slice handed to a presentation layer.
//! - [`scroll_offset_for_row`]: the scroll adjustment that brings a given row
//!   fully into view underneath a pinned header.
//!
//! This crate deliberately does **not** know about widgets, DOM nodes, or any
//! particular UI framework, and it does not own the item list. Hosts are
//! responsible for feeding in scroll/resize measurements and the current item
//! count, and for rendering `[start, stop)` plus the two spacers. The
//! stateful side of that contract lives in `flowdeck_view`.
//!
//! ## Minimal example
//!
//! ```rust
//! use flowdeck_virtual_window::{RowGeometry, compute_placeholders, compute_window};
//!
//! // 100 rows, each 32 logical pixels tall, seen through a 320px viewport.
//! let geometry = RowGeometry::new(32.0_f64);
//! let window = compute_window(0.0, 320.0, &geometry);
//! assert_eq!((window.start, window.stop), (0, 10));
//!
//! let placeholders = compute_placeholders(window, 100, &geometry);
//! assert_eq!(placeholders.top_extent(), 0.0);
//! assert_eq!(placeholders.bottom, 90.0 * 32.0);
//! ```
//!
//! ## The visible-row estimate
//!
//! When a view's rows can render shorter than `row_height` (the event log
//! renders wrapped messages at a smaller minimum height), the number of
//! visible rows is estimated with the *minimum* row height. That estimate
//! intentionally overfetches so the viewport stays covered even when every
//! rendered row turns out taller than the minimum. Placeholder heights always
//! use the nominal `row_height`; this is a known approximation for
//! fixed-height rows, not a variable-height virtualization scheme.
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite and non-negative;
//! non-finite or negative measurements are treated as zero. This crate is
//! `no_std`.

#![no_std]

mod geometry;
mod placeholder;
mod scalar;
mod scroll;
mod window;

pub use geometry::RowGeometry;
pub use placeholder::{PlaceholderLayout, compute_placeholders};
pub use scalar::Scalar;
pub use scroll::scroll_offset_for_row;
pub use window::{Window, compute_window, materialize_window};
