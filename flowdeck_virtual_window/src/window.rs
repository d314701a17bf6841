// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The materialization window and its derivation from viewport measurements.

use core::ops::Range;

use crate::{RowGeometry, Scalar};

/// The contiguous index range `[start, stop)` a view must materialize.
///
/// A window is a pure derivation of the current scroll offset, viewport
/// extent, and row metrics; it is never stored independently of those inputs.
/// Its bounds are *not* clamped to the item count: after a bulk removal,
/// `start` may momentarily point past the end of the shrunk list until the
/// next recompute. Downstream consumers clamp, via
/// [`Window::clamp_to`] and [`compute_placeholders`](crate::compute_placeholders).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Window {
    /// Index of the first row to materialize.
    pub start: usize,
    /// One past the index of the last row to materialize.
    pub stop: usize,
}

impl Window {
    /// Returns the number of rows the window asks to materialize.
    ///
    /// This is an estimate; the materialized slice may be shorter when the
    /// window hangs past the end of the item list.
    #[must_use]
    pub fn len(self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    /// Returns `true` if the window materializes no rows.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.stop <= self.start
    }

    /// Clamps the window to a list of `len` items, yielding a valid slice range.
    #[must_use]
    pub fn clamp_to(self, len: usize) -> Range<usize> {
        let stop = self.stop.min(len);
        self.start.min(stop)..stop
    }
}

/// Computes the window for the given viewport measurements.
///
/// `start` is the first row whose extent reaches the scroll offset; the
/// number of rows past it is the viewport extent divided by the effective
/// minimum row height, rounded up. Using the minimum height overfetches when
/// rows can render shorter than nominal, which keeps the viewport covered.
///
/// Non-finite or negative measurements are treated as zero, so an unmeasured
/// viewport (extent `0`) yields an empty window rather than an error; hosts
/// recompute once real measurements arrive.
#[must_use]
pub fn compute_window<S: Scalar>(
    scroll_offset: S,
    viewport_extent: S,
    geometry: &RowGeometry<S>,
) -> Window {
    let offset = scroll_offset.finite_or_zero().clamp_non_negative();
    let extent = viewport_extent.finite_or_zero().clamp_non_negative();

    let start = (offset / geometry.row_height()).floor_to_isize().max(0) as usize;
    let rows_visible = (extent / geometry.row_height_min()).ceil_to_isize().max(0) as usize;

    Window {
        start,
        stop: start + rows_visible,
    }
}

/// Returns the sub-slice of `items` the window materializes.
///
/// The window is clamped to the slice bounds, so a stale window after a bulk
/// removal yields a short (possibly empty) slice instead of panicking. This
/// slice, together with the placeholder layout, is the only data handed to a
/// presentation layer.
#[must_use]
pub fn materialize_window<T>(window: Window, items: &[T]) -> &[T] {
    &items[window.clamp_to(items.len())]
}
