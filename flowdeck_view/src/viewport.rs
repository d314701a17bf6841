// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sanitized viewport measurements.

use flowdeck_virtual_window::Scalar;

/// The scroll offset and visible extent of a scrollable viewport.
///
/// Created when a view mounts, updated on every scroll and resize
/// notification, and dropped with the view. Both fields are kept finite and
/// non-negative: hosts can report `NaN` or transient zero extents while a
/// view is detached or not yet measured, and those readings must clamp
/// rather than poison later derivations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportState<S: Scalar> {
    scroll_offset: S,
    extent: S,
}

impl<S: Scalar> Default for ViewportState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> ViewportState<S> {
    /// Creates an unmeasured viewport (offset and extent zero).
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_offset: S::zero(),
            extent: S::zero(),
        }
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        self.scroll_offset
    }

    /// Returns the current viewport extent.
    #[must_use]
    pub fn extent(&self) -> S {
        self.extent
    }

    /// Sets the scroll offset, sanitizing the measurement.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_scroll_offset(&mut self, offset: S) -> bool {
        let offset = offset.finite_or_zero().clamp_non_negative();
        let changed = offset != self.scroll_offset;
        self.scroll_offset = offset;
        changed
    }

    /// Sets the viewport extent, sanitizing the measurement.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_extent(&mut self, extent: S) -> bool {
        let extent = extent.finite_or_zero().clamp_non_negative();
        let changed = extent != self.extent;
        self.extent = extent;
        changed
    }
}
