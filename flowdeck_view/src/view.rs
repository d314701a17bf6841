// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The virtualized-view controller.

use core::ops::Range;

use flowdeck_virtual_window::{
    PlaceholderLayout, RowGeometry, Scalar, Window, compute_placeholders, compute_window,
    materialize_window, scroll_offset_for_row,
};

use crate::source::ViewportEvent;
use crate::viewport::ViewportState;

bitflags::bitflags! {
    /// What a [`VirtualView`] mutation actually changed.
    ///
    /// Hosts use these to decide whether anything needs re-rendering; an
    /// empty set means the notification was a no-op (same offset reported
    /// twice, a scroll that stayed within the current window's first row,
    /// and so on).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewChanges: u8 {
        /// The scroll offset moved.
        const SCROLL_OFFSET   = 0b0000_0001;
        /// The viewport extent changed.
        const VIEWPORT_EXTENT = 0b0000_0010;
        /// The item count changed.
        const LEN             = 0b0000_0100;
        /// The materialization window moved or resized.
        const WINDOW          = 0b0000_1000;
        /// The placeholder spacer layout changed.
        const PLACEHOLDERS    = 0b0001_0000;
    }
}

/// The windowed output handed to a presentation layer.
///
/// The layer renders the top spacers, then the items at `range`, then the
/// bottom spacer, inside its scrollable container.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowedView<S: Scalar> {
    /// Spacer layout around the materialized rows.
    pub placeholders: PlaceholderLayout<S>,
    /// The clamped index range of items to materialize.
    pub range: Range<usize>,
}

/// Controller for one virtualized list view.
///
/// Owns the view's [`RowGeometry`], [`ViewportState`], and item count, and
/// caches the latest derived [`Window`] and [`PlaceholderLayout`]. The caches
/// are pure derivations: every mutator recomputes them synchronously before
/// returning, so they can never disagree with the inputs. The item list
/// itself stays with the host's data store; the controller only tracks its
/// length and slices it on demand.
///
/// Mutators are invoked from the host's sequential event dispatch (scroll
/// and resize notifications, data-store change notifications); there is no
/// locking and no interior mutability.
#[derive(Clone, Debug)]
pub struct VirtualView<S: Scalar> {
    geometry: RowGeometry<S>,
    viewport: ViewportState<S>,
    len: usize,
    window: Window,
    placeholders: PlaceholderLayout<S>,
    anchor_epsilon: S,
}

impl<S: Scalar> VirtualView<S> {
    /// Creates a controller for an empty, unmeasured view.
    ///
    /// The tail-anchoring tolerance defaults to one coordinate unit; see
    /// [`VirtualView::set_anchor_epsilon`].
    #[must_use]
    pub fn new(geometry: RowGeometry<S>) -> Self {
        let window = Window::default();
        let placeholders = compute_placeholders(window, 0, &geometry);
        Self {
            geometry,
            viewport: ViewportState::new(),
            len: 0,
            window,
            placeholders,
            anchor_epsilon: S::from_usize(1),
        }
    }

    /// Returns the view's row metrics.
    #[must_use]
    pub fn geometry(&self) -> &RowGeometry<S> {
        &self.geometry
    }

    /// Returns the current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState<S> {
        &self.viewport
    }

    /// Returns the tracked item count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tracked item list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the cached materialization window.
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    /// Returns the cached placeholder layout.
    #[must_use]
    pub fn placeholders(&self) -> &PlaceholderLayout<S> {
        &self.placeholders
    }

    /// Bundles the placeholder layout and clamped index range for rendering.
    #[must_use]
    pub fn windowed_view(&self) -> WindowedView<S> {
        WindowedView {
            placeholders: self.placeholders.clone(),
            range: self.window.clamp_to(self.len),
        }
    }

    /// Returns the sub-slice of `items` the view materializes.
    ///
    /// The window is clamped to `items`, so a host whose list already shrunk
    /// ahead of the matching [`VirtualView::set_len`] notification still gets
    /// a valid (possibly short) slice.
    #[must_use]
    pub fn materialize<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        materialize_window(self.window, items)
    }

    /// Applies a scroll notification.
    pub fn set_scroll_offset(&mut self, offset: S) -> ViewChanges {
        let mut changes = ViewChanges::empty();
        if self.viewport.set_scroll_offset(offset) {
            changes |= ViewChanges::SCROLL_OFFSET;
        }
        changes | self.recompute()
    }

    /// Applies a resize notification.
    ///
    /// A transition from an unmeasured (zero-extent) viewport to a real
    /// measurement recomputes the window just like any other resize, which is
    /// what populates a view that mounted before it could be measured.
    pub fn set_viewport_extent(&mut self, extent: S) -> ViewChanges {
        let mut changes = ViewChanges::empty();
        if self.viewport.set_extent(extent) {
            changes |= ViewChanges::VIEWPORT_EXTENT;
        }
        changes | self.recompute()
    }

    /// Applies a data-store change notification (add/remove/reorder).
    ///
    /// This must be called even when no scroll occurred: removing rows below
    /// the fold shrinks the bottom placeholder, and a mass removal can leave
    /// the cached window pointing past the end of the list until the next
    /// scroll. Placeholder and slice clamping keep both cases safe.
    pub fn set_len(&mut self, len: usize) -> ViewChanges {
        let mut changes = ViewChanges::empty();
        if len != self.len {
            self.len = len;
            changes |= ViewChanges::LEN;
        }
        changes | self.recompute()
    }

    /// Dispatches a [`ViewportEvent`] to the matching mutator.
    pub fn handle_event(&mut self, event: ViewportEvent<S>) -> ViewChanges {
        match event {
            ViewportEvent::Scrolled(offset) => self.set_scroll_offset(offset),
            ViewportEvent::Resized(extent) => self.set_viewport_extent(extent),
            ViewportEvent::ItemsChanged(len) => self.set_len(len),
        }
    }

    /// Scrolls the minimum distance that brings `row_index` fully into view.
    ///
    /// Accounts for the pinned header configured in the row metrics. Does
    /// nothing when the row is already visible or `row_index` is out of
    /// range.
    pub fn scroll_row_into_view(&mut self, row_index: usize) -> ViewChanges {
        if row_index >= self.len {
            return ViewChanges::empty();
        }
        match scroll_offset_for_row(
            row_index,
            &self.geometry,
            self.viewport.scroll_offset(),
            self.viewport.extent(),
        ) {
            Some(offset) => self.set_scroll_offset(offset),
            None => ViewChanges::empty(),
        }
    }

    /// Returns the scroll offset that aligns the content tail with the
    /// viewport bottom (zero when the content fits entirely).
    #[must_use]
    pub fn tail_scroll_offset(&self) -> S {
        let total = self.geometry.total_extent(self.len);
        let extent = self.viewport.extent();
        if total <= extent {
            S::zero()
        } else {
            total - extent
        }
    }

    /// Returns `true` if the view is anchored to the tail.
    ///
    /// The check is asymmetric: offsets within the anchoring tolerance
    /// *below* the tail-aligned offset still count as anchored, so "near the
    /// bottom" behaves like "at the bottom". Append-heavy views query this
    /// before the item count grows and call [`VirtualView::scroll_to_tail`]
    /// afterwards to stay pinned to the newest row.
    #[must_use]
    pub fn is_at_tail(&self) -> bool {
        self.viewport.scroll_offset() + self.anchor_epsilon >= self.tail_scroll_offset()
    }

    /// Scrolls to the tail-aligned offset.
    pub fn scroll_to_tail(&mut self) -> ViewChanges {
        let tail = self.tail_scroll_offset();
        self.set_scroll_offset(tail)
    }

    /// Returns the tail-anchoring tolerance.
    #[must_use]
    pub fn anchor_epsilon(&self) -> S {
        self.anchor_epsilon
    }

    /// Sets the tail-anchoring tolerance, in the view's coordinate units.
    pub fn set_anchor_epsilon(&mut self, epsilon: S) {
        self.anchor_epsilon = epsilon.finite_or_zero().clamp_non_negative();
    }

    fn recompute(&mut self) -> ViewChanges {
        let window = compute_window(
            self.viewport.scroll_offset(),
            self.viewport.extent(),
            &self.geometry,
        );
        let placeholders = compute_placeholders(window, self.len, &self.geometry);

        let mut changes = ViewChanges::empty();
        if window != self.window {
            self.window = window;
            changes |= ViewChanges::WINDOW;
        }
        if placeholders != self.placeholders {
            self.placeholders = placeholders;
            changes |= ViewChanges::PLACEHOLDERS;
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewChanges, VirtualView};
    use flowdeck_virtual_window::RowGeometry;

    fn flow_table_view() -> VirtualView<f64> {
        // Flow-table metrics: 32px rows under a 23px pinned head.
        let mut view = VirtualView::new(RowGeometry::new(32.0).with_header_height(23.0));
        view.set_len(100);
        view.set_viewport_extent(320.0);
        view
    }

    #[test]
    fn new_view_is_empty_and_unmeasured() {
        let view = VirtualView::new(RowGeometry::new(32.0_f64));
        assert!(view.is_empty());
        assert!(view.window().is_empty());
        assert_eq!(view.placeholders().top_extent(), 0.0);
        assert_eq!(view.placeholders().bottom, 0.0);
    }

    #[test]
    fn repeated_measurements_report_no_changes() {
        let mut view = flow_table_view();
        assert_eq!(view.set_viewport_extent(320.0), ViewChanges::empty());
        assert_eq!(view.set_scroll_offset(0.0), ViewChanges::empty());
        assert_eq!(view.set_len(100), ViewChanges::empty());
    }

    #[test]
    fn sub_row_scroll_keeps_window_but_reports_offset() {
        let mut view = flow_table_view();
        let changes = view.set_scroll_offset(10.0);
        assert_eq!(changes, ViewChanges::SCROLL_OFFSET);
        assert_eq!(view.window().start, 0);
    }

    #[test]
    fn measuring_a_mounted_view_populates_the_window() {
        let mut view = VirtualView::new(RowGeometry::new(32.0_f64));
        view.set_len(100);
        assert!(view.window().is_empty());

        let changes = view.set_viewport_extent(320.0);
        assert!(changes.contains(ViewChanges::VIEWPORT_EXTENT | ViewChanges::WINDOW));
        assert_eq!(view.window().len(), 10);
    }

    #[test]
    fn anchor_epsilon_sanitizes_like_measurements() {
        let mut view = flow_table_view();
        view.set_anchor_epsilon(f64::NAN);
        assert_eq!(view.anchor_epsilon(), 0.0);
        view.set_anchor_epsilon(2.5);
        assert_eq!(view.anchor_epsilon(), 2.5);
    }
}
