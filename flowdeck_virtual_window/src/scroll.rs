// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic scroll targets for bringing a row into view.

use crate::{RowGeometry, Scalar};

/// Computes the scroll offset that brings `row_index` fully into view.
///
/// The viewport is modeled with a pinned header of
/// [`header_height`](RowGeometry::header_height) overlaying the top of the
/// scrolled content, so a row is only considered visible once it clears the
/// header:
///
/// - If the row sits above the viewport (or under the header), the returned
///   offset aligns the row's top with the bottom edge of the header.
/// - If the row's bottom extends past the viewport, the returned offset
///   aligns the row's bottom with the viewport's bottom edge.
/// - Returns `None` when the row is already fully visible.
///
/// Callers are responsible for validating `row_index` against the current
/// item count; an out-of-range index yields an offset past the content.
#[must_use]
pub fn scroll_offset_for_row<S: Scalar>(
    row_index: usize,
    geometry: &RowGeometry<S>,
    scroll_offset: S,
    viewport_extent: S,
) -> Option<S> {
    let offset = scroll_offset.finite_or_zero().clamp_non_negative();
    let extent = viewport_extent.finite_or_zero().clamp_non_negative();

    let row_top = geometry.row_top(row_index);
    let row_bottom = row_top + geometry.row_height();

    if row_top - geometry.header_height() < offset {
        Some(row_top - geometry.header_height())
    } else if row_bottom > offset + extent {
        Some(row_bottom - extent)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::scroll_offset_for_row;
    use crate::RowGeometry;

    #[test]
    fn row_below_the_fold_scrolls_down() {
        let geometry = RowGeometry::new(32.0_f64).with_header_height(23.0);
        // Row 3 spans [119, 151); a 100px viewport at offset 0 cuts it off.
        let target = scroll_offset_for_row(3, &geometry, 0.0, 100.0);
        assert_eq!(target, Some(51.0));
    }

    #[test]
    fn row_under_the_header_scrolls_up() {
        let geometry = RowGeometry::new(32.0_f64).with_header_height(23.0);
        // From offset 51, row 0's top (23) minus the header lands at 0.
        let target = scroll_offset_for_row(0, &geometry, 51.0, 100.0);
        assert_eq!(target, Some(0.0));
    }

    #[test]
    fn visible_row_needs_no_scroll() {
        let geometry = RowGeometry::new(32.0_f64);
        // Row 2 spans [64, 96) inside a viewport covering [32, 160).
        assert_eq!(scroll_offset_for_row(2, &geometry, 32.0, 128.0), None);
    }

    #[test]
    fn headerless_geometry_aligns_row_top_with_viewport_top() {
        let geometry = RowGeometry::new(20.0_f32);
        let target = scroll_offset_for_row(5, &geometry, 500.0, 100.0);
        assert_eq!(target, Some(100.0));
    }
}
