// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed row metrics for a virtualized view.

use crate::Scalar;

/// Row metrics for one virtualized view, immutable per view instance.
///
/// A view is configured once with the nominal height of its rows, optionally a
/// minimum row height, and optionally the height of a pinned header that
/// overlays the top of the scrolled content:
///
/// - `row_height` sizes placeholders and positions rows. The flow table uses
///   32px rows; the event log uses 45px rows.
/// - `row_height_min` feeds only the visible-row-count estimate in
///   [`compute_window`](crate::compute_window). Supplying it makes the
///   estimate overfetch, which guarantees viewport coverage when rendered
///   rows can be shorter than `row_height` (wrapped event-log messages
///   bottom out at 15px).
/// - `header_height` compensates scroll-into-view targets for a header row
///   that is pinned over the content (the flow table head, 23px).
///
/// Invalid metrics are programmer errors and fail fast at construction; see
/// the `# Panics` sections below.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowGeometry<S: Scalar> {
    row_height: S,
    row_height_min: Option<S>,
    header_height: S,
}

impl<S: Scalar> RowGeometry<S> {
    /// Creates row metrics with the given nominal row height.
    ///
    /// The minimum row height defaults to `row_height` and the header height
    /// to zero.
    ///
    /// # Panics
    ///
    /// Panics if `row_height` is not positive and finite.
    #[must_use]
    pub fn new(row_height: S) -> Self {
        assert!(
            row_height.is_finite() && row_height > S::zero(),
            "row_height must be positive and finite"
        );
        Self {
            row_height,
            row_height_min: None,
            header_height: S::zero(),
        }
    }

    /// Sets the minimum row height used for the visible-row estimate.
    ///
    /// # Panics
    ///
    /// Panics if `row_height_min` is not positive and finite, or exceeds the
    /// nominal row height.
    #[must_use]
    pub fn with_row_height_min(mut self, row_height_min: S) -> Self {
        assert!(
            row_height_min.is_finite() && row_height_min > S::zero(),
            "row_height_min must be positive and finite"
        );
        assert!(
            row_height_min <= self.row_height,
            "row_height_min must not exceed row_height"
        );
        self.row_height_min = Some(row_height_min);
        self
    }

    /// Sets the height of the pinned header overlaying the content.
    ///
    /// # Panics
    ///
    /// Panics if `header_height` is negative or not finite.
    #[must_use]
    pub fn with_header_height(mut self, header_height: S) -> Self {
        assert!(
            header_height.is_finite() && !(header_height < S::zero()),
            "header_height must be non-negative and finite"
        );
        self.header_height = header_height;
        self
    }

    /// Returns the nominal row height.
    #[must_use]
    pub fn row_height(&self) -> S {
        self.row_height
    }

    /// Returns the effective minimum row height.
    ///
    /// Falls back to the nominal row height when no minimum was configured.
    #[must_use]
    pub fn row_height_min(&self) -> S {
        self.row_height_min.unwrap_or(self.row_height)
    }

    /// Returns the pinned header height (zero when there is no header).
    #[must_use]
    pub fn header_height(&self) -> S {
        self.header_height
    }

    /// Returns the total content extent of `len` rows.
    #[must_use]
    pub fn total_extent(&self, len: usize) -> S {
        S::from_usize(len) * self.row_height
    }

    /// Returns the top edge of row `index`, measured from the content origin
    /// and including the pinned header.
    #[must_use]
    pub fn row_top(&self, index: usize) -> S {
        S::from_usize(index) * self.row_height + self.header_height
    }
}
