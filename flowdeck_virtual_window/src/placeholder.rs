// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder spacers for the elided regions around the window.

use smallvec::SmallVec;

use crate::{RowGeometry, Scalar, Window};

/// Spacer heights for the rows elided above and below the window.
///
/// A presentation layer renders, in order: one spacer per entry in `top`,
/// the materialized rows, then a single spacer of height `bottom`. Sized this
/// way, the scrollable container's total height matches what it would be if
/// all rows were materialized.
///
/// `top` usually holds a single sized spacer. When the window starts on an
/// odd index it holds a second, zero-height spacer: alternating row
/// backgrounds are keyed by element position parity, so eliding an odd number
/// of rows would flip the stripe phase of the first materialized row. The
/// extra marker restores it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderLayout<S: Scalar> {
    /// Heights of the spacers rendered above the window, in order.
    pub top: SmallVec<[S; 2]>,
    /// Height of the single spacer rendered below the window.
    pub bottom: S,
}

impl<S: Scalar> PlaceholderLayout<S> {
    /// Returns the summed height of the top spacers.
    #[must_use]
    pub fn top_extent(&self) -> S {
        let mut total = S::zero();
        for height in &self.top {
            total = total + *height;
        }
        total
    }

    /// Returns `true` if a zero-height stripe spacer is present.
    #[must_use]
    pub fn has_stripe_spacer(&self) -> bool {
        self.top.len() == 2
    }
}

/// Computes the placeholder layout for a window over `len` items.
///
/// The top height clamps `start` to `len` first: after a bulk removal the
/// window can be stale and point far past the shrunk list, and the clamp
/// keeps the spacer within the actual content extent. The stripe-spacer
/// parity check uses the *unclamped* `start`, matching the parity the window
/// will have once the host recomputes. The bottom height saturates at zero
/// when the window already reaches the end of the list.
#[must_use]
pub fn compute_placeholders<S: Scalar>(
    window: Window,
    len: usize,
    geometry: &RowGeometry<S>,
) -> PlaceholderLayout<S> {
    let mut top = SmallVec::new();
    top.push(S::from_usize(window.start.min(len)) * geometry.row_height());
    if window.start % 2 == 1 {
        top.push(S::zero());
    }

    let bottom = S::from_usize(len.saturating_sub(window.stop)) * geometry.row_height();

    PlaceholderLayout { top, bottom }
}
