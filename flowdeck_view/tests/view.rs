// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `flowdeck_view` controller.
//!
//! These exercise the full flow-table and event-log configurations end to
//! end: scroll/resize/data notifications in, windowed output and placeholder
//! spans out.

use flowdeck_view::{ViewChanges, ViewportEvent, VirtualView};
use flowdeck_virtual_window::RowGeometry;

/// The flow table: 32px rows, 23px pinned head, 100 flows in a 320px viewport.
fn flow_table() -> VirtualView<f64> {
    let mut view = VirtualView::new(RowGeometry::new(32.0).with_header_height(23.0));
    view.set_len(100);
    view.set_viewport_extent(320.0);
    view
}

/// The event log: 45px rows that can wrap down to 15px, no pinned header.
fn event_log() -> VirtualView<f64> {
    let mut view = VirtualView::new(RowGeometry::new(45.0).with_row_height_min(15.0));
    view.set_viewport_extent(300.0);
    view
}

#[test]
fn top_of_the_table_materializes_the_first_ten_rows() {
    let view = flow_table();
    assert_eq!(view.window().start, 0);
    assert_eq!(view.window().stop, 10);

    let output = view.windowed_view();
    assert_eq!(output.range, 0..10);
    assert_eq!(output.placeholders.top_extent(), 0.0);
    assert_eq!(output.placeholders.bottom, 90.0 * 32.0);
}

#[test]
fn scrolling_one_viewport_shifts_the_window_one_viewport() {
    let mut view = flow_table();
    let changes = view.set_scroll_offset(320.0);
    assert!(changes.contains(ViewChanges::SCROLL_OFFSET | ViewChanges::WINDOW));

    let output = view.windowed_view();
    assert_eq!(output.range, 10..20);
    assert_eq!(output.placeholders.top_extent(), 320.0);
    assert_eq!(output.placeholders.bottom, 80.0 * 32.0);
}

#[test]
fn materialize_slices_the_host_list() {
    let mut view = flow_table();
    view.set_scroll_offset(320.0);

    let flow_ids: Vec<usize> = (0..100).collect();
    assert_eq!(view.materialize(&flow_ids), &flow_ids[10..20]);
}

#[test]
fn mass_removal_clamps_the_stale_top_placeholder() {
    let mut view = flow_table();
    view.set_scroll_offset(1600.0);
    assert_eq!(view.window().start, 50);

    // The store drops 95 flows; no scroll event accompanies the change.
    let changes = view.set_len(5);
    assert!(changes.contains(ViewChanges::LEN | ViewChanges::PLACEHOLDERS));

    let output = view.windowed_view();
    assert_eq!(output.placeholders.top_extent(), 5.0 * 32.0);
    assert_eq!(output.placeholders.bottom, 0.0);
    assert!(output.range.is_empty());

    let flow_ids: Vec<usize> = (0..5).collect();
    let empty: &[usize] = &[];
    assert_eq!(view.materialize(&flow_ids), empty);
}

#[test]
fn removing_rows_below_the_fold_shrinks_the_bottom_placeholder() {
    let mut view = flow_table();
    assert_eq!(view.placeholders().bottom, 90.0 * 32.0);

    let changes = view.set_len(50);
    assert_eq!(changes, ViewChanges::LEN | ViewChanges::PLACEHOLDERS);
    assert_eq!(view.placeholders().bottom, 40.0 * 32.0);
    // The window itself did not move.
    assert_eq!(view.window().start, 0);
}

#[test]
fn odd_window_start_carries_a_stripe_spacer() {
    let mut view = flow_table();
    view.set_scroll_offset(11.0 * 32.0);
    assert_eq!(view.window().start, 11);

    let output = view.windowed_view();
    assert!(output.placeholders.has_stripe_spacer());
    assert_eq!(output.placeholders.top.len(), 2);
    assert_eq!(output.placeholders.top[1], 0.0);
}

#[test]
fn scroll_row_into_view_clears_the_pinned_head() {
    let mut view = flow_table();
    view.set_viewport_extent(100.0);

    // Row 3 spans [119, 151); the 100px viewport at offset 0 cuts it off.
    let changes = view.scroll_row_into_view(3);
    assert!(changes.contains(ViewChanges::SCROLL_OFFSET));
    assert_eq!(view.viewport().scroll_offset(), 51.0);

    // Scrolling back up to row 0 must clear the 23px head overlay.
    view.scroll_row_into_view(0);
    assert_eq!(view.viewport().scroll_offset(), 0.0);
}

#[test]
fn scroll_row_into_view_is_a_no_op_for_visible_and_out_of_range_rows() {
    let mut view = flow_table();
    view.set_scroll_offset(320.0);

    // Row 12 is comfortably inside the [320, 640) viewport.
    assert_eq!(view.scroll_row_into_view(12), ViewChanges::empty());
    // There is no row 500.
    assert_eq!(view.scroll_row_into_view(500), ViewChanges::empty());
    assert_eq!(view.viewport().scroll_offset(), 320.0);
}

#[test]
fn events_dispatch_to_the_matching_mutator() {
    let mut view = VirtualView::new(RowGeometry::new(32.0_f64));
    view.handle_event(ViewportEvent::ItemsChanged(100));
    view.handle_event(ViewportEvent::Resized(320.0));
    let changes = view.handle_event(ViewportEvent::Scrolled(320.0));

    assert!(changes.contains(ViewChanges::SCROLL_OFFSET | ViewChanges::WINDOW));
    assert_eq!(view.window().start, 10);
    assert_eq!(view.len(), 100);
}

#[test]
fn wrapped_log_rows_overfetch_to_cover_the_viewport() {
    let mut view = event_log();
    view.set_len(100);

    // 300px viewport over 15px minimum rows fetches 20, not ceil(300/45).
    assert_eq!(view.window().len(), 20);
    // Placeholders still use the nominal 45px height.
    assert_eq!(view.placeholders().bottom, 80.0 * 45.0);
}

#[test]
fn event_log_stays_pinned_to_the_tail_across_appends() {
    let mut view = event_log();
    view.set_len(50);

    view.scroll_to_tail();
    assert!(view.is_at_tail());
    assert_eq!(view.viewport().scroll_offset(), 50.0 * 45.0 - 300.0);

    // New entries arrive while pinned: re-anchor after the length change.
    let was_at_tail = view.is_at_tail();
    view.set_len(53);
    assert!(!view.is_at_tail());
    if was_at_tail {
        view.scroll_to_tail();
    }
    assert!(view.is_at_tail());
    assert_eq!(view.viewport().scroll_offset(), 53.0 * 45.0 - 300.0);
}

#[test]
fn a_reader_scrolled_away_from_the_tail_is_not_yanked_back() {
    let mut view = event_log();
    view.set_len(50);
    view.scroll_to_tail();
    view.set_scroll_offset(100.0);

    assert!(!view.is_at_tail());
    // The host pattern only re-anchors when the reader was at the tail.
}

#[test]
fn near_tail_offsets_count_as_anchored_within_epsilon() {
    let mut view = event_log();
    view.set_len(50);
    let tail = view.tail_scroll_offset();

    view.set_scroll_offset(tail - 0.5);
    assert!(view.is_at_tail());

    view.set_anchor_epsilon(10.0);
    view.set_scroll_offset(tail - 8.0);
    assert!(view.is_at_tail());

    view.set_scroll_offset(tail - 20.0);
    assert!(!view.is_at_tail());
}

#[test]
fn short_content_anchors_at_offset_zero() {
    let mut view = event_log();
    view.set_len(3);

    // 135px of content inside a 300px viewport: the tail offset is zero.
    assert_eq!(view.tail_scroll_offset(), 0.0);
    assert!(view.is_at_tail());
    assert_eq!(view.scroll_to_tail(), ViewChanges::empty());
}
