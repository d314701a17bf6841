// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flowdeck_view --heading-base-level=0

//! Flowdeck View: the stateful side of list virtualization.
//!
//! `flowdeck_virtual_window` provides the pure windowing math; this crate
//! wraps it in the small amount of state a live view needs:
//!
//! - [`ViewportState`]: the current scroll offset and viewport extent,
//!   sanitized against the garbage measurements hosts report before a view
//!   is attached.
//! - [`VirtualView`]: a controller owning the row metrics, viewport state,
//!   and item count. Every mutation synchronously re-derives the cached
//!   [`Window`](flowdeck_virtual_window::Window) and
//!   [`PlaceholderLayout`](flowdeck_virtual_window::PlaceholderLayout) and
//!   reports what changed as [`ViewChanges`] flags, so hosts can skip
//!   re-renders that would be no-ops. It also applies scroll-into-view
//!   targets and provides tail anchoring for append-heavy views (the event
//!   log pins to the newest entry unless the user has scrolled away).
//! - [`ScrollSource`] and [`ScrollBinding`]: a scoped subscription contract
//!   for the host's scroll/resize notifications. The binding registers on
//!   construction and unregisters when dropped, on every exit path.
//!
//! Everything is single-threaded and synchronous: the controller never
//! suspends, and after any mutator returns, the cached window and
//! placeholders are consistent with the inputs as of that call.
//!
//! ## Typical event flow
//!
//! ```rust
//! use flowdeck_view::{ViewportEvent, VirtualView};
//! use flowdeck_virtual_window::RowGeometry;
//!
//! let mut view = VirtualView::new(RowGeometry::new(32.0_f64));
//! view.handle_event(ViewportEvent::ItemsChanged(100));
//! view.handle_event(ViewportEvent::Resized(320.0));
//!
//! let changes = view.handle_event(ViewportEvent::Scrolled(320.0));
//! assert!(!changes.is_empty());
//! assert_eq!(view.window().start, 10);
//!
//! // Hosts slice their row list with the clamped window...
//! let ids: Vec<u32> = (0..100).collect();
//! assert_eq!(view.materialize(&ids), &ids[10..20]);
//! // ...and render the spacers around it.
//! assert_eq!(view.placeholders().top_extent(), 320.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod source;
mod view;
mod viewport;

pub use source::{RegistrationToken, ScrollBinding, ScrollSource, ViewportEvent};
pub use view::{ViewChanges, VirtualView, WindowedView};
pub use viewport::ViewportState;
