// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped subscriptions to a host's scroll-position source.
//!
//! Hosts own the machinery that observes scrolling, resizing, and data-store
//! changes (DOM listeners, terminal resize signals, store callbacks). This
//! module models the lifecycle contract between that machinery and a
//! [`VirtualView`](crate::VirtualView):
//!
//! - The host implements [`ScrollSource`] over whatever it uses to watch the
//!   viewport.
//! - A [`ScrollBinding`] registers with the source when the view activates
//!   and unregisters when dropped, so a listener can never outlive its view,
//!   including on unwind.
//! - While bound, the host forwards each notification as a
//!   [`ViewportEvent`] to [`VirtualView::handle_event`](crate::VirtualView::handle_event).

use flowdeck_virtual_window::Scalar;

/// A notification from the host environment that invalidates the window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ViewportEvent<S: Scalar> {
    /// The viewport scrolled to the given offset.
    Scrolled(S),
    /// The viewport was resized to the given extent.
    Resized(S),
    /// The item list changed (add/remove/reorder); carries the new length.
    ///
    /// Delivered by the data store rather than the viewport, but it must
    /// recompute the window all the same: rows removed below the fold shrink
    /// the bottom placeholder without any scrolling happening.
    ItemsChanged(usize),
}

/// Identifies one registration with a [`ScrollSource`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegistrationToken(u64);

impl RegistrationToken {
    /// Creates a token from a source-chosen identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the source-chosen identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// A host-owned source of scroll and resize notifications.
///
/// Implementations mint a [`RegistrationToken`] per listener and must accept
/// `unregister` exactly once per minted token. How notifications are actually
/// delivered is the host's business; this trait only captures the
/// acquire/release pair so [`ScrollBinding`] can scope it.
pub trait ScrollSource {
    /// Registers a listener and returns its token.
    fn register(&mut self) -> RegistrationToken;

    /// Unregisters a previously registered listener.
    fn unregister(&mut self, token: RegistrationToken);
}

impl<E: ScrollSource + ?Sized> ScrollSource for &mut E {
    fn register(&mut self) -> RegistrationToken {
        (**self).register()
    }

    fn unregister(&mut self, token: RegistrationToken) {
        (**self).unregister(token)
    }
}

/// Scoped registration with a [`ScrollSource`].
///
/// Registers on construction, unregisters on drop. Hosts that own their
/// source can hand it over by value; hosts that keep it elsewhere can bind
/// through `&mut` thanks to the blanket [`ScrollSource`] impl for mutable
/// references.
#[derive(Debug)]
pub struct ScrollBinding<E: ScrollSource> {
    source: E,
    token: Option<RegistrationToken>,
}

impl<E: ScrollSource> ScrollBinding<E> {
    /// Registers with `source` and keeps the registration alive until drop.
    pub fn new(mut source: E) -> Self {
        let token = source.register();
        Self {
            source,
            token: Some(token),
        }
    }

    /// Returns the token for this binding's registration.
    ///
    /// `None` only after [`ScrollBinding::release`].
    #[must_use]
    pub fn token(&self) -> Option<RegistrationToken> {
        self.token
    }

    /// Returns a shared reference to the bound source.
    #[must_use]
    pub fn source(&self) -> &E {
        &self.source
    }

    /// Returns a mutable reference to the bound source.
    pub fn source_mut(&mut self) -> &mut E {
        &mut self.source
    }

    /// Unregisters early, before the binding is dropped.
    ///
    /// Dropping afterwards is a no-op; the release happens exactly once.
    pub fn release(&mut self) {
        if let Some(token) = self.token.take() {
            self.source.unregister(token);
        }
    }
}

impl<E: ScrollSource> Drop for ScrollBinding<E> {
    fn drop(&mut self) {
        self.release();
    }
}
