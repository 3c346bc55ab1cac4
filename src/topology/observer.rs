//! Edit notification protocol between a host and its index listeners.
//!
//! Hosts call through the [`EditListener`] capability trait around each
//! structural edit; the coupling is plain composition, not inheritance.
//! The same five notifications can also be delivered as tagged [`EditEvent`]
//! messages through the provided [`EditListener::notify`] dispatcher; both
//! routes have identical effects.
//!
//! Timing contract:
//! - `after_split`, `after_full_reset`, `after_bind`, `after_unbind` fire
//!   after the host has committed the corresponding change.
//! - `before_merge` fires *before* the host commits the merge, while the
//!   absorbed element is still live on the host side. Listeners must only
//!   touch their own bookkeeping in response, never re-read the host.

use crate::topology::host::ElementSource;

/// A structural edit, as a tagged message.
///
/// Mirrors the five [`EditListener`] callbacks one-to-one; see the trait for
/// the per-event semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditEvent<E> {
    /// The host was cleared or wholly reassigned.
    FullReset,
    /// A listener was attached to the host.
    BindComplete,
    /// A listener was detached from the host.
    UnbindComplete,
    /// `created` was split off from `existing`.
    Split {
        /// The element that was split.
        existing: E,
        /// The newly created element.
        created: E,
    },
    /// `absorbed` is about to be merged into `surviving`.
    Merging {
        /// The element that remains after the merge.
        surviving: E,
        /// The element that disappears.
        absorbed: E,
    },
}

/// Capability interface for observers of a host's structural edits.
///
/// The host invokes exactly these notifications around each edit; listeners
/// keep whatever per-element bookkeeping they maintain synchronized in
/// response. Implementations must tolerate the pre-commit timing of
/// [`before_merge`](Self::before_merge).
pub trait EditListener<H: ElementSource> {
    /// The entire host was cleared or reassigned; resynchronize from scratch.
    fn after_full_reset(&mut self, host: &H);
    /// Attachment to `host` completed; resynchronize from scratch.
    fn after_bind(&mut self, host: &H);
    /// Detachment completed; drop all host-derived state.
    fn after_unbind(&mut self);
    /// `created` was split off from `existing`.
    fn after_split(&mut self, existing: H::Element, created: H::Element);
    /// `absorbed` is about to be merged into `surviving`.
    fn before_merge(&mut self, surviving: H::Element, absorbed: H::Element);

    /// Dispatch a tagged event to the matching callback.
    fn notify(&mut self, host: &H, event: EditEvent<H::Element>) {
        match event {
            EditEvent::FullReset => self.after_full_reset(host),
            EditEvent::BindComplete => self.after_bind(host),
            EditEvent::UnbindComplete => self.after_unbind(),
            EditEvent::Split { existing, created } => self.after_split(existing, created),
            EditEvent::Merging {
                surviving,
                absorbed,
            } => self.before_merge(surviving, absorbed),
        }
    }
}

/// Hosts can run unobserved.
impl<H: ElementSource> EditListener<H> for () {
    fn after_full_reset(&mut self, _host: &H) {}
    fn after_bind(&mut self, _host: &H) {}
    fn after_unbind(&mut self) {}
    fn after_split(&mut self, _existing: H::Element, _created: H::Element) {}
    fn before_merge(&mut self, _surviving: H::Element, _absorbed: H::Element) {}
}

// Blanket impl so hosts accept borrowed listeners.
impl<'a, H: ElementSource, L: EditListener<H> + ?Sized> EditListener<H> for &'a mut L {
    #[inline]
    fn after_full_reset(&mut self, host: &H) {
        (**self).after_full_reset(host);
    }
    #[inline]
    fn after_bind(&mut self, host: &H) {
        (**self).after_bind(host);
    }
    #[inline]
    fn after_unbind(&mut self) {
        (**self).after_unbind();
    }
    #[inline]
    fn after_split(&mut self, existing: H::Element, created: H::Element) {
        (**self).after_split(existing, created);
    }
    #[inline]
    fn before_merge(&mut self, surviving: H::Element, absorbed: H::Element) {
        (**self).before_merge(surviving, absorbed);
    }
}

/// Fan-out to a pair of listeners, e.g. two maps observing one host.
impl<H: ElementSource, A: EditListener<H>, B: EditListener<H>> EditListener<H> for (A, B) {
    fn after_full_reset(&mut self, host: &H) {
        self.0.after_full_reset(host);
        self.1.after_full_reset(host);
    }
    fn after_bind(&mut self, host: &H) {
        self.0.after_bind(host);
        self.1.after_bind(host);
    }
    fn after_unbind(&mut self) {
        self.0.after_unbind();
        self.1.after_unbind();
    }
    fn after_split(&mut self, existing: H::Element, created: H::Element) {
        self.0.after_split(existing, created);
        self.1.after_split(existing, created);
    }
    fn before_merge(&mut self, surviving: H::Element, absorbed: H::Element) {
        self.0.before_merge(surviving, absorbed);
        self.1.before_merge(surviving, absorbed);
    }
}
