//! Host enumeration capability consumed by index rebuilds.
//!
//! A *host* is the combinatorial structure that owns elements (faces of a
//! planar subdivision, cells of a complex, …), creates and destroys them, and
//! notifies its listeners around each structural edit. The index map never
//! mutates a host; the only thing it ever asks of one is the enumeration
//! surface defined here, and only on the O(n) full-rebuild path.

use crate::topology::bounds::ElementLike;

/// Read-only enumeration of a host's live elements.
///
/// # Associated Types
/// - `Element`: the identity type of the host's elements.
/// - `ElementIter`: iterator over live elements in canonical order.
///
/// The canonical enumeration order is whatever order the host considers
/// stable for its own iteration (typically creation order). A full rebuild
/// assigns index 0 to the first enumerated element, 1 to the second, and so
/// on, so two consecutive rebuilds over an unchanged host must enumerate
/// identically.
pub trait ElementSource {
    /// Identity type of the host's elements.
    type Element: ElementLike;
    /// Iterator over live elements in canonical enumeration order.
    type ElementIter<'a>: Iterator<Item = Self::Element>
    where
        Self: 'a;

    /// Number of currently live elements.
    fn element_count(&self) -> usize;
    /// All live elements, in canonical enumeration order.
    fn elements(&self) -> Self::ElementIter<'_>;
}
