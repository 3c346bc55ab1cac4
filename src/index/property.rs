//! Read-only keyed-mapping capability for generic algorithms.
//!
//! Algorithms that only need `element -> small unsigned integer` (traversal
//! orderings, coloring, array-backed per-element scratch storage) should
//! accept any [`IndexProperty`] rather than a concrete map type. Every bound
//! [`ElementIndexMap`](crate::index::index_map::ElementIndexMap) satisfies
//! the capability.

use crate::index::index_map::ElementIndexMap;
use crate::topology::bounds::ElementLike;

/// Read-only lookup from a key to its dense index.
pub trait IndexProperty<K> {
    /// Current index of `key`.
    ///
    /// Precondition: `key` is tracked by the property; untracked keys are a
    /// contract violation, matching the unchecked query path of the
    /// underlying map.
    fn get_index(&self, key: K) -> usize;
}

impl<E: ElementLike> IndexProperty<E> for ElementIndexMap<E> {
    #[inline]
    fn get_index(&self, key: E) -> usize {
        self.index_of(key)
    }
}
