//! Incremental dense indexing of a host's live elements.
//!
//! The [`ElementIndexMap`] struct maintains a bijection between the live
//! elements of a bound host and the dense index range `0..count`, keeping it
//! synchronized with the host's structural edits through the
//! [`EditListener`] notification protocol. Every edit costs amortized
//! **O(1)**; only a full rebuild (bind, clear, reassignment) is **O(n)**.

use std::collections::HashMap;

use itertools::Itertools;

use crate::debug_invariants::DebugInvariants;
use crate::index_error::FaceIndexError;
use crate::topology::bounds::ElementLike;
use crate::topology::face::FaceId;
use crate::topology::host::ElementSource;
use crate::topology::observer::EditListener;

/// Dense index map over the faces of an arrangement-like host.
pub type FaceIndexMap = ElementIndexMap<FaceId>;

/// `ElementIndexMap` maintains:
/// - a `forward` lookup from each live element to its current index,
/// - a `reverse` sequence whose slot `i` holds the element at index `i`,
/// - and `count`, the number of live elements.
///
/// # Invariants
///
/// - `forward` holds exactly `count` entries.
/// - `reverse.len() >= max(count, MIN_REV_CAPACITY)`.
/// - For every `i < count`, `reverse[i] == Some(e)` with `forward[e] == i`.
/// - For every `i >= count`, `reverse[i]` is the `None` sentinel.
///
/// Together these make the indices assigned at any time exactly
/// `{0, ..., count-1}` with no gaps or duplicates. Index identity is **not**
/// stable across removals: a merge relocates the last element into the
/// vacated slot (swap-with-last), trading order stability for O(1) density.
///
/// These invariants are checked after mutations in debug builds and when the
/// `check-invariants` feature is enabled. They can also be verified manually
/// via [`validate_invariants`](DebugInvariants::validate_invariants).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ElementIndexMap<E: ElementLike> {
    /// Number of live elements; indices run over `0..count`.
    count: usize,
    /// Maps each live element to its current index.
    forward: HashMap<E, usize>,
    /// Slot `i` holds the element at index `i`; slots past `count` are `None`.
    reverse: Vec<Option<E>>,
    /// Whether a bind has run since construction or the last unbind.
    bound: bool,
    /// Monotonic version that changes on any structural modification.
    version: u64,
}

impl<E: ElementLike> Default for ElementIndexMap<E> {
    fn default() -> Self {
        Self {
            count: 0,
            forward: HashMap::new(),
            reverse: vec![None; Self::MIN_REV_CAPACITY],
            bound: false,
            version: 0,
        }
    }
}

impl<E: ElementLike> ElementIndexMap<E> {
    /// Floor for the reverse-sequence capacity.
    ///
    /// The reverse sequence only ever doubles or halves and never drops
    /// below this many slots, so alternating edits near a threshold cannot
    /// thrash the allocator.
    pub const MIN_REV_CAPACITY: usize = 32;

    /// Creates an empty, unbound map with minimum reverse capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a map bound to `host`.
    ///
    /// Performs its own full rebuild, so the result is independent of any
    /// other map observing the same host.
    pub fn bound_to<H>(host: &H) -> Self
    where
        H: ElementSource<Element = E>,
    {
        let mut map = Self::default();
        map.bind(host);
        map
    }

    /// Attaches to `host`, replacing any prior binding.
    ///
    /// Enumerates all live elements in the host's canonical order and
    /// assigns them indices `0..n`. Idempotent: binding twice to an
    /// unchanged host yields an identical mapping.
    ///
    /// # Complexity
    /// **O(n)** in the host's current element count. This is the only O(n)
    /// path; all edit notifications are amortized O(1).
    pub fn bind<H>(&mut self, host: &H)
    where
        H: ElementSource<Element = E>,
    {
        self.rebuild(host);
    }

    /// Detaches from the host, clearing all state.
    ///
    /// The count becomes 0, the reverse capacity returns to the minimum, and
    /// queries fail with [`FaceIndexError::Unbound`] until the map is bound
    /// again.
    pub fn unbind(&mut self) {
        self.count = 0;
        self.forward.clear();
        self.reverse.clear();
        self.reverse.resize(Self::MIN_REV_CAPACITY, None);
        self.bound = false;
        self.version = self.version.wrapping_add(1);
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
    }

    /// Current index of `element`.
    ///
    /// # Errors
    /// Returns `Err(Unbound)` if the map has never been bound, or
    /// `Err(UntrackedElement)` if `element` is not currently live.
    pub fn try_index_of(&self, element: E) -> Result<usize, FaceIndexError> {
        if !self.bound {
            return Err(FaceIndexError::Unbound);
        }
        self.forward
            .get(&element)
            .copied()
            .ok_or_else(|| FaceIndexError::UntrackedElement(format!("{element:?}")))
    }

    /// `Some(index)` if `element` is tracked, `None` otherwise.
    #[inline]
    pub fn get(&self, element: E) -> Option<usize> {
        self.forward.get(&element).copied()
    }

    /// Current index of a tracked element.
    ///
    /// Precondition: `element` is currently live on the bound host. Callers
    /// that cannot guarantee this should use
    /// [`try_index_of`](Self::try_index_of) instead.
    ///
    /// # Panics
    /// Panics if `element` is not tracked.
    #[inline]
    pub fn index_of(&self, element: E) -> usize {
        self.forward[&element]
    }

    /// Element currently holding `index`.
    ///
    /// # Errors
    /// Returns `Err(Unbound)` if the map has never been bound, or
    /// `Err(IndexOutOfRange)` if `index >= len()`.
    pub fn try_element_at(&self, index: usize) -> Result<E, FaceIndexError> {
        if !self.bound {
            return Err(FaceIndexError::Unbound);
        }
        if index >= self.count {
            return Err(FaceIndexError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        self.reverse[index].ok_or(FaceIndexError::StaleReverseSlot(index))
    }

    /// Element currently holding `index`.
    ///
    /// Precondition: `index < len()`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline]
    pub fn element_at(&self, index: usize) -> E {
        assert!(
            index < self.count,
            "index {index} out of range (count is {})",
            self.count
        );
        self.reverse[index].expect("live reverse slot is populated")
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the map tracks no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether a bind has run since construction or the last unbind.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Allocated reverse-sequence slots (always `>= len()`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.reverse.len()
    }

    /// Monotonic version that changes whenever the mapping changes.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Live elements in index order (index 0 first).
    pub fn elements(&self) -> impl Iterator<Item = E> + '_ {
        self.reverse[..self.count].iter().flatten().copied()
    }

    /// Records a split: `created` takes the next index.
    ///
    /// Increments the count and appends `created` at index `count - 1`,
    /// doubling the reverse sequence when the append lands at capacity.
    /// Hosts normally deliver this through
    /// [`EditListener::after_split`]; it is public so non-observer drivers
    /// can feed the map directly.
    pub fn record_split(&mut self, _existing: E, created: E) {
        let index = self.count;
        self.count += 1;

        if self.reverse.len() < self.count {
            let doubled = self.reverse.len() * 2;
            self.reverse.resize(doubled, None);
            log::trace!("grew reverse sequence to {doubled} slots");
        }

        self.forward.insert(created, index);
        self.reverse[index] = Some(created);
        self.version = self.version.wrapping_add(1);
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
    }

    /// Records an impending merge of `absorbed` into `surviving`.
    ///
    /// Decrements the count, purges `absorbed`, and keeps the index range
    /// dense by moving the element at the old last index into the vacated
    /// slot (swap-with-last). Halves the reverse sequence once occupancy
    /// falls under a quarter of capacity, provided the halved capacity stays
    /// at or above [`MIN_REV_CAPACITY`](Self::MIN_REV_CAPACITY).
    ///
    /// # Panics
    /// Panics if `absorbed` is not tracked; the map trusts the notification
    /// stream and treats a malformed sequence as a contract violation.
    pub fn record_merge(&mut self, _surviving: E, absorbed: E) {
        let index = self
            .forward
            .remove(&absorbed)
            .unwrap_or_else(|| panic!("merge notification for untracked element {absorbed:?}"));
        self.count -= 1;
        let count = self.count;

        let cap = self.reverse.len();
        if 4 * count < cap && cap / 2 >= Self::MIN_REV_CAPACITY {
            self.reverse.truncate(cap / 2);
            log::trace!("shrank reverse sequence to {} slots", cap / 2);
        }

        if index == count {
            // The absorbed element already held the last slot.
            self.reverse[count] = None;
        } else {
            let last = self.reverse[count]
                .take()
                .unwrap_or_else(|| panic!("reverse slot {count} empty during merge"));
            self.forward.insert(last, index);
            self.reverse[index] = Some(last);
        }
        self.version = self.version.wrapping_add(1);
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
    }

    fn rebuild<H>(&mut self, host: &H)
    where
        H: ElementSource<Element = E>,
    {
        let n = host.element_count();
        self.forward.clear();
        self.forward.reserve(n);
        self.reverse.clear();
        self.reverse.resize(n.max(Self::MIN_REV_CAPACITY), None);

        let mut index = 0usize;
        for element in host.elements() {
            self.forward.insert(element, index);
            self.reverse[index] = Some(element);
            index += 1;
        }
        debug_assert_eq!(index, n, "host enumeration disagrees with element_count");
        self.count = index;
        self.bound = true;
        self.version = self.version.wrapping_add(1);
        log::debug!("rebuilt index map over {} elements", self.count);
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
    }
}

/// Precondition-style lookup mirroring [`index_of`](ElementIndexMap::index_of).
///
/// # Panics
/// Panics if `element` is not tracked.
impl<E: ElementLike> std::ops::Index<E> for ElementIndexMap<E> {
    type Output = usize;

    #[inline]
    fn index(&self, element: E) -> &usize {
        &self.forward[&element]
    }
}

impl<H: ElementSource> EditListener<H> for ElementIndexMap<H::Element> {
    fn after_full_reset(&mut self, host: &H) {
        self.rebuild(host);
    }

    fn after_bind(&mut self, host: &H) {
        self.rebuild(host);
    }

    fn after_unbind(&mut self) {
        self.unbind();
    }

    fn after_split(&mut self, existing: H::Element, created: H::Element) {
        self.record_split(existing, created);
    }

    fn before_merge(&mut self, surviving: H::Element, absorbed: H::Element) {
        self.record_merge(surviving, absorbed);
    }
}

impl<E: ElementLike> DebugInvariants for ElementIndexMap<E> {
    fn debug_assert_invariants(&self) {
        crate::face_index_debug_assert_ok!(self.validate_invariants(), "ElementIndexMap invalid");
    }

    fn validate_invariants(&self) -> Result<(), FaceIndexError> {
        // 1) an unbound map tracks nothing
        if !self.bound && self.count != 0 {
            return Err(FaceIndexError::Unbound);
        }

        // 2) forward store and count agree
        if self.forward.len() != self.count {
            return Err(FaceIndexError::CountMismatch {
                forward: self.forward.len(),
                count: self.count,
            });
        }

        // 3) capacity covers the count and respects the floor
        let required = self.count.max(Self::MIN_REV_CAPACITY);
        if self.reverse.len() < required {
            return Err(FaceIndexError::CapacityBelowRequired {
                capacity: self.reverse.len(),
                required,
            });
        }

        // 4) every live slot is populated
        if let Some(slot) = self.reverse[..self.count].iter().position(|s| s.is_none()) {
            return Err(FaceIndexError::StaleReverseSlot(slot));
        }

        // 5) no element occupies two slots
        if let Some(dup) = self.reverse[..self.count]
            .iter()
            .flatten()
            .duplicates()
            .next()
        {
            return Err(FaceIndexError::DuplicateElement(format!("{dup:?}")));
        }

        // 6) live prefix round-trips through the forward store
        for (slot, element) in self.reverse[..self.count].iter().flatten().copied().enumerate() {
            match self.forward.get(&element) {
                Some(&mapped) if mapped == slot => {}
                Some(&mapped) => {
                    return Err(FaceIndexError::BrokenBijection {
                        element: format!("{element:?}"),
                        slot,
                        mapped,
                    });
                }
                None => {
                    return Err(FaceIndexError::UntrackedElement(format!("{element:?}")));
                }
            }
        }

        // 7) slots past the live prefix hold the sentinel
        if let Some(stale) = self.reverse[self.count..].iter().position(|s| s.is_some()) {
            return Err(FaceIndexError::StaleReverseSlot(self.count + stale));
        }

        Ok(())
    }
}
