//! In-memory host implementation of the edit notification protocol.
//!
//! This module provides [`InMemoryArrangement`], a minimal face inventory
//! that owns [`FaceId`]s, enumerates them in creation order, and dispatches
//! the [`EditListener`] notifications around each of its edits. It carries no
//! halfedge or vertex combinatorics and no geometry; it exists so listeners
//! can be driven by a real host in tests, examples, and benchmarks.
//!
//! Edits are validated before any listener is notified, so the notification
//! stream a listener observes is always well-formed.

use std::collections::HashSet;

use crate::index_error::FaceIndexError;
use crate::topology::face::FaceId;
use crate::topology::host::ElementSource;
use crate::topology::observer::EditListener;

/// A face inventory dispatching edit notifications.
///
/// # Invariants
/// - `order` holds each live face exactly once, in creation order.
/// - `live` contains precisely the faces listed in `order`.
/// - There is always at least one face (the initial, unbounded one).
///
/// Enumeration order for [`ElementSource`] is creation order, which survives
/// merges of earlier faces unchanged.
#[derive(Clone, Debug)]
pub struct InMemoryArrangement {
    /// Live faces in creation order.
    order: Vec<FaceId>,
    /// Membership companion to `order`.
    live: HashSet<FaceId>,
    /// Next raw id handed out by `split_face`.
    next_face: u64,
}

impl Default for InMemoryArrangement {
    fn default() -> Self {
        let mut arr = Self {
            order: Vec::new(),
            live: HashSet::new(),
            next_face: 1,
        };
        arr.seed_unbounded();
        arr
    }
}

impl InMemoryArrangement {
    /// Creates an arrangement holding its single initial face.
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_face(&mut self) -> FaceId {
        let f = FaceId::new(self.next_face).expect("face ids start at 1");
        self.next_face += 1;
        f
    }

    fn seed_unbounded(&mut self) {
        let f = self.fresh_face();
        self.live.insert(f);
        self.order.push(f);
    }

    /// Number of live faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.order.len()
    }

    /// Returns true iff `face` is currently live.
    #[inline]
    pub fn contains(&self, face: FaceId) -> bool {
        self.live.contains(&face)
    }

    /// Live faces in creation (enumeration) order.
    #[inline]
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.order.iter().copied()
    }

    /// Splits `existing`, creating a fresh face.
    ///
    /// Listeners observe the split after it is committed.
    ///
    /// # Errors
    /// Returns `Err(UnknownFace)` if `existing` is not live.
    pub fn split_face<L: EditListener<Self>>(
        &mut self,
        existing: FaceId,
        listeners: &mut L,
    ) -> Result<FaceId, FaceIndexError> {
        if !self.live.contains(&existing) {
            return Err(FaceIndexError::UnknownFace(existing));
        }
        let created = self.fresh_face();
        self.live.insert(created);
        self.order.push(created);
        listeners.after_split(existing, created);
        Ok(created)
    }

    /// Merges `absorbed` into `surviving`, removing `absorbed`.
    ///
    /// Listeners observe the merge before it is committed, while `absorbed`
    /// is still enumerated by the host.
    ///
    /// # Errors
    /// Returns `Err(MergeWithSelf)` if both handles name the same face, or
    /// `Err(UnknownFace)` if either face is not live.
    pub fn merge_faces<L: EditListener<Self>>(
        &mut self,
        surviving: FaceId,
        absorbed: FaceId,
        listeners: &mut L,
    ) -> Result<(), FaceIndexError> {
        if surviving == absorbed {
            return Err(FaceIndexError::MergeWithSelf(surviving));
        }
        if !self.live.contains(&surviving) {
            return Err(FaceIndexError::UnknownFace(surviving));
        }
        if !self.live.contains(&absorbed) {
            return Err(FaceIndexError::UnknownFace(absorbed));
        }
        listeners.before_merge(surviving, absorbed);
        self.live.remove(&absorbed);
        self.order.retain(|&f| f != absorbed);
        Ok(())
    }

    /// Clears the arrangement back to its single initial face.
    ///
    /// Listeners observe a full reset after the clear.
    pub fn clear<L: EditListener<Self>>(&mut self, listeners: &mut L) {
        self.order.clear();
        self.live.clear();
        self.next_face = 1;
        self.seed_unbounded();
        listeners.after_full_reset(self);
    }

    /// Replaces this arrangement's contents with a copy of `other`.
    ///
    /// Listeners observe a full reset after the assignment.
    pub fn assign<L: EditListener<Self>>(&mut self, other: &Self, listeners: &mut L) {
        self.order = other.order.clone();
        self.live = other.live.clone();
        self.next_face = other.next_face;
        listeners.after_full_reset(self);
    }
}

impl ElementSource for InMemoryArrangement {
    type Element = FaceId;
    type ElementIter<'a>
        = std::iter::Copied<std::slice::Iter<'a, FaceId>>
    where
        Self: 'a;

    #[inline]
    fn element_count(&self) -> usize {
        self.order.len()
    }

    #[inline]
    fn elements(&self) -> Self::ElementIter<'_> {
        self.order.iter().copied()
    }
}
