//! # face-index
//!
//! face-index maintains a dense, contiguous integer labeling over the live
//! faces of a dynamically edited combinatorial structure, such as a planar
//! arrangement, without ever re-scanning the structure except on a
//! full rebuild. The host performs its splits, merges, clears and
//! reassignments and notifies its bound maps through a small observer
//! protocol; each notification updates the forward (element to index) and
//! reverse (index to element) stores in amortized O(1) while keeping the
//! assigned indices exactly `{0, ..., count-1}`.
//!
//! ## Features
//! - [`ElementIndexMap`](index::index_map::ElementIndexMap) over any
//!   `Copy + Eq + Hash` element identity, with a
//!   [`FaceIndexMap`](index::index_map::FaceIndexMap) alias for face handles
//! - Composition-based [`EditListener`](topology::observer::EditListener)
//!   notification protocol with a tagged-event dispatch alternative
//! - [`InMemoryArrangement`](topology::arrangement::InMemoryArrangement), a
//!   minimal host for tests, examples, and benchmarks
//! - Geometric capacity policy (doubling growth, quarter-occupancy halving,
//!   fixed floor) so edit storms cannot thrash the allocator
//! - Invariant validation in debug builds or under the `check-invariants`
//!   feature
//!
//! Index identity is not stable across removals: a merge relocates the last
//! element into the vacated slot, so only density and uniqueness are
//! guaranteed, not ordering.
//!
//! ## Usage
//! ```rust
//! use face_index::prelude::*;
//!
//! let mut arr = InMemoryArrangement::new();
//! let mut map = FaceIndexMap::bound_to(&arr);
//! let outer = arr.faces().next().unwrap();
//!
//! let inner = arr.split_face(outer, &mut map)?;
//! assert_eq!(map.index_of(inner), 1);
//!
//! arr.merge_faces(outer, inner, &mut map)?;
//! assert_eq!(map.len(), 1);
//! # Ok::<(), face_index::index_error::FaceIndexError>(())
//! ```
//!
//! ## Concurrency
//! The map is a tightly coupled observer of one host: single-threaded and
//! synchronous. If shared across threads, host and bound maps must sit
//! behind a single exclusive lock for the duration of any structural edit
//! plus its notification cascade; forward and reverse stores are updated
//! non-atomically relative to each other.

// Re-export our major subsystems:
pub mod debug_invariants;
pub mod index;
pub mod index_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::index::index_map::{ElementIndexMap, FaceIndexMap};
    pub use crate::index::property::IndexProperty;
    pub use crate::index_error::FaceIndexError;
    pub use crate::topology::arrangement::InMemoryArrangement;
    pub use crate::topology::bounds::ElementLike;
    pub use crate::topology::face::FaceId;
    pub use crate::topology::host::ElementSource;
    pub use crate::topology::observer::{EditEvent, EditListener};
}
