//! FaceIndexError: Unified error type for face-index public APIs
//!
//! This error type is used throughout the face-index library to provide robust,
//! non-panicking error handling for all fallible public APIs.

use crate::topology::face::FaceId;
use thiserror::Error;

/// Unified error type for face-index operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FaceIndexError {
    /// Attempted to construct a FaceId with a zero value (invalid).
    #[error("FaceId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidFaceId,
    /// Query on a map that has never been bound to a host.
    #[error("index map is not bound to a host")]
    Unbound,
    /// Query for an element the map does not currently track.
    #[error("element `{0}` is not tracked by the index map")]
    UntrackedElement(String),
    /// Reverse query past the number of live elements.
    #[error("index {index} out of range (count is {count})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of live elements at the time of the query.
        count: usize,
    },
    /// A reverse slot holds the wrong occupancy for its position.
    #[error("reverse slot {0} holds a stale entry")]
    StaleReverseSlot(usize),
    /// An element occupies more than one reverse slot.
    #[error("element `{0}` occupies more than one reverse slot")]
    DuplicateElement(String),
    /// An element's forward entry does not point back at its reverse slot.
    #[error("element `{element}` sits in slot {slot} but maps to index {mapped}")]
    BrokenBijection {
        /// The offending element, rendered via `Debug`.
        element: String,
        /// The reverse slot the element occupies.
        slot: usize,
        /// The index its forward entry claims.
        mapped: usize,
    },
    /// Forward-store size disagrees with the live-element count.
    #[error("forward store holds {forward} entries but count is {count}")]
    CountMismatch {
        /// Number of forward-store entries.
        forward: usize,
        /// The map's live-element count.
        count: usize,
    },
    /// Reverse-store capacity fell below what the count and floor require.
    #[error("reverse capacity {capacity} below required {required}")]
    CapacityBelowRequired {
        /// Allocated reverse slots.
        capacity: usize,
        /// Required minimum (max of count and the capacity floor).
        required: usize,
    },
    /// A host edit named a face the host does not own.
    #[error("host edit refers to unknown face `{0}`")]
    UnknownFace(FaceId),
    /// A merge named the same face as both survivor and absorbed.
    #[error("cannot merge face `{0}` with itself")]
    MergeWithSelf(FaceId),
}
