//! `FaceId`: a strong, zero-cost handle for arrangement faces
//!
//! Every face of a host structure is represented by a unique, opaque
//! identifier. `FaceId` wraps a nonzero `u64` to enforce at compile- and
//! runtime that 0 is reserved as an invalid or sentinel value.
//!
//! This module provides:
//! - A transparent `FaceId` newtype around `NonZeroU64` for zero-cost FFI and
//!   memory layout guarantees.
//! - Constructors and accessors with safety checks.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing) so `FaceId` can be used in maps, sets, and printed easily.
//!
//! A `FaceId` is pure identity: its equality and hash never depend on any
//! geometric payload the face carries in its host, so it can key the forward
//! store of an index map for the face's entire lifetime.

use crate::index_error::FaceIndexError;
use std::{fmt, num::NonZeroU64};

/// # Memory layout
/// This type is `repr(transparent)`, meaning it has the same ABI and
/// alignment as its single field (`NonZeroU64`) and can be passed to FFI
/// exactly like a `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct FaceId(NonZeroU64);

impl FaceId {
    /// Creates a new `FaceId` from a raw `u64` value.
    ///
    /// # Errors
    /// Returns `Err(InvalidFaceId)` if `raw == 0`. We reserve 0 as an
    /// invalid or sentinel value.
    ///
    /// # Example
    /// ```rust
    /// # fn try_main() -> Result<(), face_index::index_error::FaceIndexError> {
    /// use face_index::topology::face::FaceId;
    /// let f = FaceId::new(1)?;
    /// assert_eq!(f.get(), 1);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, FaceIndexError> {
        NonZeroU64::new(raw)
            .map(FaceId)
            .ok_or(FaceIndexError::InvalidFaceId)
    }

    /// Returns the inner `u64` value of this `FaceId`.
    ///
    /// This is a cheap, const-time getter. Use it when you need to inspect
    /// or print the raw integer, but prefer to work with `FaceId` otherwise
    /// for type safety.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Custom `Debug` implementation to display as `FaceId(raw_value)`.
impl fmt::Debug for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FaceId").field(&self.get()).finish()
    }
}

/// Custom `Display` implementation to print only the raw integer.
impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// -----------------------------------------------------------------------------
// Testing and assertions
// -----------------------------------------------------------------------------
