//! Top-level module for host-side abstractions.
//!
//! This module provides the types and traits on the host side of the
//! incremental-indexing protocol:
//! - Strong face handles and bound aliases for element identities
//! - The `ElementSource` enumeration capability consumed by rebuilds
//! - The edit notification protocol (`EditListener`, `EditEvent`)
//! - An in-memory host implementation for tests and examples
//!
//! Most users will drive an [`arrangement::InMemoryArrangement`] or implement
//! [`host::ElementSource`] plus the notification dispatch on their own
//! structure.

pub mod arrangement;
pub mod bounds;
pub mod face;
pub mod host;
pub mod observer;

pub use arrangement::InMemoryArrangement;
pub use face::FaceId;
pub use host::ElementSource;
pub use observer::{EditEvent, EditListener};
