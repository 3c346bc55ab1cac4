//! Index module: incremental dense index maps and their property adapters.
#![warn(missing_docs)]

pub mod index_map;
pub mod property;

pub use index_map::{ElementIndexMap, FaceIndexMap};
pub use property::IndexProperty;
