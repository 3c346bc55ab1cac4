//! Common bound aliases used across topology code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They are zero-cost and only
//! reduce duplication in `where` clauses.

/// Canonical bound set for element identities tracked by an index map.
///
/// Rationale:
/// - `Copy` for cheap pass-by-value through the notification protocol
/// - `Eq + Hash` for the `HashMap`-backed forward store
/// - `Debug` for diagnostics and invariant checks
///
/// Identity and equality must be stable over the element's lifetime and
/// independent of any payload the element carries in its host.
pub trait ElementLike: Copy + Eq + std::hash::Hash + std::fmt::Debug {}
impl<T> ElementLike for T where T: Copy + Eq + std::hash::Hash + std::fmt::Debug {}
