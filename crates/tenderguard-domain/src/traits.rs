//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain and the graph
//! implementation. The arena graph lives in `tenderguard-graph`.

use crate::{Person, PersonId};

/// Read-only access to a population of persons
///
/// Implemented by the relationship graph (tenderguard-graph) and consumed by
/// the interception router.
pub trait PersonDirectory {
    /// Search the whole population for `id`, following edges in both
    /// directions from the roots
    ///
    /// Returns `None` when the person is unknown.
    fn find(&self, id: PersonId) -> Option<&Person>;

    /// Direct lookup of a person already known to exist, used to follow edges
    fn person(&self, id: PersonId) -> Option<&Person>;
}
