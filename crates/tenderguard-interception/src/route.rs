//! The result of a route search

use tenderguard_domain::{Person, PersonId};

/// An ordered chain of persons from a source to a target
///
/// - empty: no connection within the searched scope
/// - one person: source and target are the same person
/// - two or more: the target is related to the source through `len() - 1` edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptionRoute<'g> {
    persons: Vec<&'g Person>,
}

impl<'g> InterceptionRoute<'g> {
    pub(crate) fn new(persons: Vec<&'g Person>) -> Self {
        Self { persons }
    }

    /// A route that connects nothing
    pub fn empty() -> Self {
        Self { persons: Vec::new() }
    }

    /// Number of persons on the route
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether no connection was found
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Number of edges walked
    pub fn hops(&self) -> usize {
        self.persons.len().saturating_sub(1)
    }

    /// Whether the route is longer than `max_len` persons
    ///
    /// With the usual threshold of 1 this flags every route that links two
    /// different persons.
    pub fn exceeds(&self, max_len: usize) -> bool {
        self.persons.len() > max_len
    }

    /// Persons on the route, source first
    pub fn persons(&self) -> &[&'g Person] {
        &self.persons
    }

    /// Identifiers on the route, source first
    pub fn ids(&self) -> Vec<PersonId> {
        self.persons.iter().map(|p| p.id).collect()
    }

    /// First person on the route
    pub fn source(&self) -> Option<&'g Person> {
        self.persons.first().copied()
    }

    /// Last person on the route
    pub fn target(&self) -> Option<&'g Person> {
        self.persons.last().copied()
    }
}
