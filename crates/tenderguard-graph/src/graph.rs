//! Read-only relationship graph and identifier resolution

use crate::{GraphBuilder, GraphError};
use std::collections::{HashMap, HashSet};
use tenderguard_domain::{Person, PersonDirectory, PersonId};
use tracing::debug;

/// A forest of persons connected by descendant and ancestor edges
///
/// The graph is immutable once built, so it can be shared between threads
/// and queried concurrently without locking. Every query allocates its own
/// traversal state.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    pub(crate) persons: HashMap<PersonId, Person>,
    pub(crate) roots: Vec<PersonId>,
}

impl RelationshipGraph {
    /// Start building a graph
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Number of distinct persons
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether the graph has no persons
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Root identifiers, in load order
    pub fn roots(&self) -> &[PersonId] {
        &self.roots
    }

    /// Total number of descendant and ancestor edges
    pub fn edge_count(&self) -> usize {
        self.persons
            .values()
            .map(|p| p.descendants.len() + p.ancestors.len())
            .sum()
    }

    /// Iterate over every person, in no particular order
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// Resolve an identifier to a person
    ///
    /// Searches the whole forest depth-first, following descendant and
    /// ancestor edges alike, so a person only reachable through someone's
    /// parent list is still found.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::PersonNotFound`] if no reachable person carries `id`.
    pub fn resolve(&self, id: PersonId) -> Result<&Person, GraphError> {
        self.search(id).ok_or(GraphError::PersonNotFound(id))
    }

    /// Depth-first search seeded with every root
    ///
    /// Each identifier is expanded at most once, which keeps cyclic
    /// parent/child data finite. Neighbours are pushed descendants first,
    /// then ancestors; the stack pops them in reverse.
    fn search(&self, id: PersonId) -> Option<&Person> {
        let mut visited: HashSet<PersonId> = HashSet::new();
        let mut stack: Vec<PersonId> = self.roots.clone();

        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }

            let Some(person) = self.persons.get(&current) else {
                continue;
            };

            if person.id == id {
                debug!(%id, expanded = visited.len(), "Resolved person");
                return Some(person);
            }

            visited.insert(current);

            for next in person.descendants.iter().chain(person.ancestors.iter()) {
                if !visited.contains(next) {
                    stack.push(*next);
                }
            }
        }

        debug!(%id, expanded = visited.len(), "Person not found");
        None
    }
}

impl PersonDirectory for RelationshipGraph {
    fn find(&self, id: PersonId) -> Option<&Person> {
        self.search(id)
    }

    fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(&id)
    }
}
