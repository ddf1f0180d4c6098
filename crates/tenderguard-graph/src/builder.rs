//! Incremental construction of a [`RelationshipGraph`]

use crate::{GraphError, RelationshipGraph};
use std::collections::HashMap;
use tenderguard_domain::{Person, PersonId};

/// Builds a relationship graph one person or edge at a time
///
/// Adding a person whose identifier is already present merges the two
/// records: edges are unioned in first-seen order and the first record's
/// relation label is kept. Records that disagree on name or gender are
/// rejected, since identifiers must be globally unique.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    persons: HashMap<PersonId, Person>,
    roots: Vec<PersonId>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person as a root of the forest
    pub fn add_root(&mut self, person: Person) -> Result<PersonId, GraphError> {
        let id = self.insert(person)?;
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        Ok(id)
    }

    /// Add a person and record them as a child of `parent`
    ///
    /// Only the descendant edge is recorded; no ancestor back-edge is implied.
    pub fn add_descendant(&mut self, parent: PersonId, child: Person) -> Result<PersonId, GraphError> {
        self.require(parent)?;
        let id = self.insert(child)?;
        self.link_descendant(parent, id)?;
        Ok(id)
    }

    /// Add a person and record them as a parent of `child`
    ///
    /// Only the ancestor edge is recorded; no descendant edge is implied.
    pub fn add_ancestor(&mut self, child: PersonId, parent: Person) -> Result<PersonId, GraphError> {
        self.require(child)?;
        let id = self.insert(parent)?;
        self.link_ancestor(child, id)?;
        Ok(id)
    }

    /// Record an existing person as a child of another existing person
    pub fn link_descendant(&mut self, parent: PersonId, child: PersonId) -> Result<(), GraphError> {
        self.require(child)?;
        let person = self.persons.get_mut(&parent).ok_or(GraphError::UnknownPerson(parent))?;
        push_unique(&mut person.descendants, child);
        Ok(())
    }

    /// Record an existing person as a parent of another existing person
    pub fn link_ancestor(&mut self, child: PersonId, parent: PersonId) -> Result<(), GraphError> {
        self.require(parent)?;
        let person = self.persons.get_mut(&child).ok_or(GraphError::UnknownPerson(child))?;
        push_unique(&mut person.ancestors, parent);
        Ok(())
    }

    /// Finish building
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownPerson`] if a person was added with
    /// pre-populated edges that point at identifiers never added.
    pub fn build(self) -> Result<RelationshipGraph, GraphError> {
        for person in self.persons.values() {
            for edge in person.descendants.iter().chain(person.ancestors.iter()) {
                if !self.persons.contains_key(edge) {
                    return Err(GraphError::UnknownPerson(*edge));
                }
            }
        }

        tracing::debug!(
            persons = self.persons.len(),
            roots = self.roots.len(),
            "Relationship graph built"
        );

        Ok(RelationshipGraph {
            persons: self.persons,
            roots: self.roots,
        })
    }

    fn require(&self, id: PersonId) -> Result<(), GraphError> {
        if self.persons.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownPerson(id))
        }
    }

    fn insert(&mut self, person: Person) -> Result<PersonId, GraphError> {
        let id = person.id;

        match self.persons.get_mut(&id) {
            Some(existing) => {
                if !existing.same_description(&person) {
                    return Err(GraphError::ConflictingRecord {
                        id,
                        existing: describe(existing),
                        incoming: describe(&person),
                    });
                }
                for child in person.descendants {
                    push_unique(&mut existing.descendants, child);
                }
                for parent in person.ancestors {
                    push_unique(&mut existing.ancestors, parent);
                }
            }
            None => {
                self.persons.insert(id, person);
            }
        }

        Ok(id)
    }
}

fn push_unique(edges: &mut Vec<PersonId>, id: PersonId) {
    if !edges.contains(&id) {
        edges.push(id);
    }
}

fn describe(person: &Person) -> String {
    format!("{} ({})", person.full_name(), person.gender.as_str())
}
