//! Tenderguard Relationship Graph
//!
//! Holds the family/social graph the conflict-of-interest check runs over.
//!
//! # Architecture
//!
//! - Arena of persons keyed by PINFL, edges stored as identifier lists
//! - A forest of roots; no single owner root
//! - Descendant and ancestor edges populated independently (not symmetric)
//! - Built once through [`GraphBuilder`] or [`GraphLoader`], read-only afterwards
//!
//! # Examples
//!
//! ```
//! use tenderguard_domain::{Gender, Person, PersonId, RelationLabel};
//! use tenderguard_graph::RelationshipGraph;
//!
//! let parent = PersonId::from_value(111);
//! let child = PersonId::from_value(222);
//!
//! let mut builder = RelationshipGraph::builder();
//! builder.add_root(Person::new(parent, RelationLabel::Unspecified, Gender::Male, "A", "")).unwrap();
//! builder.add_descendant(parent, Person::new(child, RelationLabel::Children, Gender::Female, "B", "")).unwrap();
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.resolve(child).unwrap().first_name, "B");
//! assert!(graph.resolve(PersonId::from_value(999)).is_err());
//! ```

#![warn(missing_docs)]

mod builder;
mod graph;
mod loader;

pub use builder::GraphBuilder;
pub use graph::RelationshipGraph;
pub use loader::{GraphLoader, SEED_JSON};

use tenderguard_domain::PersonId;
use thiserror::Error;

/// Errors that can occur while building or querying the graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// No person with this identifier is reachable from the roots
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    /// An edge or attachment point references a person that was never added
    #[error("Unknown person referenced: {0}")]
    UnknownPerson(PersonId),

    /// Two records share an identifier but describe different people
    #[error("Conflicting records for {id}: '{existing}' vs '{incoming}'")]
    ConflictingRecord {
        /// Shared identifier
        id: PersonId,
        /// Description already in the graph
        existing: String,
        /// Description that was rejected
        incoming: String,
    },

    /// Identifier failed validation
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Failed to read a fixture
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture is not valid JSON for a person forest
    #[error("Invalid graph data: {0}")]
    Parse(#[from] serde_json::Error),
}
