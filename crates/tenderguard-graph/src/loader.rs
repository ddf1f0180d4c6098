//! Loading a relationship graph from nested JSON person records
//!
//! The format is an array of root records, each embedding its children and
//! parents as further records:
//!
//! ```json
//! [{
//!   "type": null, "gender": "male",
//!   "firstname": "Aziz", "lastname": "Nurmuhammedov",
//!   "pinfl": 12345678901234,
//!   "children": [ ... ],
//!   "parents": [ ... ]
//! }]
//! ```

use crate::{GraphBuilder, GraphError, RelationshipGraph};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tenderguard_domain::{Gender, Person, PersonId, RelationLabel};
use tracing::info;

/// Bundled sample population
pub const SEED_JSON: &str = include_str!("../data/seed.json");

/// A person record as it appears in fixtures
#[derive(Debug, Deserialize)]
struct PersonRecord {
    #[serde(rename = "type", default)]
    relation: Option<RelationLabel>,
    gender: Gender,
    #[serde(default)]
    firstname: String,
    #[serde(default)]
    lastname: String,
    pinfl: u64,
    #[serde(default)]
    children: Vec<PersonRecord>,
    #[serde(default)]
    parents: Vec<PersonRecord>,
}

/// Where a record hangs in the forest
#[derive(Debug, Clone, Copy)]
enum Attach {
    Root,
    DescendantOf(PersonId),
    AncestorOf(PersonId),
}

/// Reads person forests from JSON
///
/// # Examples
///
/// ```
/// use tenderguard_domain::PersonId;
/// use tenderguard_graph::GraphLoader;
///
/// let graph = GraphLoader::new().load_seed().unwrap();
/// let aziz = graph.resolve(PersonId::from_value(12345678901234)).unwrap();
/// assert_eq!(aziz.first_name, "Aziz");
/// ```
#[derive(Debug, Clone)]
pub struct GraphLoader {
    strict_identifiers: bool,
}

impl Default for GraphLoader {
    fn default() -> Self {
        Self {
            strict_identifiers: true,
        }
    }
}

impl GraphLoader {
    /// Create a loader that requires 14-digit identifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept any non-zero identifier instead of exactly 14 digits
    pub fn with_strict_identifiers(mut self, strict: bool) -> Self {
        self.strict_identifiers = strict;
        self
    }

    /// Load the bundled seed population
    pub fn load_seed(&self) -> Result<RelationshipGraph, GraphError> {
        self.load_str(SEED_JSON)
    }

    /// Load a forest from a JSON string
    pub fn load_str(&self, json: &str) -> Result<RelationshipGraph, GraphError> {
        let records: Vec<PersonRecord> = serde_json::from_str(json)?;
        self.assemble(records)
    }

    /// Load a forest from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<RelationshipGraph, GraphError> {
        let records: Vec<PersonRecord> = serde_json::from_reader(reader)?;
        self.assemble(records)
    }

    /// Load a forest from a JSON file
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<RelationshipGraph, GraphError> {
        let file = File::open(path.as_ref())?;
        let graph = self.load_reader(BufReader::new(file))?;
        info!(
            path = %path.as_ref().display(),
            persons = graph.len(),
            roots = graph.roots().len(),
            "Loaded relationship graph"
        );
        Ok(graph)
    }

    fn assemble(&self, records: Vec<PersonRecord>) -> Result<RelationshipGraph, GraphError> {
        let mut builder = GraphBuilder::new();
        for record in records {
            self.ingest(&mut builder, record, Attach::Root)?;
        }
        builder.build()
    }

    fn ingest(
        &self,
        builder: &mut GraphBuilder,
        record: PersonRecord,
        attach: Attach,
    ) -> Result<PersonId, GraphError> {
        let id = self.identifier(record.pinfl)?;
        let person = Person::new(
            id,
            record.relation.unwrap_or_default(),
            record.gender,
            record.firstname,
            record.lastname,
        );

        match attach {
            Attach::Root => builder.add_root(person)?,
            Attach::DescendantOf(parent) => builder.add_descendant(parent, person)?,
            Attach::AncestorOf(child) => builder.add_ancestor(child, person)?,
        };

        for child in record.children {
            self.ingest(builder, child, Attach::DescendantOf(id))?;
        }
        for parent in record.parents {
            self.ingest(builder, parent, Attach::AncestorOf(id))?;
        }

        Ok(id)
    }

    fn identifier(&self, value: u64) -> Result<PersonId, GraphError> {
        if self.strict_identifiers {
            PersonId::new(value).map_err(GraphError::InvalidIdentifier)
        } else if value == 0 {
            Err(GraphError::InvalidIdentifier("PINFL must not be zero".to_string()))
        } else {
            Ok(PersonId::from_value(value))
        }
    }
}
