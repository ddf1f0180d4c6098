//! Tenderguard Domain Layer
//!
//! This crate contains the core value objects shared by every Tenderguard
//! crate. It defines the people that make up the relationship graph, the
//! procurement records screened against it, and the trait seams the graph
//! and router layers implement.
//!
//! ## Key Concepts
//!
//! - **Person**: a vertex of the relationship graph, keyed by a national identifier (PINFL)
//! - **Descendant / ancestor edges**: directed adjacency lists, stored independently
//! - **Tender**: a procurement request created on behalf of a consumer organization
//! - **Organization**: a bidder, created by a person who may be related to the tender creator
//!
//! ## Architecture
//!
//! - Only `serde` for the procurement records
//! - Pure data and invariants, no traversal logic
//! - Traversal lives in `tenderguard-graph` and `tenderguard-interception`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod person;
pub mod relation;
pub mod tender;
pub mod traits;

// Re-exports for convenience
pub use person::{Person, PersonId};
pub use relation::{Gender, RelationLabel};
pub use tender::{Creator, Organization, Tender, TenderItem, TenderPosition};
pub use traits::PersonDirectory;
