//! Tenderguard Interception Router
//!
//! Finds the shortest chain of relationships between two persons, used as
//! evidence that a tender creator and a bidder's creator are related.
//!
//! The router provides:
//! - Identifier resolution through any [`PersonDirectory`](tenderguard_domain::PersonDirectory)
//! - Breadth-first shortest-path search over descendant edges
//! - An opt-in kinship scope that also follows ancestor edges
//!
//! # Examples
//!
//! ```
//! use tenderguard_domain::PersonId;
//! use tenderguard_graph::GraphLoader;
//! use tenderguard_interception::InterceptionRouter;
//!
//! let graph = GraphLoader::new().load_seed().unwrap();
//! let router = InterceptionRouter::new(&graph);
//!
//! let route = router
//!     .find_interception_route(PersonId::from_value(12345678901234), PersonId::from_value(77665544332211))
//!     .unwrap();
//! assert_eq!(route.len(), 2);
//! ```

#![warn(missing_docs)]

mod error;
mod route;
mod router;
mod scope;

pub use error::InterceptionError;
pub use route::InterceptionRoute;
pub use router::InterceptionRouter;
pub use scope::RouteScope;
