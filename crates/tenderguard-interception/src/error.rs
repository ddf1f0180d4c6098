//! Interception error types

use tenderguard_domain::PersonId;
use thiserror::Error;

/// Errors that can occur during route search
///
/// An absent connection is not an error; it is an empty route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterceptionError {
    /// An endpoint identifier does not resolve to any person
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
}
