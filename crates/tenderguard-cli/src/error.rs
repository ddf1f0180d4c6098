//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Relationship graph error
    #[error("Graph error: {0}")]
    Graph(#[from] tenderguard_graph::GraphError),

    /// Route search error
    #[error("Route error: {0}")]
    Interception(#[from] tenderguard_interception::InterceptionError),

    /// Screening error
    #[error("Screening error: {0}")]
    Gatekeeper(#[from] tenderguard_gatekeeper::GatekeeperError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
