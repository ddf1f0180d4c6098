//! Tenderguard CLI library.
//!
//! This library provides the core functionality for the `tenderguard`
//! command-line interface: argument parsing, graph and config loading,
//! command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use context::Context;
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
