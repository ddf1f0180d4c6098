//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tenderguard_interception::RouteScope;

/// Tenderguard CLI - screen tender bids for conflicts of interest.
#[derive(Debug, Parser)]
#[command(name = "tenderguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Relationship graph JSON file (defaults to the bundled seed data)
    #[arg(short, long, global = true, env = "TENDERGUARD_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Screening configuration TOML file
    #[arg(short, long, global = true, env = "TENDERGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Accept identifiers that are not exactly 14 digits when loading the graph
    #[arg(long, global = true)]
    pub lenient_ids: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a person by PINFL
    Resolve(ResolveArgs),

    /// Find the shortest relationship route between two persons
    Route(RouteArgs),

    /// Screen a bid against a tender
    Screen(ScreenArgs),
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Person identifier
    pub pinfl: u64,
}

/// Arguments for the route command.
#[derive(Debug, Parser)]
pub struct RouteArgs {
    /// Source identifier (tender creator)
    pub source: u64,

    /// Target identifier (organization creator)
    pub target: u64,

    /// Edges to follow (defaults to the configured scope)
    #[arg(short, long, value_enum)]
    pub scope: Option<ScopeArg>,
}

/// Arguments for the screen command.
#[derive(Debug, Parser)]
pub struct ScreenArgs {
    /// Tender JSON file
    #[arg(short, long)]
    pub tender: PathBuf,

    /// Bidding organization JSON file
    #[arg(short, long)]
    pub organization: PathBuf,

    /// JSON array of bids already recorded for the tender
    #[arg(short, long)]
    pub positions: Option<PathBuf>,

    /// Screening time in milliseconds since Unix epoch (defaults to now)
    #[arg(long)]
    pub now: Option<u64>,
}

/// Route scope argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ScopeArg {
    /// Descendant edges only
    Descendants,
    /// Descendant and ancestor edges
    Kinship,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}

impl From<ScopeArg> for RouteScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Descendants => RouteScope::Descendants,
            ScopeArg::Kinship => RouteScope::Kinship,
        }
    }
}
