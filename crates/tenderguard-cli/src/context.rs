//! Shared state for command execution.

use crate::cli::Cli;
use crate::error::Result;
use crate::output::{Formatter, OutputFormat};
use tenderguard_gatekeeper::ScreeningConfig;
use tenderguard_graph::{GraphLoader, RelationshipGraph};
use tracing::info;

/// Everything a command needs: the graph, the rules and the formatter.
pub struct Context {
    /// Loaded relationship graph
    pub graph: RelationshipGraph,

    /// Screening rules
    pub config: ScreeningConfig,

    /// Output formatter
    pub formatter: Formatter,
}

impl Context {
    /// Build the context from parsed arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let loader = GraphLoader::new().with_strict_identifiers(!cli.lenient_ids);
        let graph = match &cli.graph {
            Some(path) => loader.load_path(path)?,
            None => {
                info!("No graph file given, using bundled seed data");
                loader.load_seed()?
            }
        };

        let config = match &cli.config {
            Some(path) => ScreeningConfig::from_file(path)?,
            None => ScreeningConfig::default(),
        };

        let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
        let formatter = Formatter::new(format, !cli.no_color);

        Ok(Self::new(graph, config, formatter))
    }

    /// Assemble a context from already-loaded parts.
    pub fn new(graph: RelationshipGraph, config: ScreeningConfig, formatter: Formatter) -> Self {
        Self {
            graph,
            config,
            formatter,
        }
    }
}
