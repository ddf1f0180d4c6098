//! Tenderguard CLI - screen tender bids for conflicts of interest.

use clap::Parser;
use tenderguard_cli::commands;
use tenderguard_cli::{Cli, Command, Context};
use tracing_subscriber::EnvFilter;

/// Exit code for a bid that failed screening
const EXIT_REJECTED: i32 = 2;

fn main() {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_REJECTED),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `false` when a screened bid was rejected.
fn run() -> tenderguard_cli::Result<bool> {
    let cli = Cli::parse();
    let ctx = Context::load(&cli)?;

    match cli.command {
        Command::Resolve(args) => commands::execute_resolve(args, &ctx)?,
        Command::Route(args) => commands::execute_route(args, &ctx)?,
        Command::Screen(args) => return commands::execute_screen(args, &ctx),
    }

    Ok(true)
}
