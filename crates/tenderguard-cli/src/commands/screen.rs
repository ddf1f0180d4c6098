//! Screen command implementation.

use crate::cli::ScreenArgs;
use crate::context::Context;
use crate::error::{CliError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tenderguard_domain::{Organization, Tender, TenderPosition};
use tenderguard_gatekeeper::{Gatekeeper, ScreeningResult};

/// Execute the screen command.
///
/// Returns whether the bid was accepted.
pub fn execute_screen(args: ScreenArgs, ctx: &Context) -> Result<bool> {
    let result = screen_bid(&args, ctx)?;
    println!("{}", ctx.formatter.format_screening(&result)?);
    Ok(result.is_accepted())
}

/// Read the bid files named in `args` and screen them against the context.
pub fn screen_bid(args: &ScreenArgs, ctx: &Context) -> Result<ScreeningResult> {
    let tender: Tender = read_json(&args.tender)?;
    let organization: Organization = read_json(&args.organization)?;
    let positions: Vec<TenderPosition> = match &args.positions {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let now = match args.now {
        Some(now) => now,
        None => current_millis()?,
    };

    let gatekeeper = Gatekeeper::new(ctx.config.clone());
    Ok(gatekeeper.screen(&tender, &organization, &positions, &ctx.graph, now)?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn current_millis() -> Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| CliError::InvalidInput(format!("System clock is before Unix epoch: {}", e)))?;
    u64::try_from(elapsed.as_millis())
        .map_err(|_| CliError::InvalidInput("System clock out of range".to_string()))
}
