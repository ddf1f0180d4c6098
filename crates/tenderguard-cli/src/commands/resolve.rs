//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::context::Context;
use crate::error::Result;
use tenderguard_domain::PersonId;

/// Execute the resolve command.
pub fn execute_resolve(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let person = ctx.graph.resolve(PersonId::from_value(args.pinfl))?;
    println!("{}", ctx.formatter.format_person(person)?);
    Ok(())
}
