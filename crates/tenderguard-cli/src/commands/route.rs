//! Route command implementation.

use crate::cli::RouteArgs;
use crate::context::Context;
use crate::error::Result;
use tenderguard_domain::PersonId;
use tenderguard_interception::{InterceptionRoute, InterceptionRouter};
use tracing::debug;

/// Execute the route command.
pub fn execute_route(args: RouteArgs, ctx: &Context) -> Result<()> {
    let route = find_route(&args, ctx)?;
    println!("{}", ctx.formatter.format_route(&route)?);
    Ok(())
}

/// Search the context's graph for the route requested by `args`.
///
/// The `--scope` flag overrides the scope from the screening configuration.
pub fn find_route<'c>(args: &RouteArgs, ctx: &'c Context) -> Result<InterceptionRoute<'c>> {
    let scope = args.scope.map(Into::into).unwrap_or(ctx.config.route_scope);
    debug!(source = args.source, target = args.target, scope = scope.as_str(), "Searching route");

    let router = InterceptionRouter::new(&ctx.graph).with_scope(scope);
    Ok(router.find_interception_route(
        PersonId::from_value(args.source),
        PersonId::from_value(args.target),
    )?)
}
