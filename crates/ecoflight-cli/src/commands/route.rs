//! Route and alternatives command handlers.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use ecoflight_cli::output::{write_alternatives, write_path, OutputFormat};
use ecoflight_lib::{
    alternatives_with, optimize_with, OptimizationRequest, SearchOptions, DEFAULT_AIRCRAFT,
    DEFAULT_MAX_EXPANSIONS,
};

use super::load_network;

/// Arguments shared by the route and alternatives subcommands.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Origin airport IATA code.
    #[arg(long = "from")]
    pub from: String,
    /// Destination airport IATA code.
    #[arg(long = "to")]
    pub to: String,
    /// Aircraft model name, matched case-insensitively.
    #[arg(long, default_value = DEFAULT_AIRCRAFT)]
    pub aircraft: String,
    /// Optimization mode: eco, balanced, or fast.
    #[arg(long, default_value = "eco")]
    pub mode: String,
    /// Maximum airports a single search may expand.
    #[arg(long, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    pub max_expansions: usize,
}

impl RouteArgs {
    /// Convert CLI args to a library request.
    pub fn to_request(&self) -> Result<OptimizationRequest> {
        OptimizationRequest::parse(&self.from, &self.to, &self.aircraft, &self.mode)
            .context("invalid route request")
    }

    fn search_options(&self) -> SearchOptions {
        SearchOptions::default().with_max_expansions(self.max_expansions)
    }
}

/// Handle the route subcommand.
pub fn handle_route(
    data_dir: Option<&Path>,
    format: OutputFormat,
    args: &RouteArgs,
) -> Result<()> {
    let request = args.to_request()?;
    let network = load_network(data_dir)?;

    let path = optimize_with(&network, &request, &args.search_options())
        .with_context(|| format!("failed to optimize route {} -> {}", args.from, args.to))?;
    debug!(
        legs = path.leg_count(),
        expansions = path.expansions,
        "route optimized"
    );

    write_path(&mut io::stdout().lock(), &path, format).context("failed to write route")
}

/// Handle the alternatives subcommand.
pub fn handle_alternatives(
    data_dir: Option<&Path>,
    format: OutputFormat,
    args: &RouteArgs,
    count: usize,
) -> Result<()> {
    let request = args.to_request()?;
    let network = load_network(data_dir)?;

    let paths = alternatives_with(&network, &request, count, &args.search_options())
        .with_context(|| {
            format!(
                "failed to compute alternatives for {} -> {}",
                args.from, args.to
            )
        })?;

    write_alternatives(&mut io::stdout().lock(), &paths, count, format)
        .context("failed to write alternatives")
}
