// Handlers for CLI subcommands.
//
// main.rs parses arguments and dispatches here; each handler loads the
// dataset it needs and writes its result to stdout.

pub mod aircraft;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use ecoflight_lib::{load_dataset, resolve_data_dir, DatasetPaths, Network};

/// Resolve the data directory and load the network found there.
pub fn load_network(data_dir: Option<&Path>) -> Result<Network> {
    let dir =
        resolve_data_dir(data_dir).context("failed to resolve the EcoFlight data directory")?;
    load_dataset(&DatasetPaths::for_dir(&dir))
        .with_context(|| format!("failed to load dataset from {}", dir.display()))
}
