//! Aircraft command handler for listing the catalog.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use ecoflight_cli::output::{write_aircraft, OutputFormat};

use super::load_network;

/// Handle the aircraft subcommand.
pub fn handle_list_aircraft(data_dir: Option<&Path>, format: OutputFormat) -> Result<()> {
    let network = load_network(data_dir)?;
    write_aircraft(&mut io::stdout().lock(), network.aircraft(), format)
        .context("failed to write aircraft catalog")
}
