//! Output formatting for optimized paths and the aircraft catalog.
//!
//! Text rendering is delegated to the library renderers; JSON is written with
//! `serde_json` so scripts can consume the same data the library returns.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use ecoflight_lib::{
    render_aircraft, render_alternatives, render_path, Aircraft, AircraftCatalog, OptimizedPath,
    PathRenderMode,
};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable breakdown with one line per leg.
    #[default]
    Text,
    /// One line per path.
    Compact,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> PathRenderMode {
        match self {
            OutputFormat::Compact => PathRenderMode::Compact,
            _ => PathRenderMode::Detailed,
        }
    }
}

#[derive(Serialize)]
struct AlternativesOutput<'a> {
    requested: usize,
    found: usize,
    paths: &'a [OptimizedPath],
}

#[derive(Serialize)]
struct AircraftOutput<'a> {
    count: usize,
    aircraft: Vec<&'a Aircraft>,
}

/// Write a single optimized path.
pub fn write_path<W: Write>(
    out: &mut W,
    path: &OptimizedPath,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, path),
        _ => out.write_all(render_path(path, format.render_mode()).as_bytes()),
    }
}

/// Write ranked alternatives for a request that asked for `requested` paths.
pub fn write_alternatives<W: Write>(
    out: &mut W,
    paths: &[OptimizedPath],
    requested: usize,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &AlternativesOutput {
                requested,
                found: paths.len(),
                paths,
            },
        ),
        _ => {
            if paths.len() < requested {
                writeln!(
                    out,
                    "Found {} of {} requested paths.",
                    paths.len(),
                    requested
                )?;
            }
            out.write_all(render_alternatives(paths, format.render_mode()).as_bytes())
        }
    }
}

/// Write the aircraft catalog.
pub fn write_aircraft<W: Write>(
    out: &mut W,
    catalog: &AircraftCatalog,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &AircraftOutput {
                count: catalog.len(),
                aircraft: catalog.aircraft_sorted(),
            },
        ),
        _ => {
            if catalog.is_empty() {
                return writeln!(out, "No aircraft available in catalog.");
            }
            writeln!(out, "Available aircraft ({}):", catalog.len())?;
            out.write_all(render_aircraft(catalog).as_bytes())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
