//! EcoFlight library entry points.
//!
//! This crate loads an airport/route network and an aircraft catalog from
//! CSV, and finds flight paths that minimize a blend of fuel burn and flight
//! time with A* search. Higher-level consumers (the CLI) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!
//! A loaded [`Network`] is immutable and cheap to clone, so one instance can
//! serve concurrent requests; all per-request state lives inside the search.

#![deny(warnings)]

pub mod aircraft;
pub mod cost;
pub mod dataset;
pub mod error;
mod fuzzy;
pub mod geo;
pub mod heuristic;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use aircraft::{Aircraft, AircraftCatalog, DEFAULT_AIRCRAFT};
pub use cost::{CostModel, LegMetrics, OptimizationMode};
pub use dataset::{load_dataset, load_default_dataset, resolve_data_dir, DatasetPaths};
pub use error::{Error, ErrorKind, Result, StructuralError};
pub use geo::{great_circle_km, Coordinates};
pub use network::{load_network, Airport, AirportId, Network, Route};
pub use output::{render_aircraft, render_alternatives, render_path, PathRenderMode};
pub use path::{find_route_a_star, CancelFlag, SearchOptions, DEFAULT_MAX_EXPANSIONS};
pub use routing::{
    alternatives, alternatives_with, optimize, optimize_with, Baseline, BaselineKind,
    OptimizationRequest, OptimizedPath, PathLeg,
};
