use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::aircraft::AircraftCatalog;
use crate::error::{Error, Result};
use crate::network::{load_network, Airport, Network, Route};

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "ECOFLIGHT_DATA_DIR";

const AIRPORTS_FILENAME: &str = "airports.csv";
const ROUTES_FILENAME: &str = "routes.csv";
const AIRCRAFT_FILENAME: &str = "aircraft.csv";

/// Locations of the three CSV tables that make up a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airports: PathBuf,
    pub routes: PathBuf,
    pub aircraft: PathBuf,
}

impl DatasetPaths {
    /// Standard file names inside `dir`.
    pub fn for_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            airports: dir.join(AIRPORTS_FILENAME),
            routes: dir.join(ROUTES_FILENAME),
            aircraft: dir.join(AIRCRAFT_FILENAME),
        }
    }
}

/// Resolve the data directory.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `ECOFLIGHT_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    default_data_dir()
}

/// Platform data directory, e.g. `~/.local/share/ecoflight` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "ecoflight", "ecoflight").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Read all three tables and build a validated [`Network`].
pub fn load_dataset(paths: &DatasetPaths) -> Result<Network> {
    let aircraft = AircraftCatalog::from_path(&paths.aircraft)?;
    let airports: Vec<Airport> = read_table(&paths.airports)?;
    let routes: Vec<Route> = read_table(&paths.routes)?;

    info!(
        airports = airports.len(),
        routes = routes.len(),
        aircraft = aircraft.len(),
        "loaded dataset from {}",
        paths.airports.parent().unwrap_or(Path::new(".")).display()
    );

    load_network(airports, routes, aircraft)
}

/// Resolve the data directory and load the dataset found there.
pub fn load_default_dataset(target: Option<&Path>) -> Result<Network> {
    let dir = resolve_data_dir(target)?;
    load_dataset(&DatasetPaths::for_dir(dir))
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading csv table");
    read_records(File::open(path)?)
}

/// Deserialize every row of a headered CSV table.
pub(crate) fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_directory_wins() {
        let dir = Path::new("/tmp/ecoflight-explicit");
        assert_eq!(resolve_data_dir(Some(dir)).unwrap(), dir.to_path_buf());
    }

    #[test]
    fn paths_use_standard_file_names() {
        let paths = DatasetPaths::for_dir("/data");
        assert_eq!(paths.airports, PathBuf::from("/data/airports.csv"));
        assert_eq!(paths.routes, PathBuf::from("/data/routes.csv"));
        assert_eq!(paths.aircraft, PathBuf::from("/data/aircraft.csv"));
    }

    #[test]
    fn missing_table_reports_path() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join("aircraft.csv"),
            "model,manufacturer,fuel_burn_kg_per_km,cruise_speed_kmh\nTest Jet,Acme,3.0,900\n",
        )
        .expect("write aircraft");

        let err = load_dataset(&DatasetPaths::for_dir(dir.path())).expect_err("no airports");
        match err {
            Error::DatasetNotFound { path } => assert!(path.ends_with("airports.csv")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn loads_tables_with_optional_columns() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join("aircraft.csv"),
            "model,manufacturer,fuel_burn_kg_per_km,cruise_speed_kmh,max_range_km\n\
             Test Jet,Acme,3.0,900,\n",
        )
        .expect("write aircraft");
        fs::write(
            dir.path().join("airports.csv"),
            "iata,name,city,country,latitude,longitude\n\
             aaa,Alpha,,,0.0,0.0\n\
             BBB,Beta,,,0.0,1.0\n",
        )
        .expect("write airports");
        fs::write(
            dir.path().join("routes.csv"),
            "origin,destination,distance_km,bidirectional\nAAA,BBB,,true\n",
        )
        .expect("write routes");

        let network = load_dataset(&DatasetPaths::for_dir(dir.path())).expect("valid dataset");
        assert_eq!(network.airport_count(), 2);
        assert_eq!(network.edge_count(), 2);
        assert!(network.airport_id("AAA").is_some());
    }
}
