//! Aircraft performance profiles and catalog management.
//!
//! - [`attributes`] - Aircraft performance record and validation
//! - [`catalog`] - Aircraft catalog loading and lookup
//!
//! # Example
//!
//! ```no_run
//! use ecoflight_lib::aircraft::AircraftCatalog;
//!
//! let catalog = AircraftCatalog::from_path(std::path::Path::new("aircraft.csv")).unwrap();
//! let a320 = catalog.get("airbus a320neo").unwrap();
//! println!("{} burns {} kg/km", a320.model, a320.fuel_burn_kg_per_km);
//! ```

pub mod attributes;
pub mod catalog;

pub use attributes::Aircraft;
pub use catalog::AircraftCatalog;

/// Model used when a caller does not name an aircraft.
pub const DEFAULT_AIRCRAFT: &str = "Airbus A320neo";
