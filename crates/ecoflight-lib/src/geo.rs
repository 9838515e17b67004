//! Great-circle distance between coordinates.
//!
//! Uses the haversine formula on a sphere with the mean Earth radius.
//! **Distance is returned in kilometers**.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and within their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        great_circle_km(self, other)
    }
}

/// Calculate the great-circle distance between two points in kilometers.
///
/// Altitude is ignored.
pub fn great_circle_km(start: &Coordinates, end: &Coordinates) -> f64 {
    let d_lat = (end.latitude - start.latitude).to_radians();
    let d_lon = (end.longitude - start.longitude).to_radians();
    let lat1 = start.latitude.to_radians();
    let lat2 = end.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    // Clamp guards against rounding pushing `a` just past 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
