//! Multi-objective cost model.
//!
//! Turns a leg distance into physical quantities (fuel, CO2, flight time) for
//! a given aircraft, and into the scalar cost minimized by the search. The
//! scalar cost blends fuel in tonnes and time in hours with the weights of
//! the requested [`OptimizationMode`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::aircraft::Aircraft;
use crate::error::Error;

/// Fractional fuel penalty applied once per leg for takeoff and landing.
pub const FUEL_OVERHEAD_FACTOR: f64 = 0.15;

/// Kilograms of CO2 emitted per kilogram of jet fuel burned.
pub const CO2_PER_KG_FUEL: f64 = 3.16;

/// Optimization preference selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationMode {
    /// Favour fuel burn over flight time.
    #[default]
    Eco,
    Balanced,
    /// Favour flight time over fuel burn.
    Fast,
}

impl OptimizationMode {
    pub const ALL: [OptimizationMode; 3] = [
        OptimizationMode::Eco,
        OptimizationMode::Balanced,
        OptimizationMode::Fast,
    ];

    /// Fuel/time weight pair for this mode.
    pub fn weights(self) -> CostWeights {
        match self {
            OptimizationMode::Eco => CostWeights {
                fuel: 0.7,
                time: 0.3,
            },
            OptimizationMode::Balanced => CostWeights {
                fuel: 0.5,
                time: 0.5,
            },
            OptimizationMode::Fast => CostWeights {
                fuel: 0.3,
                time: 0.7,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationMode::Eco => "eco",
            OptimizationMode::Balanced => "balanced",
            OptimizationMode::Fast => "fast",
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "eco" => Ok(OptimizationMode::Eco),
            "balanced" => Ok(OptimizationMode::Balanced),
            "fast" => Ok(OptimizationMode::Fast),
            _ => Err(Error::InvalidMode {
                mode: value.to_string(),
            }),
        }
    }
}

/// Relative weights of the fuel and time terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostWeights {
    pub fuel: f64,
    pub time: f64,
}

/// Reference magnitudes that bring fuel and time onto one scale.
///
/// Fuel is divided by `fuel_reference_kg` and time by `time_reference_hours`
/// before weighting. The defaults express fuel in tonnes and time in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostNormalization {
    pub fuel_reference_kg: f64,
    pub time_reference_hours: f64,
}

impl Default for CostNormalization {
    fn default() -> Self {
        Self {
            fuel_reference_kg: 1000.0,
            time_reference_hours: 1.0,
        }
    }
}

/// Physical quantities and scalar cost for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegMetrics {
    pub distance_km: f64,
    pub fuel_kg: f64,
    pub co2_kg: f64,
    pub flight_time_hours: f64,
    pub cost: f64,
}

/// Cost model resolved for one request: aircraft rates plus mode weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    weights: CostWeights,
    normalization: CostNormalization,
    fuel_burn_kg_per_km: f64,
    cruise_speed_kmh: f64,
}

impl CostModel {
    pub fn new(aircraft: &Aircraft, mode: OptimizationMode) -> Self {
        Self {
            weights: mode.weights(),
            normalization: CostNormalization::default(),
            fuel_burn_kg_per_km: aircraft.fuel_burn_kg_per_km,
            cruise_speed_kmh: aircraft.cruise_speed_kmh,
        }
    }

    pub fn weights(&self) -> CostWeights {
        self.weights
    }

    /// Fuel burned on one leg, including the per-leg overhead.
    pub fn fuel_kg(&self, distance_km: f64) -> f64 {
        distance_km * self.fuel_burn_kg_per_km * (1.0 + FUEL_OVERHEAD_FACTOR)
    }

    pub fn flight_time_hours(&self, distance_km: f64) -> f64 {
        distance_km / self.cruise_speed_kmh
    }

    /// Scalar cost of flying one leg of `distance_km`.
    pub fn leg_cost(&self, distance_km: f64) -> f64 {
        self.blend(self.fuel_kg(distance_km), self.flight_time_hours(distance_km))
    }

    /// Cost of covering `distance_km` with no per-leg overhead.
    ///
    /// Never exceeds [`CostModel::leg_cost`] for the same distance, which makes
    /// it a valid lower bound for the heuristic.
    pub fn overhead_free_cost(&self, distance_km: f64) -> f64 {
        self.blend(
            distance_km * self.fuel_burn_kg_per_km,
            self.flight_time_hours(distance_km),
        )
    }

    /// All quantities for one leg.
    pub fn leg(&self, distance_km: f64) -> LegMetrics {
        let fuel_kg = self.fuel_kg(distance_km);
        LegMetrics {
            distance_km,
            fuel_kg,
            co2_kg: co2_kg(fuel_kg),
            flight_time_hours: self.flight_time_hours(distance_km),
            cost: self.leg_cost(distance_km),
        }
    }

    fn blend(&self, fuel_kg: f64, time_hours: f64) -> f64 {
        self.weights.fuel * fuel_kg / self.normalization.fuel_reference_kg
            + self.weights.time * time_hours / self.normalization.time_reference_hours
    }
}

/// CO2 emitted by burning `fuel_kg` of jet fuel.
pub fn co2_kg(fuel_kg: f64) -> f64 {
    fuel_kg * CO2_PER_KG_FUEL
}

/// Emissions saved by `path_co2_kg` relative to `baseline_co2_kg`, in percent.
///
/// Negative when the path emits more than the baseline.
pub fn savings_pct(baseline_co2_kg: f64, path_co2_kg: f64) -> f64 {
    if baseline_co2_kg <= 0.0 {
        return 0.0;
    }
    (baseline_co2_kg - path_co2_kg) / baseline_co2_kg * 100.0
}
