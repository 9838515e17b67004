//! Route optimization entry points.
//!
//! This module provides:
//! - [`OptimizationRequest`] - origin, destination, aircraft, and mode
//! - [`OptimizedPath`] - waypoints plus fuel, CO2, time, and savings summary
//! - [`optimize`] - the single minimum-cost path
//! - [`alternatives`] - up to `k` distinct paths ranked by cost
//!
//! # Example
//!
//! ```ignore
//! use ecoflight_lib::{load_dataset, optimize, DatasetPaths, OptimizationRequest};
//!
//! let network = load_dataset(&DatasetPaths::for_dir("data"))?;
//! let request = OptimizationRequest::parse("JFK", "LAX", "Airbus A320neo", "eco")?;
//! let path = optimize(&network, &request)?;
//! println!("{} ({:.1}% CO2 saved)", path.waypoints.join(" -> "), path.savings_pct);
//! ```

mod alternatives;

pub use alternatives::{alternatives, alternatives_with};

use serde::Serialize;

use crate::aircraft::{Aircraft, DEFAULT_AIRCRAFT};
use crate::cost::{savings_pct, CostModel, OptimizationMode};
use crate::error::{Error, Result};
use crate::network::{normalize_code, AirportId, Network};
use crate::path::{find_route_a_star, SearchConstraints, SearchOptions, SearchResult};

/// High-level optimization request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationRequest {
    pub origin: String,
    pub destination: String,
    pub aircraft: String,
    pub mode: OptimizationMode,
}

impl OptimizationRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        aircraft: impl Into<String>,
        mode: OptimizationMode,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            aircraft: aircraft.into(),
            mode,
        }
    }

    /// Build a request from a free-form mode string.
    pub fn parse(
        origin: impl Into<String>,
        destination: impl Into<String>,
        aircraft: impl Into<String>,
        mode: &str,
    ) -> Result<Self> {
        Ok(Self::new(origin, destination, aircraft, mode.parse()?))
    }

    /// Eco request flown by the default aircraft.
    pub fn eco(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(origin, destination, DEFAULT_AIRCRAFT, OptimizationMode::Eco)
    }

    pub fn with_mode(mut self, mode: OptimizationMode) -> Self {
        self.mode = mode;
        self
    }
}

/// One leg of an optimized path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathLeg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub fuel_kg: f64,
    pub co2_kg: f64,
    pub flight_time_hours: f64,
    pub cost: f64,
}

/// Where the savings baseline distance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineKind {
    /// The network has a direct origin -> destination route.
    DirectRoute,
    /// No direct route; a synthetic great-circle leg is used.
    GreatCircle,
}

/// Single-leg reference flight used for the savings percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Baseline {
    pub kind: BaselineKind,
    pub distance_km: f64,
    pub co2_kg: f64,
}

/// Optimized path with physical totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedPath {
    pub origin: String,
    pub destination: String,
    pub aircraft: String,
    pub mode: OptimizationMode,
    pub waypoints: Vec<String>,
    pub legs: Vec<PathLeg>,
    pub total_distance_km: f64,
    pub total_flight_time_hours: f64,
    pub total_fuel_kg: f64,
    pub total_co2_kg: f64,
    pub total_cost: f64,
    /// CO2 saved versus `baseline`, in percent; negative when worse.
    pub savings_pct: f64,
    pub baseline: Baseline,
    pub expansions: usize,
}

impl OptimizedPath {
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    pub fn total_co2_tonnes(&self) -> f64 {
        self.total_co2_kg / 1000.0
    }

    /// Intermediate stops, excluding origin and destination.
    pub fn stopovers(&self) -> &[String] {
        let len = self.waypoints.len();
        if len <= 2 {
            &[]
        } else {
            &self.waypoints[1..len - 1]
        }
    }
}

/// Find the minimum-cost path for `request` with default search limits.
pub fn optimize(network: &Network, request: &OptimizationRequest) -> Result<OptimizedPath> {
    optimize_with(network, request, &SearchOptions::default())
}

/// Find the minimum-cost path for `request` under explicit search limits.
pub fn optimize_with(
    network: &Network,
    request: &OptimizationRequest,
    options: &SearchOptions,
) -> Result<OptimizedPath> {
    let resolved = ResolvedRequest::resolve(network, request)?;
    let result = resolved.search(network, &resolved.constraints, options)?;
    Ok(resolved.summarize(network, &result))
}

/// Request with airports, aircraft, and cost model looked up.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedRequest<'a> {
    pub(crate) origin: AirportId,
    pub(crate) destination: AirportId,
    pub(crate) aircraft: &'a Aircraft,
    pub(crate) mode: OptimizationMode,
    pub(crate) cost: CostModel,
    pub(crate) constraints: SearchConstraints,
}

impl<'a> ResolvedRequest<'a> {
    pub(crate) fn resolve(network: &'a Network, request: &OptimizationRequest) -> Result<Self> {
        let origin_code = normalize_code(&request.origin);
        if origin_code == normalize_code(&request.destination) {
            return Err(Error::SameOriginDestination { code: origin_code });
        }

        let origin = network.resolve_airport(&request.origin)?;
        let destination = network.resolve_airport(&request.destination)?;
        let aircraft = network.aircraft().resolve(&request.aircraft)?;
        let cost = CostModel::new(aircraft, request.mode);

        Ok(Self {
            origin,
            destination,
            aircraft,
            mode: request.mode,
            cost,
            constraints: SearchConstraints {
                max_leg_km: aircraft.max_range_km,
                ..SearchConstraints::default()
            },
        })
    }

    pub(crate) fn search(
        &self,
        network: &Network,
        constraints: &SearchConstraints,
        options: &SearchOptions,
    ) -> Result<SearchResult> {
        find_route_a_star(
            network,
            &self.cost,
            self.origin,
            self.destination,
            constraints,
            options,
        )
    }

    /// Re-apply the cost model over a found path.
    pub(crate) fn summarize(&self, network: &Network, result: &SearchResult) -> OptimizedPath {
        let legs: Vec<PathLeg> = result
            .nodes
            .windows(2)
            .map(|pair| {
                let (from, to) = (pair[0], pair[1]);
                let distance = network
                    .direct_distance(from, to)
                    .unwrap_or_else(|| network.great_circle_km(from, to));
                let metrics = self.cost.leg(distance);
                PathLeg {
                    from: network.code(from).to_string(),
                    to: network.code(to).to_string(),
                    distance_km: metrics.distance_km,
                    fuel_kg: metrics.fuel_kg,
                    co2_kg: metrics.co2_kg,
                    flight_time_hours: metrics.flight_time_hours,
                    cost: metrics.cost,
                }
            })
            .collect();

        let total_distance_km = legs.iter().map(|leg| leg.distance_km).sum();
        let total_flight_time_hours = legs.iter().map(|leg| leg.flight_time_hours).sum();
        let total_fuel_kg = legs.iter().map(|leg| leg.fuel_kg).sum();
        let total_co2_kg: f64 = legs.iter().map(|leg| leg.co2_kg).sum();
        // Same summation order as the search, so this reproduces its g-score.
        let total_cost = legs.iter().fold(0.0, |acc, leg| acc + leg.cost);

        let baseline = self.baseline(network);

        OptimizedPath {
            origin: network.code(self.origin).to_string(),
            destination: network.code(self.destination).to_string(),
            aircraft: self.aircraft.model.clone(),
            mode: self.mode,
            waypoints: result
                .nodes
                .iter()
                .map(|&id| network.code(id).to_string())
                .collect(),
            legs,
            total_distance_km,
            total_flight_time_hours,
            total_fuel_kg,
            total_co2_kg,
            total_cost,
            savings_pct: savings_pct(baseline.co2_kg, total_co2_kg),
            baseline,
            expansions: result.expansions,
        }
    }

    fn baseline(&self, network: &Network) -> Baseline {
        let (kind, distance_km) = match network.direct_distance(self.origin, self.destination) {
            Some(distance) => (BaselineKind::DirectRoute, distance),
            None => (
                BaselineKind::GreatCircle,
                network.great_circle_km(self.origin, self.destination),
            ),
        };
        Baseline {
            kind,
            distance_km,
            co2_kg: self.cost.leg(distance_km).co2_kg,
        }
    }
}
