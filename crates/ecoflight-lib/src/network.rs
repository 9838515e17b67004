//! In-memory flight network: airports, routes, and the aircraft catalog.
//!
//! The network is built once by [`load_network`] and is read-only afterwards,
//! so a single instance can be shared across any number of concurrent
//! optimization requests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aircraft::AircraftCatalog;
use crate::error::{Error, Result, StructuralError};
use crate::fuzzy::fuzzy_code_matches;
use crate::geo::{great_circle_km, Coordinates};

/// Dense airport identifier.
///
/// Identifiers are assigned in IATA code order, so comparing two ids gives
/// the same answer as comparing their codes.
pub type AirportId = usize;

/// Airport record as supplied by the surrounding data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(alias = "iata_code", alias = "code")]
    pub iata: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        iata: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            iata: iata.into(),
            name: name.into(),
            city: String::new(),
            country: String::new(),
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Route record as supplied by the surrounding data source.
///
/// When `distance_km` is absent the great-circle distance between the two
/// airports is used. Routes are directed unless `bidirectional` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(alias = "source_airport")]
    pub origin: String,
    #[serde(alias = "destination_airport")]
    pub destination: String,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub bidirectional: bool,
}

impl Route {
    /// Directed route with an explicit distance.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance_km: Some(distance_km),
            bidirectional: false,
        }
    }

    /// Directed route whose distance is derived from airport coordinates.
    pub fn great_circle(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance_km: None,
            bidirectional: false,
        }
    }

    /// Mark the route as flyable in both directions.
    pub fn bidirectional(mut self) -> Self {
        self.bidirectional = true;
        self
    }
}

/// Edge within the flight network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: AirportId,
    pub distance_km: f64,
}

/// Immutable flight network used by the search engine.
#[derive(Debug, Clone)]
pub struct Network {
    airports: Arc<Vec<Airport>>,
    index: Arc<HashMap<String, AirportId>>,
    adjacency: Arc<Vec<Vec<Edge>>>,
    aircraft: Arc<AircraftCatalog>,
    heuristic_scale: f64,
    edge_count: usize,
}

impl Network {
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of directed edges after deduplication.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Airports in code order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn aircraft(&self) -> &AircraftCatalog {
        &self.aircraft
    }

    /// Lookup an airport identifier by IATA code (case-insensitive).
    pub fn airport_id(&self, code: &str) -> Option<AirportId> {
        self.index.get(&normalize_code(code)).copied()
    }

    /// Lookup an airport identifier, or fail with close matches.
    pub fn resolve_airport(&self, code: &str) -> Result<AirportId> {
        self.airport_id(code).ok_or_else(|| Error::UnknownAirport {
            code: code.to_string(),
            suggestions: self.fuzzy_airport_matches(code, 3),
        })
    }

    /// Lookup an airport by IATA code.
    pub fn airport(&self, code: &str) -> Result<&Airport> {
        let id = self.resolve_airport(code)?;
        Ok(&self.airports[id])
    }

    /// Airport for an identifier handed out by this network.
    pub fn airport_by_id(&self, id: AirportId) -> Option<&Airport> {
        self.airports.get(id)
    }

    /// IATA code for an identifier handed out by this network.
    pub fn code(&self, id: AirportId) -> &str {
        self.airports
            .get(id)
            .map(|airport| airport.iata.as_str())
            .unwrap_or("<unknown>")
    }

    /// Outgoing edges of an airport, ordered by target code.
    pub fn edges(&self, id: AirportId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Outgoing `(neighbour code, distance km)` pairs, ordered by neighbour code.
    pub fn neighbours(&self, code: &str) -> Result<Vec<(&str, f64)>> {
        let id = self.resolve_airport(code)?;
        Ok(self
            .edges(id)
            .iter()
            .map(|edge| (self.code(edge.target), edge.distance_km))
            .collect())
    }

    /// Distance of the stored edge `from -> to`, if one exists.
    pub fn direct_distance(&self, from: AirportId, to: AirportId) -> Option<f64> {
        let edges = self.edges(from);
        edges
            .binary_search_by(|edge| edge.target.cmp(&to))
            .ok()
            .map(|pos| edges[pos].distance_km)
    }

    /// Great-circle distance between two airports.
    pub fn great_circle_km(&self, from: AirportId, to: AirportId) -> f64 {
        match (self.airports.get(from), self.airports.get(to)) {
            (Some(a), Some(b)) => great_circle_km(&a.coordinates(), &b.coordinates()),
            _ => 0.0,
        }
    }

    /// Factor in `(0, 1]` applied to great-circle distances by the heuristic.
    ///
    /// Equals the smallest ratio of stored edge distance to great-circle
    /// distance across the network (capped at 1), so that
    /// `scale * great_circle(a, b)` never exceeds any path distance from `a`
    /// to `b`.
    pub fn heuristic_scale(&self) -> f64 {
        self.heuristic_scale
    }

    /// Airport codes similar to `code`, best match first.
    pub fn fuzzy_airport_matches(&self, code: &str, limit: usize) -> Vec<String> {
        fuzzy_code_matches(
            code,
            self.airports.iter().map(|airport| airport.iata.as_str()),
            limit,
        )
    }
}

/// Build a validated network from airport, route, and aircraft records.
///
/// Fails on the first structural problem: duplicate or malformed airports,
/// routes referencing unknown airports, self-loops, or non-positive
/// distances. When several routes connect the same ordered pair, the
/// shortest one is kept.
pub fn load_network<A, R>(airports: A, routes: R, aircraft: AircraftCatalog) -> Result<Network>
where
    A: IntoIterator<Item = Airport>,
    R: IntoIterator<Item = Route>,
{
    let airports = normalize_airports(airports)?;
    let index: HashMap<String, AirportId> = airports
        .iter()
        .enumerate()
        .map(|(id, airport)| (airport.iata.clone(), id))
        .collect();

    let mut edges: BTreeMap<(AirportId, AirportId), f64> = BTreeMap::new();
    let mut route_count = 0usize;
    let mut duplicates = 0usize;

    for route in routes {
        route_count += 1;
        let origin_code = normalize_code(&route.origin);
        let destination_code = normalize_code(&route.destination);

        let lookup = |code: &str| {
            index
                .get(code)
                .copied()
                .ok_or_else(|| StructuralError::UnknownRouteEndpoint {
                    origin: origin_code.clone(),
                    destination: destination_code.clone(),
                    code: code.to_string(),
                })
        };
        let from = lookup(&origin_code)?;
        let to = lookup(&destination_code)?;

        if from == to {
            return Err(StructuralError::SelfLoop { code: origin_code }.into());
        }

        let distance = match route.distance_km {
            Some(distance) => distance,
            None => great_circle_km(&airports[from].coordinates(), &airports[to].coordinates()),
        };
        if !distance.is_finite() || distance <= 0.0 {
            return Err(StructuralError::InvalidRoute {
                origin: origin_code,
                destination: destination_code,
                message: format!("distance must be a finite positive number, got {distance}"),
            }
            .into());
        }

        let mut pairs = vec![(from, to)];
        if route.bidirectional {
            pairs.push((to, from));
        }
        for pair in pairs {
            edges
                .entry(pair)
                .and_modify(|existing| {
                    duplicates += 1;
                    if distance < *existing {
                        *existing = distance;
                    }
                })
                .or_insert(distance);
        }
    }

    if duplicates > 0 {
        debug!(duplicates, "collapsed duplicate edges to their shortest distance");
    }

    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); airports.len()];
    let mut heuristic_scale: f64 = 1.0;
    // BTreeMap iteration yields (from, to) in order, so each list is sorted by target.
    for (&(from, to), &distance_km) in &edges {
        let direct = great_circle_km(&airports[from].coordinates(), &airports[to].coordinates());
        if direct > 0.0 {
            heuristic_scale = heuristic_scale.min(distance_km / direct);
        }
        adjacency[from].push(Edge {
            target: to,
            distance_km,
        });
    }

    if heuristic_scale < 1.0 {
        debug!(
            heuristic_scale,
            "route distances shorter than great-circle; scaling heuristic"
        );
    }

    info!(
        airports = airports.len(),
        routes = route_count,
        edges = edges.len(),
        aircraft = aircraft.len(),
        "loaded flight network"
    );

    Ok(Network {
        airports: Arc::new(airports),
        index: Arc::new(index),
        adjacency: Arc::new(adjacency),
        aircraft: Arc::new(aircraft),
        heuristic_scale,
        edge_count: edges.len(),
    })
}

fn normalize_airports<A>(airports: A) -> Result<Vec<Airport>>
where
    A: IntoIterator<Item = Airport>,
{
    let mut normalized = Vec::new();
    for mut airport in airports {
        airport.iata = normalize_code(&airport.iata);
        if airport.iata.is_empty() {
            return Err(StructuralError::InvalidAirport {
                code: airport.iata,
                message: "IATA code must not be empty".to_string(),
            }
            .into());
        }
        if !airport.coordinates().is_valid() {
            return Err(StructuralError::InvalidAirport {
                code: airport.iata,
                message: format!(
                    "coordinates ({}, {}) are out of range",
                    airport.latitude, airport.longitude
                ),
            }
            .into());
        }
        normalized.push(airport);
    }

    normalized.sort_by(|a, b| a.iata.cmp(&b.iata));
    if let Some(pair) = normalized.windows(2).find(|pair| pair[0].iata == pair[1].iata) {
        return Err(StructuralError::DuplicateAirport {
            code: pair[0].iata.clone(),
        }
        .into());
    }

    Ok(normalized)
}

/// Normalize an IATA code for lookup.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
