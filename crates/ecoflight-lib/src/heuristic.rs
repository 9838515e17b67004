//! Admissible A* heuristic.
//!
//! The estimate is the overhead-free cost of flying the (scaled)
//! great-circle distance to the goal with the requested aircraft. Real legs
//! always pay the per-leg fuel overhead and can never be shorter than the
//! scaled great-circle distance, so the estimate never exceeds the true
//! remaining cost. Because the estimate is linear in distance and the
//! great-circle distance obeys the triangle inequality, it is also
//! consistent.

use crate::cost::CostModel;
use crate::geo::{great_circle_km, Coordinates};
use crate::network::{AirportId, Network};

/// Lower bound on the remaining cost to a fixed goal airport.
#[derive(Debug, Clone)]
pub struct Heuristic<'a> {
    network: &'a Network,
    cost: CostModel,
    goal: Option<Coordinates>,
    scale: f64,
}

impl<'a> Heuristic<'a> {
    pub fn new(network: &'a Network, cost: CostModel, goal: AirportId) -> Self {
        Self {
            network,
            cost,
            goal: network.airport_by_id(goal).map(|airport| airport.coordinates()),
            scale: network.heuristic_scale(),
        }
    }

    /// Estimated cost from `node` to the goal.
    pub fn estimate(&self, node: AirportId) -> f64 {
        let Some(goal) = self.goal else {
            return 0.0;
        };
        let Some(current) = self.network.airport_by_id(node) else {
            return 0.0;
        };

        let distance = self.scale * great_circle_km(&current.coordinates(), &goal);
        self.cost.overhead_free_cost(distance)
    }
}
