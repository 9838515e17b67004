//! A* search over the flight network.
//!
//! The search keeps an open min-heap keyed by `f = g + h` and a closed set of
//! finalized airports. Ties on `f` are broken by the smaller heuristic value
//! and then by the smaller airport code, which keeps results deterministic.
//! A closed airport is never reopened; together with a consistent heuristic
//! this makes the first expansion of the goal optimal and the returned path
//! simple.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use tracing::debug;

use crate::cost::CostModel;
use crate::error::{Error, Result};
use crate::heuristic::Heuristic;
use crate::network::{AirportId, Edge, Network};

/// Default cap on the number of airports a single search may expand.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// Shared flag a caller can set to stop an in-flight search.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// Resource limits for a search.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of airports expanded before giving up.
    pub max_expansions: usize,
    /// Checked between iterations when present.
    pub cancel: Option<CancelFlag>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            cancel: None,
        }
    }
}

impl SearchOptions {
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

/// Request-scoped restrictions on which edges the search may use.
///
/// These never touch the shared [`Network`].
#[derive(Debug, Default, Clone)]
pub struct SearchConstraints {
    /// Longest leg the aircraft can fly.
    pub max_leg_km: Option<f64>,
    /// Directed legs that must not be used.
    pub excluded_legs: HashSet<(AirportId, AirportId)>,
}

impl SearchConstraints {
    fn allows(&self, from: AirportId, edge: &Edge) -> bool {
        if let Some(limit) = self.max_leg_km {
            if edge.distance_km > limit {
                return false;
            }
        }

        !self.excluded_legs.contains(&(from, edge.target))
    }
}

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Airports from start to goal inclusive.
    pub nodes: Vec<AirportId>,
    /// Sum of leg costs along `nodes`.
    pub cost: f64,
    /// Number of airports expanded.
    pub expansions: usize,
}

/// Run A* from `start` to `goal` under `constraints`.
///
/// Fails with [`Error::NoPath`] when the goal is unreachable,
/// [`Error::ExpansionLimitExceeded`] when the budget in `options` is spent,
/// and [`Error::Cancelled`] when the caller's flag is set.
pub fn find_route_a_star(
    network: &Network,
    cost: &CostModel,
    start: AirportId,
    goal: AirportId,
    constraints: &SearchConstraints,
    options: &SearchOptions,
) -> Result<SearchResult> {
    for id in [start, goal] {
        if network.airport_by_id(id).is_none() {
            return Err(Error::UnknownAirport {
                code: format!("#{id}"),
                suggestions: Vec::new(),
            });
        }
    }
    if start == goal {
        return Err(Error::SameOriginDestination {
            code: network.code(start).to_string(),
        });
    }

    let heuristic = Heuristic::new(network, *cost, goal);
    let count = network.airport_count();
    let mut g_score = vec![f64::INFINITY; count];
    let mut parents: Vec<Option<AirportId>> = vec![None; count];
    let mut closed = vec![false; count];
    let mut queue = BinaryHeap::new();
    let mut expansions = 0usize;

    g_score[start] = 0.0;
    queue.push(AStarEntry::new(start, 0.0, heuristic.estimate(start)));

    while let Some(entry) = queue.pop() {
        if options.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let node = entry.node;
        if closed[node] || entry.cost.0 > g_score[node] {
            continue;
        }

        if node == goal {
            let nodes = reconstruct_path(&parents, start, goal);
            debug!(
                start = network.code(start),
                goal = network.code(goal),
                expansions,
                cost = g_score[goal],
                "a* search reached goal"
            );
            return Ok(SearchResult {
                nodes,
                cost: g_score[goal],
                expansions,
            });
        }

        if expansions >= options.max_expansions {
            return Err(Error::ExpansionLimitExceeded {
                limit: options.max_expansions,
            });
        }
        expansions += 1;
        closed[node] = true;

        let current_score = g_score[node];
        for edge in network.edges(node) {
            let next = edge.target;
            if closed[next] || !constraints.allows(node, edge) {
                continue;
            }

            let tentative_g = current_score + cost.leg_cost(edge.distance_km);
            if tentative_g < g_score[next] {
                g_score[next] = tentative_g;
                parents[next] = Some(node);
                queue.push(AStarEntry::new(next, tentative_g, heuristic.estimate(next)));
            }
        }
    }

    debug!(
        start = network.code(start),
        goal = network.code(goal),
        expansions,
        "a* search exhausted open set"
    );
    Err(Error::NoPath {
        origin: network.code(start).to_string(),
        destination: network.code(goal).to_string(),
    })
}

fn reconstruct_path(
    parents: &[Option<AirportId>],
    start: AirportId,
    goal: AirportId,
) -> Vec<AirportId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: AirportId,
    cost: FloatOrd,
    heuristic: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: AirportId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            heuristic: FloatOrd(heuristic),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest f, then smallest h, then smallest id.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
