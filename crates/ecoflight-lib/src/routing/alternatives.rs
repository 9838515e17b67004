//! Ranked alternative paths.
//!
//! Alternatives are found by edge deviation. Each accepted path spawns one
//! trial search per leg with that leg excluded on top of the exclusions that
//! produced the path itself. Successful trials go into a candidate pool and
//! every round accepts the cheapest candidate not seen before. Because a
//! trial only ever adds exclusions, a candidate never costs less than the
//! path it deviates from.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use super::{OptimizationRequest, OptimizedPath, ResolvedRequest};
use crate::error::{Error, Result};
use crate::network::{AirportId, Network};
use crate::path::{SearchConstraints, SearchOptions, SearchResult};

/// Up to `k` distinct paths for `request`, cheapest first.
///
/// The first entry equals [`super::optimize`]. Fewer than `k` entries are
/// returned when the network has no further distinct paths.
pub fn alternatives(
    network: &Network,
    request: &OptimizationRequest,
    k: usize,
) -> Result<Vec<OptimizedPath>> {
    alternatives_with(network, request, k, &SearchOptions::default())
}

/// [`alternatives`] with explicit search limits.
///
/// The limits apply to every individual search, not to the whole request.
pub fn alternatives_with(
    network: &Network,
    request: &OptimizationRequest,
    k: usize,
    options: &SearchOptions,
) -> Result<Vec<OptimizedPath>> {
    let resolved = ResolvedRequest::resolve(network, request)?;
    if k == 0 {
        return Ok(Vec::new());
    }

    let first = resolved.search(network, &resolved.constraints, options)?;
    let mut seen: HashSet<Vec<AirportId>> = HashSet::from([first.nodes.clone()]);
    let mut accepted = vec![Candidate {
        result: first,
        constraints: resolved.constraints.clone(),
    }];
    let mut pool: Vec<Candidate> = Vec::new();
    let mut trials = 0usize;

    while accepted.len() < k {
        let Some(last) = accepted.last() else {
            break;
        };

        trials += last.result.nodes.len().saturating_sub(1);
        for candidate in deviations(network, &resolved, last, options)? {
            if seen.insert(candidate.result.nodes.clone()) {
                pool.push(candidate);
            }
        }

        let Some(best) = cheapest(&pool) else {
            break;
        };
        accepted.push(pool.swap_remove(best));
    }

    debug!(
        origin = network.code(resolved.origin),
        destination = network.code(resolved.destination),
        requested = k,
        found = accepted.len(),
        trials,
        "alternative search finished"
    );

    let mut paths: Vec<OptimizedPath> = accepted
        .iter()
        .map(|candidate| resolved.summarize(network, &candidate.result))
        .collect();
    paths.sort_by(|a, b| {
        a.total_cost
            .total_cmp(&b.total_cost)
            .then_with(|| a.waypoints.len().cmp(&b.waypoints.len()))
    });
    Ok(paths)
}

#[derive(Debug)]
struct Candidate {
    result: SearchResult,
    constraints: SearchConstraints,
}

/// One trial search per leg of `base`, each excluding that leg on top of the
/// exclusions that produced `base`.
///
/// Trials without a path are skipped. Any other failure, such as a spent
/// expansion budget or a cancelled request, aborts the whole request.
fn deviations(
    network: &Network,
    resolved: &ResolvedRequest<'_>,
    base: &Candidate,
    options: &SearchOptions,
) -> Result<Vec<Candidate>> {
    let mut found = Vec::new();
    for leg in base.result.nodes.windows(2) {
        let mut constraints = base.constraints.clone();
        constraints.excluded_legs.insert((leg[0], leg[1]));

        match resolved.search(network, &constraints, options) {
            Ok(result) => found.push(Candidate {
                result,
                constraints,
            }),
            Err(Error::NoPath { .. }) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(found)
}

fn cheapest(pool: &[Candidate]) -> Option<usize> {
    pool.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_results(&a.result, &b.result))
        .map(|(index, _)| index)
}

fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    a.cost
        .total_cmp(&b.cost)
        .then_with(|| a.nodes.len().cmp(&b.nodes.len()))
        .then_with(|| a.nodes.cmp(&b.nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::{Aircraft, AircraftCatalog};
    use crate::cost::OptimizationMode;
    use crate::network::{load_network, Airport, Route};
    use crate::path::CancelFlag;

    /// Three two-leg paths AAA -> {BBB, CCC, EEE} -> DDD with distinct lengths.
    fn diamond() -> Network {
        let airports = vec![
            Airport::new("AAA", "Origin", 0.0, 0.0),
            Airport::new("BBB", "North", 1.0, 5.0),
            Airport::new("CCC", "South", -2.0, 5.0),
            Airport::new("DDD", "Destination", 0.0, 10.0),
            Airport::new("EEE", "Far North", 4.0, 5.0),
        ];
        let routes = vec![
            Route::great_circle("AAA", "BBB"),
            Route::great_circle("BBB", "DDD"),
            Route::great_circle("AAA", "CCC"),
            Route::great_circle("CCC", "DDD"),
            Route::great_circle("AAA", "EEE"),
            Route::great_circle("EEE", "DDD"),
        ];
        let catalog =
            AircraftCatalog::from_records(vec![Aircraft::new("Test Jet", "Acme", 3.0, 900.0)])
                .expect("valid catalog");
        load_network(airports, routes, catalog).expect("valid network")
    }

    /// Direct AAA -> DDD plus a detour through BBB that needs one more
    /// expansion to find.
    fn triangle() -> Network {
        let airports = vec![
            Airport::new("AAA", "Origin", 0.0, 0.0),
            Airport::new("BBB", "Detour", 4.0, 5.0),
            Airport::new("DDD", "Destination", 0.0, 10.0),
        ];
        let routes = vec![
            Route::great_circle("AAA", "DDD"),
            Route::great_circle("AAA", "BBB"),
            Route::great_circle("BBB", "DDD"),
        ];
        let catalog =
            AircraftCatalog::from_records(vec![Aircraft::new("Test Jet", "Acme", 3.0, 900.0)])
                .expect("valid catalog");
        load_network(airports, routes, catalog).expect("valid network")
    }

    fn request() -> OptimizationRequest {
        OptimizationRequest::new("AAA", "DDD", "Test Jet", OptimizationMode::Eco)
    }

    #[test]
    fn returns_distinct_paths_in_cost_order() {
        let paths = alternatives(&diamond(), &request(), 3).expect("paths exist");
        let waypoints: Vec<Vec<String>> = paths.iter().map(|p| p.waypoints.clone()).collect();
        assert_eq!(
            waypoints,
            vec![
                vec!["AAA", "BBB", "DDD"],
                vec!["AAA", "CCC", "DDD"],
                vec!["AAA", "EEE", "DDD"],
            ]
        );
        assert!(paths
            .windows(2)
            .all(|pair| pair[0].total_cost <= pair[1].total_cost));
    }

    #[test]
    fn stops_when_no_more_paths_exist() {
        let paths = alternatives(&diamond(), &request(), 10).expect("paths exist");
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn zero_alternatives_is_empty() {
        let paths = alternatives(&diamond(), &request(), 0).expect("valid request");
        assert!(paths.is_empty());
    }

    #[test]
    fn first_alternative_matches_optimize() {
        let network = diamond();
        let best = super::super::optimize(&network, &request()).expect("path exists");
        let paths = alternatives(&network, &request(), 2).expect("paths exist");
        assert_eq!(paths[0].waypoints, best.waypoints);
        assert_eq!(paths[0].total_cost, best.total_cost);
    }

    #[test]
    fn trial_over_budget_fails_the_request() {
        let network = triangle();
        let options = SearchOptions::default().with_max_expansions(1);

        let best = super::super::optimize_with(&network, &request(), &options)
            .expect("direct route fits the budget");
        assert_eq!(best.waypoints, vec!["AAA", "DDD"]);
        assert_eq!(best.expansions, 1);

        let err = alternatives_with(&network, &request(), 2, &options).expect_err("detour");
        assert!(matches!(err, Error::ExpansionLimitExceeded { limit: 1 }));

        let paths = alternatives(&network, &request(), 2).expect("paths exist");
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn cancellation_after_first_search_stops_trials() {
        let network = triangle();
        let resolved = ResolvedRequest::resolve(&network, &request()).expect("valid request");
        let flag = CancelFlag::new();
        let options = SearchOptions::default().with_cancel_flag(flag.clone());

        let first = resolved
            .search(&network, &resolved.constraints, &options)
            .expect("first search runs");
        flag.cancel();

        let base = Candidate {
            result: first,
            constraints: resolved.constraints.clone(),
        };
        let err = deviations(&network, &resolved, &base, &options).expect_err("cancelled");
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn trials_without_a_path_are_skipped() {
        let network = diamond();
        let resolved = ResolvedRequest::resolve(&network, &request()).expect("valid request");
        let options = SearchOptions::default();
        let first = resolved
            .search(&network, &resolved.constraints, &options)
            .expect("first search runs");

        let mut constraints = resolved.constraints.clone();
        let aaa = network.airport_id("AAA").expect("AAA");
        for other in ["CCC", "EEE"] {
            let id = network.airport_id(other).expect("known airport");
            constraints.excluded_legs.insert((aaa, id));
        }
        let base = Candidate {
            result: first,
            constraints,
        };
        let found = deviations(&network, &resolved, &base, &options).expect("no hard failure");
        assert!(found.is_empty());
    }
}
