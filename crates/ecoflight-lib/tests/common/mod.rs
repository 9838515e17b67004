//! Common test utilities and fixture helpers.
//!
//! Provides the checked-in CSV dataset under `docs/fixtures` and small
//! synthetic networks whose costs can be worked out by hand.

use std::path::PathBuf;

use ecoflight_lib::{
    load_dataset, load_network, Aircraft, AircraftCatalog, Airport, DatasetPaths, Network, Route,
};

/// Model name of the synthetic aircraft used by hand-computed scenarios.
#[allow(dead_code)]
pub const TEST_JET: &str = "Test Jet";

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The US fixture network: twelve airports, HNL/OGG disconnected from the rest.
#[allow(dead_code)]
pub fn fixture_network() -> Network {
    load_dataset(&DatasetPaths::for_dir(fixtures_dir())).expect("fixture dataset loads")
}

/// 3 kg/km, 900 km/h, unlimited range.
#[allow(dead_code)]
pub fn test_catalog() -> AircraftCatalog {
    AircraftCatalog::from_records(vec![Aircraft::new(TEST_JET, "Acme", 3.0, 900.0)])
        .expect("valid catalog")
}

/// Three equatorial airports ~500 km apart with legs A-B 500, B-C 500 and a
/// direct A-C of 1500 km.
#[allow(dead_code)]
pub fn abc_network() -> Network {
    let airports = vec![
        Airport::new("AAA", "Alpha", 0.0, 0.0),
        Airport::new("BBB", "Bravo", 0.0, 4.4966),
        Airport::new("CCC", "Charlie", 0.0, 8.9932),
    ];
    let routes = vec![
        Route::new("AAA", "BBB", 500.0).bidirectional(),
        Route::new("BBB", "CCC", 500.0).bidirectional(),
        Route::new("AAA", "CCC", 1500.0).bidirectional(),
    ];
    load_network(airports, routes, test_catalog()).expect("valid network")
}

/// Small mesh with several competing paths between `AAA` and `FFF`.
#[allow(dead_code)]
pub fn mesh_network() -> Network {
    let airports = vec![
        Airport::new("AAA", "A", 0.0, 0.0),
        Airport::new("BBB", "B", 2.0, 3.0),
        Airport::new("CCC", "C", -1.5, 3.5),
        Airport::new("DDD", "D", 3.0, 7.0),
        Airport::new("EEE", "E", -2.0, 7.5),
        Airport::new("FFF", "F", 0.5, 11.0),
        Airport::new("GGG", "G", 6.0, 5.0),
    ];
    let routes = vec![
        Route::great_circle("AAA", "BBB").bidirectional(),
        Route::great_circle("AAA", "CCC").bidirectional(),
        Route::great_circle("BBB", "CCC").bidirectional(),
        Route::great_circle("BBB", "DDD").bidirectional(),
        Route::great_circle("CCC", "EEE").bidirectional(),
        Route::great_circle("DDD", "EEE").bidirectional(),
        Route::great_circle("DDD", "FFF").bidirectional(),
        Route::great_circle("EEE", "FFF").bidirectional(),
        Route::great_circle("BBB", "GGG").bidirectional(),
        Route::great_circle("GGG", "FFF"),
        Route::new("CCC", "FFF", 2100.0),
    ];
    load_network(airports, routes, test_catalog()).expect("valid network")
}

/// Cost of every simple path from `from` to `to`, found by exhaustive DFS.
#[allow(dead_code)]
pub fn all_simple_path_costs(
    network: &Network,
    cost: &ecoflight_lib::CostModel,
    from: usize,
    to: usize,
) -> Vec<(Vec<usize>, f64)> {
    fn walk(
        network: &Network,
        cost: &ecoflight_lib::CostModel,
        to: usize,
        path: &mut Vec<usize>,
        so_far: f64,
        out: &mut Vec<(Vec<usize>, f64)>,
    ) {
        let Some(&node) = path.last() else {
            return;
        };
        if node == to {
            out.push((path.clone(), so_far));
            return;
        }
        for edge in network.edges(node) {
            if path.contains(&edge.target) {
                continue;
            }
            path.push(edge.target);
            walk(
                network,
                cost,
                to,
                path,
                so_far + cost.leg_cost(edge.distance_km),
                out,
            );
            path.pop();
        }
    }

    let mut out = Vec::new();
    walk(network, cost, to, &mut vec![from], 0.0, &mut out);
    out
}
