mod common;

use std::thread;

use common::fixture_network;
use ecoflight_lib::{alternatives, optimize, Network, OptimizationMode, OptimizationRequest};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn network_is_shareable_across_threads() {
    assert_send_sync::<Network>();
}

#[test]
fn concurrent_requests_match_sequential_results() {
    let network = fixture_network();
    let requests: Vec<OptimizationRequest> = [
        ("JFK", "LAX"),
        ("BOS", "SFO"),
        ("SEA", "ATL"),
        ("LAX", "BOS"),
    ]
    .into_iter()
    .flat_map(|(from, to)| {
        OptimizationMode::ALL
            .into_iter()
            .map(move |mode| OptimizationRequest::eco(from, to).with_mode(mode))
    })
    .collect();

    let sequential: Vec<_> = requests
        .iter()
        .map(|request| optimize(&network, request).expect("route exists"))
        .collect();

    let concurrent: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = requests
            .iter()
            .map(|request| {
                let network = &network;
                scope.spawn(move || optimize(network, request).expect("route exists"))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn alternatives_do_not_leak_exclusions_between_requests() {
    let network = fixture_network();
    let request = OptimizationRequest::eco("JFK", "LAX");
    let before = optimize(&network, &request).expect("route exists");

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| alternatives(&network, &request, 3).expect("alternatives exist"));
        }
    });

    let after = optimize(&network, &request).expect("route exists");
    assert_eq!(before, after);
}
