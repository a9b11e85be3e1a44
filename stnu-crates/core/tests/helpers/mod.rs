//! Generators and oracles shared by the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use rand::rngs::SmallRng;
use rand::Rng;
use stnu_core::network::TemporalNetwork;
use stnu_core::TimePoint;
use stnu_core::Weight;

pub(crate) fn tp(id: u32) -> TimePoint {
    TimePoint::new(id)
}

/// Picks an ordered pair of distinct time points of `network` which does not satisfy `is_taken`.
pub(crate) fn free_pair(
    rng: &mut SmallRng,
    network: &TemporalNetwork,
    is_taken: impl Fn(TimePoint, TimePoint) -> bool,
) -> Option<(TimePoint, TimePoint)> {
    let num_time_points = network.num_time_points() as u32;
    if num_time_points < 2 {
        return None;
    }

    for _ in 0..32 {
        let from = tp(rng.gen_range(1..=num_time_points));
        let to = tp(rng.gen_range(1..=num_time_points));
        if from != to && !is_taken(from, to) {
            return Some((from, to));
        }
    }

    None
}

pub(crate) fn has_controllable_edge(
    network: &TemporalNetwork,
    from: TimePoint,
    to: TimePoint,
) -> bool {
    network
        .controllable_edges()
        .iter()
        .any(|edge| edge.from == from && edge.to == to)
}

pub(crate) fn is_contingent_target(network: &TemporalNetwork, time_point: TimePoint) -> bool {
    network
        .contingent_edges()
        .iter()
        .any(|edge| edge.to == time_point)
}

/// Adds a controllable edge with valid bounds on a pair which has none yet.
pub(crate) fn add_random_controllable_edge(rng: &mut SmallRng, network: &mut TemporalNetwork) {
    let existing: &TemporalNetwork = network;
    let Some((from, to)) = free_pair(rng, existing, |from, to| {
        has_controllable_edge(existing, from, to)
    }) else {
        return;
    };

    let lower_bound = rng.gen_range(0..=4);
    let upper_bound = lower_bound + rng.gen_range(0..=8);
    let _ = network.add_controllable_edge(from, to, lower_bound, upper_bound);
}

/// Adds a contingent edge with valid bounds towards a time point which is not contingent yet.
pub(crate) fn add_random_contingent_edge(rng: &mut SmallRng, network: &mut TemporalNetwork) {
    let existing: &TemporalNetwork = network;
    let Some((from, to)) = free_pair(rng, existing, |_, to| is_contingent_target(existing, to))
    else {
        return;
    };

    let lower_bound = rng.gen_range(1..=4);
    let upper_bound = lower_bound + rng.gen_range(0..=6);
    let _ = network.add_contingent_edge(from, to, lower_bound, upper_bound);
}

/// A valid network with `num_time_points` time points and roughly the given number of edges.
pub(crate) fn random_network(
    rng: &mut SmallRng,
    num_time_points: usize,
    num_controllable_edges: usize,
    num_contingent_edges: usize,
) -> TemporalNetwork {
    let mut network = TemporalNetwork::with_time_points(num_time_points);
    for _ in 0..num_contingent_edges {
        add_random_contingent_edge(rng, &mut network);
    }
    for _ in 0..num_controllable_edges {
        add_random_controllable_edge(rng, &mut network);
    }

    network
}

/// Whether the network without uncertainty, read as a simple temporal network, is consistent:
/// its distance graph has no negative cycle.
pub(crate) fn is_consistent(network: &TemporalNetwork) -> bool {
    let n = network.num_time_points();
    let mut distances: Vec<Vec<Option<Weight>>> = vec![vec![None; n]; n];
    for (index, row) in distances.iter_mut().enumerate() {
        row[index] = Some(0);
    }

    let mut tighten = |from: TimePoint, to: TimePoint, weight: Weight| {
        let entry = &mut distances[from.id() as usize - 1][to.id() as usize - 1];
        *entry = Some(entry.map_or(weight, |current| current.min(weight)));
    };
    for edge in network.controllable_edges() {
        tighten(edge.from, edge.to, edge.upper_bound);
        tighten(edge.to, edge.from, -edge.lower_bound);
    }

    for via in 0..n {
        for from in 0..n {
            for to in 0..n {
                if let (Some(first), Some(second)) = (distances[from][via], distances[via][to]) {
                    let candidate = first + second;
                    match distances[from][to] {
                        Some(current) if current <= candidate => {}
                        _ => distances[from][to] = Some(candidate),
                    }
                }
            }
        }
    }

    (0..n).all(|index| distances[index][index].is_some_and(|weight| weight >= 0))
}
