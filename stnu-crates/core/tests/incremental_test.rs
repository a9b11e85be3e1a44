#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::add_random_contingent_edge;
use helpers::add_random_controllable_edge;
use helpers::random_network;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use stnu_core::network::Edge;
use stnu_core::network::TemporalNetwork;
use stnu_core::DcEngine;
use stnu_core::Stnu;

fn solve_from_scratch(network: &TemporalNetwork) -> bool {
    DcEngine::default().solve(network)
}

/// Applies one random mutation through the facade. Every mutation keeps the network valid.
fn mutate(rng: &mut SmallRng, stnu: &mut Stnu) {
    match rng.gen_range(0..6) {
        0 => {
            let _ = stnu.new_time_point();
        }
        1 | 2 => {
            // Generate the edge on a copy, then replay it through the facade.
            let mut network = stnu.network().clone();
            add_random_controllable_edge(rng, &mut network);
            if let Some(edge) = network.controllable_edges().last().copied() {
                if network.num_edges() > stnu.network().num_edges() {
                    let _ = stnu.add_controllable_edge(
                        edge.from,
                        edge.to,
                        edge.lower_bound,
                        edge.upper_bound,
                    );
                }
            }
        }
        3 => {
            let mut network = stnu.network().clone();
            add_random_contingent_edge(rng, &mut network);
            if let Some(edge) = network.contingent_edges().last().copied() {
                if network.num_edges() > stnu.network().num_edges() {
                    let _ = stnu.add_contingent_edge(
                        edge.from,
                        edge.to,
                        edge.lower_bound,
                        edge.upper_bound,
                    );
                }
            }
        }
        4 => {
            let edges = stnu.network().edges().collect::<Vec<_>>();
            if edges.is_empty() {
                return;
            }
            let edge = edges[rng.gen_range(0..edges.len())];
            let _ = stnu.remove_edge(edge.source(), edge.target());
        }
        _ => {
            let edges = stnu.network().controllable_edges().to_vec();
            if edges.is_empty() {
                return;
            }
            let edge = edges[rng.gen_range(0..edges.len())];
            let lower_bound = (edge.lower_bound + rng.gen_range(-2..=2)).max(0);
            let upper_bound = (edge.upper_bound + rng.gen_range(-2..=2)).max(lower_bound);
            let _ = stnu.update_controllable_edge(edge.from, edge.to, lower_bound, upper_bound);
        }
    }
}

#[test]
fn incremental_verdicts_match_solving_from_scratch() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..50 {
        let mut stnu = Stnu::from_network(random_network(&mut rng, 4, 4, 1));

        for _ in 0..20 {
            mutate(&mut rng, &mut stnu);
            assert!(stnu.validate().is_ok());

            let expected = solve_from_scratch(stnu.network());
            assert_eq!(Ok(expected), stnu.is_dynamically_controllable());
        }
    }
}

#[test]
fn batched_edits_match_solving_from_scratch() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..50 {
        let mut stnu = Stnu::from_network(random_network(&mut rng, 4, 3, 1));
        let _ = stnu.is_dynamically_controllable();

        for _ in 0..rng.gen_range(1..6) {
            mutate(&mut rng, &mut stnu);
        }

        let expected = solve_from_scratch(stnu.network());
        assert_eq!(Ok(expected), stnu.is_dynamically_controllable());
    }
}

#[test]
fn at_most_one_solve_per_mutation() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut stnu = Stnu::from_network(random_network(&mut rng, 5, 5, 2));

    let mut num_windows = 0;
    for _ in 0..30 {
        mutate(&mut rng, &mut stnu);
        num_windows += 1;

        for _ in 0..3 {
            let _ = stnu.is_dynamically_controllable();
        }
    }

    assert!(stnu.cache_statistics().num_solves <= num_windows);
    assert_eq!(90, stnu.cache_statistics().num_queries);
}

#[test]
fn removal_is_reported_with_the_removed_edges() {
    let mut stnu = Stnu::default();
    let a = stnu.new_time_point();
    let b = stnu.new_time_point();
    let contingent = stnu.add_contingent_edge(a, b, 1, 3);
    let controllable = stnu.add_controllable_edge(a, b, 0, 2);
    assert_eq!(Ok(false), stnu.is_dynamically_controllable());

    let removed = stnu.remove_edge(a, b);

    assert_eq!(
        vec![Edge::Controllable(controllable), Edge::Contingent(contingent)],
        removed
    );
    assert_eq!(Ok(true), stnu.is_dynamically_controllable());
}
