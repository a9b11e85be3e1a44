#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::tp;
use stnu_core::network::EdgeKind;
use stnu_core::network::TemporalNetwork;
use stnu_core::ConstraintViolation;
use stnu_core::DcEngine;
use stnu_core::Stnu;

/// `A -> B [1, 10]`.
fn single_requirement() -> Stnu {
    let mut stnu = Stnu::default();
    let a = stnu.new_time_point();
    let b = stnu.new_time_point();
    let _ = stnu.add_controllable_edge(a, b, 1, 10);
    stnu
}

/// `A -> B [1, 3]` contingent, `B -> C [0, 1]` and `A -> C [0, upper_bound]` controllable.
fn reaction(upper_bound: i64) -> Stnu {
    let mut stnu = Stnu::default();
    let a = stnu.new_time_point();
    let b = stnu.new_time_point();
    let c = stnu.new_time_point();
    let _ = stnu.add_contingent_edge(a, b, 1, 3);
    let _ = stnu.add_controllable_edge(b, c, 0, 1);
    let _ = stnu.add_controllable_edge(a, c, 0, upper_bound);
    stnu
}

#[test]
fn single_requirement_is_controllable() {
    let mut stnu = single_requirement();

    assert_eq!(Ok(true), stnu.is_dynamically_controllable());
}

#[test]
fn tight_reaction_is_not_controllable() {
    let mut stnu = reaction(2);

    assert_eq!(Ok(false), stnu.is_dynamically_controllable());
}

#[test]
fn loose_reaction_is_controllable() {
    let mut stnu = reaction(4);

    assert_eq!(Ok(true), stnu.is_dynamically_controllable());
}

#[test]
fn duplicate_requirement_is_rejected() {
    let mut stnu = single_requirement();
    let _ = stnu.add_controllable_edge(tp(1), tp(2), 2, 5);

    let expected = ConstraintViolation::DuplicateEdge {
        kind: EdgeKind::Controllable,
        from: tp(1),
        to: tp(2),
    };
    assert_eq!(Err(expected), stnu.validate());
    assert_eq!(Err(expected), stnu.is_dynamically_controllable());
}

#[test]
fn contingent_edge_without_positive_lower_bound_is_rejected() {
    let mut network = TemporalNetwork::default();
    let _ = network.add_contingent_edge(tp(1), tp(2), 0, 3);

    assert_eq!(
        Err(ConstraintViolation::InvalidBounds {
            kind: EdgeKind::Contingent,
            from: tp(1),
            to: tp(2),
            lower_bound: 0,
            upper_bound: 3,
        }),
        network.validate()
    );
}

#[test]
fn time_point_with_two_contingent_edges_is_rejected() {
    let mut network = TemporalNetwork::default();
    let _ = network.add_contingent_edge(tp(1), tp(2), 1, 3);
    let _ = network.add_contingent_edge(tp(3), tp(2), 1, 3);

    assert_eq!(
        Err(ConstraintViolation::MultipleContingentTargets {
            target: tp(2),
            first_source: tp(1),
            second_source: tp(3),
        }),
        network.validate()
    );
}

#[test]
fn fixing_an_invalid_network_makes_it_solvable() {
    let mut stnu = single_requirement();
    let _ = stnu.add_controllable_edge(tp(1), tp(2), 2, 5);
    assert!(stnu.is_dynamically_controllable().is_err());

    let removed = stnu.remove_edge(tp(1), tp(2));
    let _ = stnu.add_controllable_edge(tp(1), tp(2), 2, 5);

    assert_eq!(2, removed.len());
    assert_eq!(Ok(true), stnu.is_dynamically_controllable());
}

#[test]
fn facade_and_engine_agree_on_the_scenarios() {
    for mut stnu in [single_requirement(), reaction(2), reaction(4)] {
        let expected = DcEngine::default().solve(stnu.network());

        assert_eq!(Ok(expected), stnu.is_dynamically_controllable());
    }
}
