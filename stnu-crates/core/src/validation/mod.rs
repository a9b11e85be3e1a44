//! Checks the structural invariants of a [`TemporalNetwork`].
//!
//! Both engines assume a network which passed [`validate`]; they do not check the invariants
//! themselves.

use crate::basic_types::ConstraintViolation;
use crate::basic_types::TimePoint;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::network::EdgeKind;
use crate::network::TemporalNetwork;

/// Checks, in this order, that
/// 1. every controllable edge has `0 <= lower_bound <= upper_bound`,
/// 2. no two controllable edges share an ordered pair of time points,
/// 3. every contingent edge has `0 < lower_bound <= upper_bound`,
/// 4. no two contingent edges share an ordered pair of time points,
/// 5. no time point is the target of more than one contingent edge.
///
/// The first violation which is found is returned.
pub fn validate(network: &TemporalNetwork) -> Result<(), ConstraintViolation> {
    for edge in network.controllable_edges() {
        if edge.lower_bound < 0 || edge.lower_bound > edge.upper_bound {
            return Err(ConstraintViolation::InvalidBounds {
                kind: EdgeKind::Controllable,
                from: edge.from,
                to: edge.to,
                lower_bound: edge.lower_bound,
                upper_bound: edge.upper_bound,
            });
        }
    }

    check_unique_pairs(
        EdgeKind::Controllable,
        network
            .controllable_edges()
            .iter()
            .map(|edge| (edge.from, edge.to)),
    )?;

    for edge in network.contingent_edges() {
        if edge.lower_bound <= 0 || edge.lower_bound > edge.upper_bound {
            return Err(ConstraintViolation::InvalidBounds {
                kind: EdgeKind::Contingent,
                from: edge.from,
                to: edge.to,
                lower_bound: edge.lower_bound,
                upper_bound: edge.upper_bound,
            });
        }
    }

    check_unique_pairs(
        EdgeKind::Contingent,
        network
            .contingent_edges()
            .iter()
            .map(|edge| (edge.from, edge.to)),
    )?;

    let mut activation_of: HashMap<TimePoint, TimePoint> = HashMap::default();
    for edge in network.contingent_edges() {
        if let Some(&first_source) = activation_of.get(&edge.to) {
            return Err(ConstraintViolation::MultipleContingentTargets {
                target: edge.to,
                first_source,
                second_source: edge.from,
            });
        }
        let _ = activation_of.insert(edge.to, edge.from);
    }

    Ok(())
}

fn check_unique_pairs(
    kind: EdgeKind,
    pairs: impl Iterator<Item = (TimePoint, TimePoint)>,
) -> Result<(), ConstraintViolation> {
    let mut seen: HashSet<(TimePoint, TimePoint)> = HashSet::default();

    for (from, to) in pairs {
        if !seen.insert((from, to)) {
            return Err(ConstraintViolation::DuplicateEdge { kind, from, to });
        }
    }

    Ok(())
}
