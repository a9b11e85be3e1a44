use super::labeled_graph::LabeledGraph;
use crate::basic_types::Weight;
use crate::containers::StorageKey;

/// Whether the AllMax projection of the graph, i.e. the ordinary edges together with every
/// upper-case edge read as an ordinary edge, contains a negative cycle.
///
/// This is a Floyd-Warshall pass over a copy of the projection, stopping at the first negative
/// diagonal entry.
pub(crate) fn has_negative_all_max_cycle(graph: &LabeledGraph) -> bool {
    let num_time_points = graph.num_time_points();
    let offset = |from: usize, to: usize| from * num_time_points + to;

    let mut distances: Vec<Option<Weight>> = graph
        .time_points()
        .flat_map(|from| graph.time_points().map(move |to| graph.ordinary(from, to)))
        .collect();

    for link in graph.link_ids() {
        let activation = graph.link(link).activation.index();

        for source in graph.time_points() {
            let Some(weight) = graph.upper_case(source, link) else {
                continue;
            };

            let entry = &mut distances[offset(source.index(), activation)];
            *entry = Some(entry.map_or(weight, |current| current.min(weight)));
        }
    }

    for via in 0..num_time_points {
        for from in 0..num_time_points {
            let Some(first) = distances[offset(from, via)] else {
                continue;
            };

            for to in 0..num_time_points {
                let Some(second) = distances[offset(via, to)] else {
                    continue;
                };

                let candidate = first.saturating_add(second);
                if from == to {
                    if candidate < 0 {
                        return true;
                    }
                    continue;
                }

                let entry = &mut distances[offset(from, to)];
                match *entry {
                    Some(current) if current <= candidate => {}
                    _ => *entry = Some(candidate),
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TimePoint;
    use crate::engine::labeled_graph::ContingentLink;

    fn tp(id: u32) -> TimePoint {
        TimePoint::new(id)
    }

    #[test]
    fn consistent_ordinary_edges_have_no_negative_cycle() {
        let mut graph = LabeledGraph::new(3);
        let _ = graph.tighten_ordinary(tp(1), tp(2), 4);
        let _ = graph.tighten_ordinary(tp(2), tp(1), -1);
        let _ = graph.tighten_ordinary(tp(2), tp(3), 2);
        let _ = graph.tighten_ordinary(tp(3), tp(1), -3);

        assert!(!has_negative_all_max_cycle(&graph));
    }

    #[test]
    fn negative_cycle_through_three_time_points_is_found() {
        let mut graph = LabeledGraph::new(3);
        let _ = graph.tighten_ordinary(tp(1), tp(2), 1);
        let _ = graph.tighten_ordinary(tp(2), tp(3), 1);
        let _ = graph.tighten_ordinary(tp(3), tp(1), -3);

        assert!(has_negative_all_max_cycle(&graph));
    }

    #[test]
    fn upper_case_edges_count_as_ordinary_edges() {
        let mut graph = LabeledGraph::new(3);
        let link = graph.add_link(ContingentLink {
            activation: tp(1),
            contingent: tp(2),
            lower_bound: 1,
            upper_bound: 3,
        });
        let _ = graph.tighten_ordinary(tp(1), tp(3), 2);
        let _ = graph.tighten_upper_case(tp(3), link, -3);

        assert!(has_negative_all_max_cycle(&graph));
    }
}
