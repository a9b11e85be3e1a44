//! Prints a network in a human-readable form.

use std::borrow::Cow;
use std::io;
use std::io::Write;

use stnu_core::network::TemporalNetwork;
use stnu_core::TimePoint;
use stnu_core::Weight;

use crate::TimePointNames;

/// Writes the counts and the edges of `network`, with the time points translated back to their
/// names. A time point without a name is written as its number.
///
/// # Example
/// ```
/// use stnu_format::reader::read_network;
/// use stnu_format::writer::write_network;
///
/// let named = read_network("1\na b 1 10\n0\n".as_bytes()).expect("valid network");
///
/// let mut output = Vec::new();
/// write_network(&mut output, &named.network, &named.names).expect("writing to a vector");
///
/// let expected = "\
/// Number of nodes: 2
/// Number of edges: 1
/// Number of controllable edges: 1
/// Number of uncontrollable edges: 0
/// List of controllable edges:
///     a -> b [1, 10]
/// List of uncontrollable edges:
/// ";
/// assert_eq!(expected, String::from_utf8(output).expect("utf-8 output"));
/// ```
pub fn write_network<W: Write>(
    writer: &mut W,
    network: &TemporalNetwork,
    names: &TimePointNames,
) -> io::Result<()> {
    writeln!(writer, "Number of nodes: {}", network.num_time_points())?;
    writeln!(writer, "Number of edges: {}", network.num_edges())?;
    writeln!(
        writer,
        "Number of controllable edges: {}",
        network.controllable_edges().len()
    )?;
    writeln!(
        writer,
        "Number of uncontrollable edges: {}",
        network.contingent_edges().len()
    )?;

    writeln!(writer, "List of controllable edges:")?;
    for edge in network.controllable_edges() {
        write_edge(writer, names, edge.from, edge.to, edge.lower_bound, edge.upper_bound)?;
    }

    writeln!(writer, "List of uncontrollable edges:")?;
    for edge in network.contingent_edges() {
        write_edge(writer, names, edge.from, edge.to, edge.lower_bound, edge.upper_bound)?;
    }

    Ok(())
}

fn write_edge<W: Write>(
    writer: &mut W,
    names: &TimePointNames,
    from: TimePoint,
    to: TimePoint,
    lower_bound: Weight,
    upper_bound: Weight,
) -> io::Result<()> {
    writeln!(
        writer,
        "    {} -> {} [{lower_bound}, {upper_bound}]",
        display_name(names, from),
        display_name(names, to)
    )
}

fn display_name(names: &TimePointNames, time_point: TimePoint) -> Cow<'_, str> {
    names
        .name(time_point)
        .map_or_else(|| Cow::Owned(time_point.to_string()), Cow::Borrowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(network: &TemporalNetwork, names: &TimePointNames) -> String {
        let mut output = Vec::new();
        write_network(&mut output, network, names).expect("writing to a vector");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn both_kinds_of_edges_are_listed() {
        let mut names = TimePointNames::default();
        let start = names.time_point_or_insert("start");
        let end = names.time_point_or_insert("end");
        let reaction = names.time_point_or_insert("reaction");

        let mut network = TemporalNetwork::default();
        let _ = network.add_contingent_edge(start, end, 1, 3);
        let _ = network.add_controllable_edge(end, reaction, 0, 1);

        let output = written(&network, &names);

        assert!(output.contains("Number of nodes: 3\n"));
        assert!(output.contains("Number of edges: 2\n"));
        assert!(output.ends_with(
            "List of controllable edges:\n    end -> reaction [0, 1]\n\
             List of uncontrollable edges:\n    start -> end [1, 3]\n"
        ));
    }

    #[test]
    fn unnamed_time_points_are_written_as_numbers() {
        let mut network = TemporalNetwork::default();
        let _ = network.add_controllable_edge(TimePoint::new(1), TimePoint::new(2), 0, 4);

        let output = written(&network, &TimePointNames::default());

        assert!(output.contains("    1 -> 2 [0, 4]\n"));
    }
}
