use std::io;
use std::io::Write;

use stnu_core::containers::HashMap;
use stnu_core::network::EdgeKind;

use super::DumpedConstraint;

/// Short names for the nodes of a dump: `A`, `B`, ..., `Z`, `AA`, `AB`, ... assigned in order of
/// first occurrence, the start of a constraint before its end.
#[derive(Debug, Clone, Default)]
pub struct NodeRenaming {
    renaming: HashMap<String, String>,
}

impl NodeRenaming {
    pub fn new(constraints: &[DumpedConstraint]) -> Self {
        let mut renaming = HashMap::default();

        for node in constraints
            .iter()
            .flat_map(|constraint| [&constraint.start, &constraint.end])
        {
            if !renaming.contains_key(node) {
                let name = short_name(renaming.len() + 1);
                let _ = renaming.insert(node.clone(), name);
            }
        }

        NodeRenaming { renaming }
    }

    pub fn num_nodes(&self) -> usize {
        self.renaming.len()
    }

    /// The short name of `node`; a node which does not occur in the dump keeps its name.
    pub fn rename<'a>(&'a self, node: &'a str) -> &'a str {
        self.renaming.get(node).map_or(node, String::as_str)
    }
}

/// The `number`-th name in the sequence `A`, ..., `Z`, `AA`, ..., `AZ`, `BA`, ..., starting at 1.
fn short_name(mut number: usize) -> String {
    let mut letters = Vec::new();

    while number > 0 {
        number -= 1;
        letters.push(char::from(b'A' + (number % 26) as u8));
        number /= 26;
    }

    letters.iter().rev().collect()
}

/// Writes the constraints as a Graphviz digraph. Controllable constraints are drawn solid and
/// uncontrollable constraints dotted; every edge is labeled with its bounds.
pub fn write_dot<W: Write>(writer: &mut W, constraints: &[DumpedConstraint]) -> io::Result<()> {
    let renaming = NodeRenaming::new(constraints);

    writeln!(writer, "digraph G {{")?;
    writeln!(writer, "rankdir=\"LR\";")?;
    for constraint in constraints {
        let style = match constraint.kind {
            EdgeKind::Controllable => "solid",
            EdgeKind::Contingent => "dotted",
        };

        writeln!(
            writer,
            "{} -> {} [label=\"[{:.2}, {:.2}]\", style={style}];",
            renaming.rename(&constraint.start),
            renaming.rename(&constraint.end),
            constraint.lower_bound,
            constraint.upper_bound,
        )?;
    }
    writeln!(writer, "}}")
}

/// Writes the number of nodes and constraints of a dump.
pub fn write_summary<W: Write>(writer: &mut W, constraints: &[DumpedConstraint]) -> io::Result<()> {
    let num_controllable = constraints
        .iter()
        .filter(|constraint| constraint.kind == EdgeKind::Controllable)
        .count();

    writeln!(
        writer,
        "Number of nodes: {}",
        NodeRenaming::new(constraints).num_nodes()
    )?;
    writeln!(writer, "Number of edges: {}", constraints.len())?;
    writeln!(writer, "    of which")?;
    writeln!(writer, "        controllable: {num_controllable}")?;
    writeln!(
        writer,
        "        Uncontrollable: {}",
        constraints.len() - num_controllable
    )
}
