#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use stnu_core::DcEngine;
use stnu_core::Stnu;
use stnu_format::constraint_dump::read_constraint_dump;
use stnu_format::constraint_dump::write_summary;
use stnu_format::reader::read_network;
use stnu_format::reader::ReadError;
use stnu_format::writer::write_network;

const REACTION: &str = "
2
end reaction 0 1
start reaction 0 2
1
start end 1 3
";

#[test]
fn read_network_is_decided() {
    let named = read_network(REACTION.as_bytes()).expect("valid network");

    assert!(!DcEngine::default().solve(&named.network));

    let mut stnu = Stnu::from_network(named.network);
    let start = named.names.time_point("start").expect("start is named");
    let reaction = named.names.time_point("reaction").expect("reaction is named");
    let _ = stnu.update_controllable_edge(start, reaction, 0, 4);

    assert_eq!(Ok(true), stnu.is_dynamically_controllable());
}

#[test]
fn printed_network_lists_edges_by_name() {
    let named = read_network(REACTION.as_bytes()).expect("valid network");

    let mut output = Vec::new();
    write_network(&mut output, &named.network, &named.names).expect("writing to a vector");

    assert_eq!(
        "Number of nodes: 3\n\
         Number of edges: 3\n\
         Number of controllable edges: 2\n\
         Number of uncontrollable edges: 1\n\
         List of controllable edges:\n\
         \x20   end -> reaction [0, 1]\n\
         \x20   start -> reaction [0, 2]\n\
         List of uncontrollable edges:\n\
         \x20   start -> end [1, 3]\n",
        String::from_utf8(output).expect("utf-8 output")
    );
}

#[test]
fn duplicate_edge_in_the_file_is_rejected() {
    let result = read_network("2\na b 1 10\na b 2 5\n0\n".as_bytes());

    assert!(matches!(result, Err(ReadError::InvalidNetwork(_))));
}

#[test]
fn summary_of_a_dump() {
    let source = r#"<?xml version="1.0" encoding="UTF-8"?>
<CONSTRAINTS>
  <CONSTRAINT>
    <START>depart</START>
    <END>arrive</END>
    <LOWERBOUND>10</LOWERBOUND>
    <UPPERBOUND>20</UPPERBOUND>
    <TYPE>Uncontrollable;travel</TYPE>
  </CONSTRAINT>
  <CONSTRAINT>
    <START>arrive</START>
    <END>unload</END>
    <LOWERBOUND>0</LOWERBOUND>
    <UPPERBOUND>5.25</UPPERBOUND>
    <TYPE>Controllable</TYPE>
  </CONSTRAINT>
</CONSTRAINTS>
"#;

    let constraints = read_constraint_dump(source.as_bytes()).expect("valid dump");
    let mut output = Vec::new();
    write_summary(&mut output, &constraints).expect("writing to a vector");

    assert_eq!(
        "Number of nodes: 3\n\
         Number of edges: 2\n    of which\n\
         \x20       controllable: 1\n\
         \x20       Uncontrollable: 1\n",
        String::from_utf8(output).expect("utf-8 output")
    );
}
