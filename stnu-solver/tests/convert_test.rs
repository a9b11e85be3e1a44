#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::instance_arg;
use helpers::run_solver;

fn convert(output_type: &str) -> String {
    let path = instance_arg("delivery.xml");
    let run = run_solver(&["convert", path.as_str(), "--output-type", output_type], None);

    assert!(run.status.success(), "conversion failed: {run:?}");
    run.stdout
}

#[test]
fn dump_is_summarised() {
    assert_eq!(
        "Number of nodes: 3\n\
         Number of edges: 2\n    of which\n\
         \x20       controllable: 1\n\
         \x20       Uncontrollable: 1\n",
        convert("summary")
    );
}

#[test]
fn dump_is_converted_to_dot() {
    assert_eq!(
        "digraph G {\n\
         rankdir=\"LR\";\n\
         A -> B [label=\"[10.00, 20.00]\", style=dotted];\n\
         B -> C [label=\"[0.00, 5.25]\", style=solid];\n\
         }\n",
        convert("dot")
    );
}

#[test]
fn missing_dump_fails() {
    let run = run_solver(&["convert", "does-not-exist.xml"], None);

    assert_eq!(Some(1), run.status.code());
}
