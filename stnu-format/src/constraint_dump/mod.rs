//! Converts constraint dumps: XML documents in which a planner exports the temporal constraints
//! of a plan.
//!
//! The root element of a dump contains one `CONSTRAINT` element per edge:
//! ```xml
//! <CONSTRAINTS>
//!   <CONSTRAINT>
//!     <START>load</START>
//!     <END>unload</END>
//!     <LOWERBOUND>1.5</LOWERBOUND>
//!     <UPPERBOUND>3</UPPERBOUND>
//!     <TYPE>Uncontrollable;duration</TYPE>
//!   </CONSTRAINT>
//! </CONSTRAINTS>
//! ```
//! The `TYPE` is either `Controllable` or `Uncontrollable`, optionally followed by `;` and a
//! suffix which is ignored. Other child elements are ignored too.
//!
//! A dump can be rendered as a Graphviz digraph ([`write_dot`]) or summarised ([`write_summary`]).
//! The conversion does not decide dynamic controllability; the bounds of a dump need not be
//! integers.

mod parser;
mod render;

use std::io::Read;

use log::debug;
pub use render::write_dot;
pub use render::write_summary;
pub use render::NodeRenaming;
use stnu_core::network::EdgeKind;

use self::parser::Element;
use self::parser::XmlParser;

/// The errors that can be encountered while reading a constraint dump.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("failed to read from source: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse the document at byte {offset}: {reason}")]
    ParseError { offset: usize, reason: String },

    #[error("constraint {constraint_nr} has no {field} element")]
    MissingField {
        constraint_nr: usize,
        field: &'static str,
    },

    #[error("constraint {constraint_nr} has {field} '{value}', which is not a number")]
    InvalidNumber {
        constraint_nr: usize,
        field: &'static str,
        value: String,
    },

    #[error("constraint {constraint_nr} has unknown type '{value}'")]
    UnknownConstraintType { constraint_nr: usize, value: String },
}

/// A constraint of a dump. The bounds are kept as written, so they may be fractional.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpedConstraint {
    pub start: String,
    pub end: String,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub kind: EdgeKind,
}

/// Reads the constraints of a dump, in document order.
pub fn read_constraint_dump<R: Read>(mut source: R) -> Result<Vec<DumpedConstraint>, DumpError> {
    let mut bytes = Vec::new();
    let _ = source.read_to_end(&mut bytes)?;

    let root = XmlParser::new(&bytes).parse_document()?;
    let constraints = root
        .children_named("CONSTRAINT")
        .enumerate()
        .map(|(index, element)| read_constraint(index + 1, element))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("read {} constraint(s) from the dump", constraints.len());
    Ok(constraints)
}

fn read_constraint(
    constraint_nr: usize,
    element: &Element,
) -> Result<DumpedConstraint, DumpError> {
    let field = |field: &'static str| {
        element
            .child(field)
            .map(|child| child.text.trim())
            .ok_or(DumpError::MissingField {
                constraint_nr,
                field,
            })
    };
    let number = |field_name: &'static str| {
        let value = field(field_name)?;
        value.parse::<f64>().map_err(|_| DumpError::InvalidNumber {
            constraint_nr,
            field: field_name,
            value: value.to_owned(),
        })
    };

    let type_name = field("TYPE")?;
    let kind = match type_name.split(';').next().unwrap_or_default() {
        "Controllable" => EdgeKind::Controllable,
        "Uncontrollable" => EdgeKind::Contingent,
        _ => {
            return Err(DumpError::UnknownConstraintType {
                constraint_nr,
                value: type_name.to_owned(),
            });
        }
    };

    Ok(DumpedConstraint {
        start: field("START")?.to_owned(),
        end: field("END")?.to_owned(),
        lower_bound: number("LOWERBOUND")?,
        upper_bound: number("UPPERBOUND")?,
        kind,
    })
}
