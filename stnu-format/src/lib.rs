//! This crate contains the file formats around simple temporal networks with uncertainty.
//!
//! To read a network in the line-based text format see [`reader::read_network`], and to print a
//! named network see [`writer::write_network`]. Constraint dumps (an XML format in which a planner
//! exports its temporal constraints) can be converted to Graphviz or summarised with
//! [`constraint_dump`].

mod names;

pub mod constraint_dump;
pub mod reader;
pub mod writer;

pub use names::TimePointNames;
