//! The temporal network as the user builds it: time points, controllable edges and contingent
//! edges. Nothing in this module checks the invariants of a network; see
//! [`validate`](crate::validation::validate) for that.
mod edges;
mod edit;
mod temporal_network;

pub use edges::*;
pub use edit::Edit;
pub use temporal_network::TemporalNetwork;
