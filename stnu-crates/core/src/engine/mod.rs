//! Decides dynamic controllability by saturating a labeled distance graph under the reduction
//! rules, either from scratch ([`DcEngine`]) or on top of an earlier saturated graph
//! ([`IncrementalDcEngine`]).
mod all_max;
mod dc_engine;
mod edge_queue;
mod incremental_dc_engine;
mod labeled_graph;
mod reduction;

pub use dc_engine::DcEngine;
pub use incremental_dc_engine::IncrementalDcEngine;
pub use incremental_dc_engine::IncrementalStatistics;
pub use reduction::ReductionStatistics;
