//! # STNU
//! Decides whether a simple temporal network with uncertainty (STNU) is dynamically controllable,
//! i.e. whether the controllable time points can be scheduled such that every constraint holds
//! however the durations of the contingent edges turn out, while only reacting to contingent time
//! points which have already happened.
//!
//! The main entry point is the [`Stnu`], which owns a [`network::TemporalNetwork`] and caches its
//! verdict between mutations. Mutations which only restrict the network are propagated
//! incrementally on top of the previous verdict.
//!
//! ```rust
//! # use stnu_core::Stnu;
//! # use stnu_core::termination::TimeBudget;
//! # use stnu_core::DcStatus;
//! # use std::time::Duration;
//! let mut stnu = Stnu::default();
//! let start = stnu.new_time_point();
//! let end = stnu.new_time_point();
//!
//! let _ = stnu.add_contingent_edge(start, end, 1, 10);
//! assert_eq!(Ok(true), stnu.is_dynamically_controllable());
//!
//! // The environment may take up to 10, so this requirement cannot be guaranteed.
//! let _ = stnu.add_controllable_edge(start, end, 0, 5);
//! let mut termination = TimeBudget::starting_now(Duration::from_secs(1));
//! assert_eq!(
//!     Ok(DcStatus::NotControllable),
//!     stnu.is_dynamically_controllable_within(&mut termination)
//! );
//! ```
//!
//! A network is only decided once it is valid; see [`validation::validate`] for the invariants.
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub mod network;
pub mod statistics;
pub mod stnu_asserts;
pub mod termination;
pub mod validation;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use stnu_core::Stnu;`
// vs.
// `use stnu_core::api::Stnu;`
mod api;

pub use api::*;

pub use crate::basic_types::ConstraintViolation;
pub use crate::basic_types::DcStatus;
pub use crate::basic_types::TimePoint;
pub use crate::basic_types::Weight;
pub use crate::engine::DcEngine;
pub use crate::engine::IncrementalDcEngine;
pub use crate::engine::IncrementalStatistics;
pub use crate::engine::ReductionStatistics;
