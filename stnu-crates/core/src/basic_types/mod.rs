mod constraint_violation;
mod dc_status;
mod time_point;

pub use constraint_violation::ConstraintViolation;
pub use dc_status::DcStatus;
pub use time_point::TimePoint;

/// The type of every bound and of every weight derived from them.
pub type Weight = i64;
