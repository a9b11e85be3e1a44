use stnu_core::ConstraintViolation;
use stnu_format::constraint_dump::DumpError;
use stnu_format::reader::ReadError;
use thiserror::Error;

pub(crate) type StnuSolverResult<T> = Result<T, StnuSolverError>;

#[derive(Error, Debug)]
pub(crate) enum StnuSolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to read the network, more details: {0}")]
    InvalidInstance(#[from] ReadError),
    #[error("Failed to read the constraint dump, more details: {0}")]
    InvalidConstraintDump(#[from] DumpError),
    #[error("The network is invalid, more details: {0}")]
    InvalidNetwork(#[from] ConstraintViolation),
}
