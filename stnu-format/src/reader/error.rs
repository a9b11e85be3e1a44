use std::io;

use stnu_core::ConstraintViolation;

#[cfg(doc)]
use super::read_network;

/// The errors that can be encountered by [`read_network`].
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read from source: {0}")]
    IoError(#[from] io::Error),

    #[error("failed to parse line {line_nr}: {reason}")]
    ParseError { line_nr: usize, reason: String },

    #[error("the bound '{bound}' on line {line_nr} is not a whole number")]
    FractionalBound { line_nr: usize, bound: String },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: &'static str },

    #[error("the network is invalid: {0}")]
    InvalidNetwork(#[from] ConstraintViolation),
}
