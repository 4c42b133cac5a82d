//! Errors raised by the placement generators.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueensError {
    #[error("Invalid board size \"{input}\", expected a non-negative integer")]
    InvalidSize { input: String },

    #[error("No closed-form placement exists for n = {n}")]
    OutOfDomain { n: usize },

    #[error("Invalid placement: {reason}")]
    InvalidPlacement { reason: String },

    #[error("Unknown mode \"{input}\", expected one of: F, A")]
    UnknownMode { input: String },
}

impl QueensError {
    pub(crate) fn invalid_placement(reason: impl Into<String>) -> Self {
        QueensError::InvalidPlacement {
            reason: reason.into(),
        }
    }
}
