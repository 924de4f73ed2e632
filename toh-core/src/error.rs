//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// An action index outside of the action space.
    #[error("Action {0} is out of range, the number of actions is {1}")]
    InvalidAction(usize, usize),

    /// Weights that can not be sampled from.
    #[error("Invalid probability distribution: {0}")]
    InvalidDistribution(String),

    /// The driver was stepped before the first reset.
    #[error("The environment has not been reset")]
    NotReset,
}
