//! Errors of the Tower of Hanoi environment.
use thiserror::Error;

/// Errors raised while building the MDP or rendering its states.
#[derive(Error, Debug, PartialEq)]
pub enum TohError {
    /// A configuration value out of its domain. Raised before any state is enumerated.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A state that the enumeration did not discover.
    #[error("State {0} is not in the state space")]
    UnknownState(String),

    /// The initial-state distribution has no support.
    #[error("No valid state to start an episode from")]
    NoValidState,

    /// A state holding rings the renderer was not built for.
    #[error("Cannot render {0} with {1} rings")]
    RingMismatch(String, usize),
}
