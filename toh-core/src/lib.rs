#![warn(missing_docs)]
//! Core abstractions for discrete reinforcement-learning environments.
//!
//! This crate provides the traits an environment and a policy interact through
//! ([`Env`], [`Obs`], [`Act`], [`Policy`], [`Step`]), a lightweight record
//! system for logging, evaluators, and [`DiscreteMdpDriver`], a generic runtime
//! that turns any precomputed finite MDP ([`DiscreteMdp`]) into a stateful,
//! seeded environment.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

mod mdp;
pub use mdp::{DiscreteMdp, DiscreteMdpDriver, Transition};
