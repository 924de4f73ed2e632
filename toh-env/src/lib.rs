//! The Tower of Hanoi puzzle as a discrete environment for [`toh_core`].
//!
//! Given a number of poles and rings, [`TohMdp`] enumerates every valid
//! arrangement reachable from the start (all rings on the first pole), builds
//! the transition table of every state-action pair and the initial-state
//! distribution, uniform over valid states. [`TohEnv`] runs episodes on it
//! through [`toh_core::DiscreteMdpDriver`] and renders the poles as text.
//!
//! An action moves the topmost ring of one pole onto another; the actions are
//! the ordered pairs of distinct poles, see [`ActionSet`]. Reaching the goal
//! (all rings on the last pole) gives a reward of 1 and ends the episode.
//! Putting a ring on a smaller one also ends the episode, with the configured
//! invalid-move reward, and leaves the rings where they were. With a nonzero
//! `noise`, a move lands on the pole after the intended one with probability
//! `noise`.
//!
//! Here is an example of running the puzzle with a random policy.
//!
//! ```no_run
//! use anyhow::Result;
//! use toh_core::{Configurable, DefaultEvaluator, Evaluator as _};
//! use toh_env::{RandomPolicy, RandomPolicyConfig, RenderMode, TohEnv, TohEnvConfig};
//!
//! fn main() -> Result<()> {
//!     env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
//!
//!     let env_config = TohEnvConfig::default()
//!         .rings(3)
//!         .invalid_reward(-1.0)
//!         .render_mode(Some(RenderMode::Human));
//!     let mut policy = RandomPolicy::build(RandomPolicyConfig { n_acts: 6, seed: 42 })?;
//!
//!     let record = DefaultEvaluator::<TohEnv>::new(&env_config, 0, 5)?.evaluate(&mut policy)?;
//!     println!("{:?}", record.get_scalar("Episode return")?);
//!
//!     Ok(())
//! }
//! ```
mod act;
mod env;
pub mod error;
pub mod mdp;
mod obs;
mod policy;
pub use act::{ActionSet, Move, TohAct};
pub use env::{RenderMode, Renderer, TohEnv, TohEnvConfig, TohInfo};
pub use mdp::{State, TohMdp};
pub use obs::TohObs;
pub use policy::{RandomPolicy, RandomPolicyConfig};
