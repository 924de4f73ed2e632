//! A uniformly random policy, useful as a baseline.
use crate::{error::TohError, TohAct, TohEnv, TohObs};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use toh_core::{Configurable, Policy};

/// Configuration of [`RandomPolicy`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RandomPolicyConfig {
    /// The number of actions to choose from, at least 1.
    pub n_acts: usize,

    /// Seed of the random number generator.
    pub seed: u64,
}

/// Picks every action with the same probability.
pub struct RandomPolicy {
    n_acts: usize,
    rng: fastrand::Rng,
}

impl Configurable<TohEnv> for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Result<Self> {
        if config.n_acts == 0 {
            return Err(TohError::InvalidConfig("n_acts must be at least 1".to_string()).into());
        }
        Ok(Self {
            n_acts: config.n_acts,
            rng: fastrand::Rng::with_seed(config.seed),
        })
    }
}

impl Policy<TohEnv> for RandomPolicy {
    fn sample(&mut self, _: &TohObs) -> TohAct {
        self.rng.usize(..self.n_acts).into()
    }
}
