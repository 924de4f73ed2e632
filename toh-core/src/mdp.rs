//! Finite MDPs with precomputed transition tables and a generic runtime for them.
//!
//! A [`DiscreteMdp`] is an immutable description: the number of states and
//! actions, the list of [`Transition`]s for every state-action pair and the
//! initial-state distribution. [`DiscreteMdpDriver`] owns everything that
//! changes while an episode runs (the current state, the last action and the
//! random number generator), so one description can be shared by any number
//! of drivers.
use crate::error::CoreError;
use log::trace;
use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One possible outcome of taking an action in a state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Probability of this outcome.
    pub probability: f32,

    /// Index of the resulting state.
    pub next_state: usize,

    /// Reward of the transition.
    pub reward: f32,

    /// If the episode ends with this transition.
    pub done: bool,
}

impl Transition {
    /// Constructs a transition.
    pub fn new(probability: f32, next_state: usize, reward: f32, done: bool) -> Self {
        Self {
            probability,
            next_state,
            reward,
            done,
        }
    }
}

/// A finite MDP given as explicit tables.
pub trait DiscreteMdp {
    /// The number of states.
    fn n_states(&self) -> usize;

    /// The number of actions.
    fn n_actions(&self) -> usize;

    /// Possible outcomes of action `a` in state `s`.
    ///
    /// The probabilities of the returned transitions sum to 1.
    fn transitions(&self, s: usize, a: usize) -> &[Transition];

    /// Probability of starting an episode in each state.
    fn initial_distribution(&self) -> &[f32];
}

/// Samples an index according to `weights`.
fn categorical<R: Rng>(
    rng: &mut R,
    weights: impl IntoIterator<Item = f32>,
) -> Result<usize, CoreError> {
    let dist =
        WeightedIndex::new(weights).map_err(|e| CoreError::InvalidDistribution(e.to_string()))?;
    Ok(dist.sample(rng))
}

/// Runs episodes on a [`DiscreteMdp`].
///
/// The random number generator is owned by the driver. Use
/// [`DiscreteMdpDriver::from_seed`] for a seeded [`StdRng`] or
/// [`DiscreteMdpDriver::new`] to inject any generator, e.g.
/// [`StepRng`](rand::rngs::mock::StepRng) in tests.
pub struct DiscreteMdpDriver<M, R = StdRng> {
    mdp: Arc<M>,
    rng: R,
    s: Option<usize>,
    last_action: Option<usize>,
}

impl<M: DiscreteMdp> DiscreteMdpDriver<M, StdRng> {
    /// Constructs a driver with a [`StdRng`] seeded by `seed`.
    pub fn from_seed(mdp: Arc<M>, seed: u64) -> Self {
        Self::new(mdp, StdRng::seed_from_u64(seed))
    }

    /// Reseeds the random number generator.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl<M: DiscreteMdp, R: Rng> DiscreteMdpDriver<M, R> {
    /// Constructs a driver with the given random number generator.
    ///
    /// The driver has no current state until [`DiscreteMdpDriver::reset`] is called.
    pub fn new(mdp: Arc<M>, rng: R) -> Self {
        Self {
            mdp,
            rng,
            s: None,
            last_action: None,
        }
    }

    /// Samples an initial state and clears the last action.
    pub fn reset(&mut self) -> Result<usize, CoreError> {
        let s = categorical(
            &mut self.rng,
            self.mdp.initial_distribution().iter().copied(),
        )?;
        self.s = Some(s);
        self.last_action = None;
        Ok(s)
    }

    /// Takes action `a` in the current state and returns the sampled transition.
    pub fn step(&mut self, a: usize) -> Result<Transition, CoreError> {
        let s = self.s.ok_or(CoreError::NotReset)?;
        let n_actions = self.mdp.n_actions();
        if a >= n_actions {
            return Err(CoreError::InvalidAction(a, n_actions));
        }

        let ts = self.mdp.transitions(s, a);
        let ix = categorical(&mut self.rng, ts.iter().map(|t| t.probability))?;
        let t = ts[ix];
        trace!("s = {}, a = {} -> {:?}", s, a, t);

        self.s = Some(t.next_state);
        self.last_action = Some(a);
        Ok(t)
    }

    /// The current state, `None` before the first reset.
    pub fn state(&self) -> Option<usize> {
        self.s
    }

    /// The last action taken since the last reset.
    pub fn last_action(&self) -> Option<usize> {
        self.last_action
    }

    /// The MDP description the driver runs on.
    pub fn mdp(&self) -> &Arc<M> {
        &self.mdp
    }
}
